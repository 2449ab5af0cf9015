//! Top-level command flow: help, settings, then the build driver.

use anyhow::{Context, Result};
use log::{debug, info};

use build_deps::defaults;
use build_deps::dependencies::dependencies;
use build_deps::driver::BuildDriver;
use build_deps::options::Options;
use build_deps::output::OutputConfig;
use build_deps::runner::SystemRunner;
use build_deps::settings::Settings;

/// Execute a parsed invocation.
pub fn execute(options: Options, no_arguments: bool) -> Result<()> {
    init_logging(&options.log_level);

    // Usage goes out before anything on disk is touched.
    if options.wants_help(no_arguments) {
        println!("{}", Options::usage());
        return Ok(());
    }

    let settings_path = defaults::settings_path()?;
    let mut settings = Settings::load(&settings_path)?;
    debug!("Loaded settings: {:?}", settings);

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    options.apply(&mut settings, &cwd);
    settings.save(&settings_path)?;

    info!(
        "build type {}, generator {}, build dir {}",
        settings.build_type,
        settings.generator,
        settings.build_dir.display()
    );

    let output = OutputConfig::from_env_and_flag(&options.color);
    BuildDriver::new(&settings, options.action(), output)
        .run(&dependencies(), &mut SystemRunner)?;

    Ok(())
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second init (in tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
