//! Property-based tests for option resolution and the format flag table.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::formats::FormatFlags;
    use crate::options::Options;
    use crate::settings::Settings;
    use clap::Parser;
    use proptest::prelude::*;
    use proptest::sample::subsequence;
    use std::path::{Path, PathBuf};

    const CODES: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H"];

    fn parse(args: &[String]) -> Options {
        Options::try_parse_from(std::iter::once("build-deps".to_string()).chain(args.iter().cloned()))
            .unwrap()
    }

    proptest! {
        /// Property: a flag is enabled exactly when its code is in the enabled subset
        #[test]
        fn format_flag_iff_enabled(enabled in subsequence(CODES, 0..=CODES.len())) {
            let flags = FormatFlags::new(CODES, &enabled);

            prop_assert_eq!(flags.len(), CODES.len());
            for flag in flags.iter() {
                prop_assert_eq!(flag.enabled, enabled.contains(&flag.code));
                prop_assert_eq!(flag.as_cmake() == "YES", flag.enabled);
            }
        }

        /// Property: the last -t value is the one applied
        #[test]
        fn last_build_type_wins(types in prop::collection::vec("[A-Za-z]{1,12}", 1..6)) {
            let args: Vec<String> = types
                .iter()
                .flat_map(|t| ["-t".to_string(), t.clone()])
                .collect();

            let mut settings = Settings::default();
            parse(&args).apply(&mut settings, Path::new("/"));

            prop_assert_eq!(&settings.build_type, types.last().unwrap());
        }

        /// Property: the last bare directory is the one applied
        #[test]
        fn last_build_dir_wins(dirs in prop::collection::vec("/[a-z]{1,8}(/[a-z]{1,8}){0,2}", 1..5)) {
            let mut args = vec!["build".to_string()];
            args.extend(dirs.iter().cloned());

            let mut settings = Settings::default();
            parse(&args).apply(&mut settings, Path::new("/"));

            prop_assert_eq!(settings.build_dir, PathBuf::from(dirs.last().unwrap()));
        }
    }
}
