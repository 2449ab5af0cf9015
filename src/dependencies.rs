//! The fixed table of third-party libraries to fetch and build.

use std::path::{Path, PathBuf};

use url::Url;

use crate::formats::FormatFlags;

/// One external library: where to get it and how to configure it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Human-readable name used in progress output.
    pub name: &'static str,
    /// Git remote to clone from.
    pub url: &'static str,
    /// Tag, branch or commit to check out.
    pub revision: &'static str,
    /// Extra options passed to the configure step.
    pub options: Vec<String>,
}

impl Dependency {
    /// Directory name derived from the repository URL: its last path
    /// component without extension.
    pub fn short_name(&self) -> String {
        short_name(self.url)
    }

    /// Clone location under `build_dir`.
    pub fn source_dir(&self, build_dir: &Path) -> PathBuf {
        build_dir.join(self.short_name())
    }

    /// Out-of-source build tree inside the clone.
    pub fn build_dir(&self, build_dir: &Path) -> PathBuf {
        self.source_dir(build_dir).join("build")
    }
}

/// Last path component of a repository URL, extension stripped.
///
/// Handles regular URLs (`https://`, `ssh://`, `file://`) as well as
/// scp-style remotes like `git@github.com:owner/repo.git` and local paths.
pub fn short_name(url: &str) -> String {
    let last = match Url::parse(url) {
        Ok(parsed) if parsed.path_segments().is_some() => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        _ => None,
    };

    let last = last.unwrap_or_else(|| {
        url.trim_end_matches('/')
            .rsplit(['/', ':'])
            .next()
            .unwrap_or(url)
            .to_string()
    });

    Path::new(&last)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or(last)
}

/// All dependencies, in the order they are processed.
pub fn dependencies() -> Vec<Dependency> {
    let mut assimp_options = vec![
        "-Wno-dev".to_string(),
        "-DASSIMP_BUILD_ASSIMP_TOOLS=OFF".to_string(),
        "-DASSIMP_BUILD_TESTS=OFF".to_string(),
    ];
    assimp_options.extend(FormatFlags::importers().importer_options());

    vec![
        Dependency {
            name: "the_Foundation",
            url: "ssh://git@github.com/skyjake/the_Foundation.git",
            revision: "origin/master",
            options: vec!["-DUNISTRING_DIR=/usr/local".to_string()],
        },
        Dependency {
            name: "Open Asset Import Library",
            url: "https://github.com/assimp/assimp.git",
            revision: "v4.1.0",
            options: assimp_options,
        },
        Dependency {
            name: "cginternals/glbinding",
            url: "https://github.com/cginternals/glbinding.git",
            revision: "v3.0.2",
            options: vec![
                "-Wno-dev".to_string(),
                "-DOPTION_BUILD_EXAMPLES=NO".to_string(),
                "-DOPTION_BUILD_TOOLS=NO".to_string(),
                "-DOPTION_BUILD_TESTS=NO".to_string(),
            ],
        },
    ]
}
