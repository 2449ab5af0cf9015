//! Asset importer format flags.
//!
//! The Open Asset Import Library builds an importer for every format it
//! knows unless told otherwise. Only a handful are needed, so the configure
//! step turns each importer on or off explicitly, in the order of
//! [`FORMATS`].

/// Every importer format code known to the asset import library.
pub const FORMATS: &[&str] = &[
    "3DS", "AC", "ASE", "ASSBIN", "ASSXML", "B3D", "BVH", "COLLADA", "DXF", "CSM", "HMP", "IRR",
    "LWO", "LWS", "MD2", "MD3", "MD5", "MDC", "MDL", "NFF", "NDO", "OFF", "OBJ", "OGRE", "OPENGEX",
    "PLY", "MS3D", "COB", "BLEND", "IFC", "XGL", "FBX", "Q3D", "Q3BSP", "RAW", "SMD", "STL",
    "TERRAGEN", "3D", "X",
];

/// The subset of [`FORMATS`] that gets built.
pub const ENABLED_FORMATS: &[&str] = &[
    "3DS", "COLLADA", "MD2", "MD3", "MD5", "MDL", "OBJ", "BLEND", "FBX", "IRR",
];

/// Enable flag for a single format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatFlag {
    pub code: &'static str,
    pub enabled: bool,
}

impl FormatFlag {
    /// CMake boolean spelling of the flag.
    pub fn as_cmake(&self) -> &'static str {
        if self.enabled {
            "YES"
        } else {
            "NO"
        }
    }
}

/// Ordered mapping from format code to enable flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatFlags {
    flags: Vec<FormatFlag>,
}

impl FormatFlags {
    /// Build the table from a master list and the enabled subset. Every
    /// enabled code must appear in `master`.
    pub fn new(master: &[&'static str], enabled: &[&str]) -> Self {
        debug_assert!(
            enabled.iter().all(|code| master.iter().any(|m| m == code)),
            "enabled formats must be a subset of the master list"
        );

        let flags = master
            .iter()
            .map(|&code| FormatFlag {
                code,
                enabled: enabled.contains(&code),
            })
            .collect();

        Self { flags }
    }

    /// The table for [`FORMATS`] and [`ENABLED_FORMATS`].
    pub fn importers() -> Self {
        Self::new(FORMATS, ENABLED_FORMATS)
    }

    pub fn get(&self, code: &str) -> Option<bool> {
        self.flags
            .iter()
            .find(|flag| flag.code == code)
            .map(|flag| flag.enabled)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatFlag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// `-DASSIMP_BUILD_<FMT>_IMPORTER=<YES|NO>` for each format, in order.
    pub fn importer_options(&self) -> Vec<String> {
        self.flags
            .iter()
            .map(|flag| format!("-DASSIMP_BUILD_{}_IMPORTER={}", flag.code, flag.as_cmake()))
            .collect()
    }
}
