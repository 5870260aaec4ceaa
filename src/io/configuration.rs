//! Pipeline constants and runtime configuration defaults

/// Default edge length of a mosaic block in pixels
pub const DEFAULT_BLOCK_SIZE: u32 = 10;

/// File extensions accepted as dataset tiles (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Number of decode attempts for a tile before its block is reported as failed
pub const TILE_DECODE_ATTEMPTS: usize = 2;

// Output settings
/// Suffix added to the reference file stem when no output path is given
pub const OUTPUT_SUFFIX: &str = "_mosaic";

// Logging settings
/// Log filter used when neither `RUST_LOG` nor `--verbose` is set
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "warn";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
