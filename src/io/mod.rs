//! Input/output boundary, configuration and error handling

/// Command-line interface
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Image decoding, encoding and resampling
pub mod image;
/// Structured logging setup
pub mod logging;
/// Progress bars for the parallel phases
pub mod progress;
