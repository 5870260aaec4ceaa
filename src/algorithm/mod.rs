/// Tile scaling and placement onto the canvas
pub mod compositor;
/// Pipeline configuration and parallel orchestration
pub mod executor;
/// Nearest-color tile lookup
pub mod matcher;
/// Run-level summary and per-block failures
pub mod report;
