//! Mosaic pipeline orchestration
//!
//! A run has two parallel phases separated by a full join:
//! 1. Dataset indexing and reference division, run side by side.
//! 2. Matching and compositing, one task per block, each block row writing
//!    into its own canvas band.
//!
//! The canvas is encoded exactly once, after the second phase has joined.

use crate::algorithm::compositor::Compositor;
use crate::algorithm::matcher::match_block;
use crate::algorithm::report::{BlockFailure, RunReport};
use crate::color::{ColorDistance, ColorMetric};
use crate::io::configuration::{DEFAULT_BLOCK_SIZE, SUPPORTED_EXTENSIONS, TILE_DECODE_ATTEMPTS};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{ResampleFilter, load_rgb, save_rgb};
use crate::io::progress::{PhaseProgress, ProgressManager};
use crate::palette::dataset::list_tile_files;
use crate::palette::{PaletteBuild, PaletteIndex};
use crate::spatial::{Block, BlockGrid, CanvasBand, MosaicCanvas};
use image::RgbImage;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Validated options for one mosaic run
#[derive(Clone, Debug)]
pub struct MosaicConfig {
    /// Image whose blocks are replaced
    pub reference: PathBuf,
    /// Directory holding the tile images
    pub dataset: PathBuf,
    /// File the mosaic is written to
    pub output: PathBuf,
    /// Edge length of a block in pixels
    pub block_size: u32,
    /// Metric used to compare block and tile colors
    pub metric: ColorMetric,
    /// Interpolation used to scale tiles to blocks
    pub filter: ResampleFilter,
    /// Worker count, defaults to the available parallelism
    pub threads: Option<usize>,
    /// Treat unplaced blocks as a failed run
    pub strict: bool,
}

impl MosaicConfig {
    /// Configuration with default block size, metric and filter
    pub fn new(
        reference: impl Into<PathBuf>,
        dataset: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            reference: reference.into(),
            dataset: dataset.into(),
            output: output.into(),
            block_size: DEFAULT_BLOCK_SIZE,
            metric: ColorMetric::default(),
            filter: ResampleFilter::default(),
            threads: None,
            strict: false,
        }
    }

    /// Check parameters that the type system does not rule out
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] for a zero block size or thread count
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(invalid_parameter(
                "block_size",
                &self.block_size,
                &"must be a positive number of pixels",
            ));
        }
        if self.threads == Some(0) {
            return Err(invalid_parameter(
                "threads",
                &0,
                &"at least one worker is required",
            ));
        }
        Ok(())
    }

    /// Number of workers the pool will be sized to
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
        })
    }
}

/// Runs the full reference-to-mosaic pipeline
pub struct MosaicPipeline {
    config: MosaicConfig,
    progress: ProgressManager,
}

impl MosaicPipeline {
    /// Create a pipeline, optionally drawing progress bars
    pub fn new(config: MosaicConfig, show_progress: bool) -> Self {
        Self {
            config,
            progress: ProgressManager::new(show_progress),
        }
    }

    /// The configuration this pipeline runs with
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Progress bars of this pipeline's phases
    pub const fn progress(&self) -> &ProgressManager {
        &self.progress
    }

    /// Build the mosaic and write it to the configured output
    ///
    /// Progress bars are cleared whether or not the run succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid or the worker pool cannot start
    /// - The dataset directory cannot be listed
    /// - The reference image cannot be decoded
    /// - No dataset tile can be decoded (nothing is written)
    /// - The output cannot be written
    /// - Strict mode is on and some blocks were not placed (the output is still written)
    pub fn run(&self) -> Result<RunReport> {
        let outcome = self.build();
        self.progress.finish();
        outcome
    }

    /// Write a composed canvas to the configured output and judge the run
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written, or
    /// [`MosaicError::IncompleteMosaic`] in strict mode when `report` lists
    /// unplaced blocks. The output is written in both cases.
    pub fn persist(&self, canvas: &MosaicCanvas, report: RunReport) -> Result<RunReport> {
        save_rgb(canvas.as_image(), &self.config.output)?;
        report.log_summary();

        if self.config.strict && !report.is_complete() {
            return Err(MosaicError::IncompleteMosaic {
                failed: report.failed_blocks.len(),
                total: report.blocks_total,
                output: report.output,
            });
        }
        Ok(report)
    }

    fn build(&self) -> Result<RunReport> {
        let started = Instant::now();
        self.config.validate()?;

        let workers = self.config.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("mosaic-worker-{index}"))
            .build()
            .map_err(|e| MosaicError::ThreadPool {
                reason: e.to_string(),
            })?;
        info!(
            workers,
            block_size = self.config.block_size,
            metric = %self.config.metric,
            "starting mosaic"
        );

        let (canvas, report) = pool.install(|| self.compose())?;
        let report = RunReport {
            elapsed: started.elapsed(),
            ..report
        };
        self.persist(&canvas, report)
    }

    // Everything up to, but not including, persisting the canvas
    fn compose(&self) -> Result<(MosaicCanvas, RunReport)> {
        let tile_paths = list_tile_files(&self.config.dataset, SUPPORTED_EXTENSIONS)?;
        info!(
            dataset = %self.config.dataset.display(),
            tiles = tile_paths.len(),
            "indexing dataset"
        );

        let index_progress = self.progress.phase("indexing tiles", tile_paths.len());
        let (build, divided) = rayon::join(
            || PaletteIndex::build(&tile_paths, &index_progress),
            || self.divide_reference(),
        );
        index_progress.finish("done");
        let (reference, grid) = divided?;
        let PaletteBuild { palette, skipped } = build;

        if palette.is_empty() {
            return Err(MosaicError::EmptyPalette {
                dataset: self.config.dataset.clone(),
                skipped: skipped.len(),
            });
        }
        info!(
            tiles = palette.len(),
            skipped = skipped.len(),
            blocks = grid.len(),
            columns = grid.columns(),
            rows = grid.rows(),
            "palette and block grid ready"
        );

        let compositor = Compositor::new(self.config.filter, TILE_DECODE_ATTEMPTS);
        let mut canvas = MosaicCanvas::from_reference(&reference);
        let place_progress = self.progress.phase("placing blocks", grid.len());
        let failed_blocks = place_blocks(
            &grid,
            &palette,
            &self.config.metric,
            &compositor,
            &mut canvas,
            &place_progress,
        )?;
        place_progress.finish("done");

        let report = RunReport {
            tiles_indexed: palette.len(),
            skipped_tiles: skipped,
            blocks_total: grid.len(),
            failed_blocks,
            cache: compositor.cache().stats(),
            output: self.config.output.clone(),
            elapsed: Duration::ZERO,
        };
        Ok((canvas, report))
    }

    fn divide_reference(&self) -> Result<(RgbImage, BlockGrid)> {
        let reference = load_rgb(&self.config.reference)?;
        let grid = BlockGrid::divide(&reference, self.config.block_size)?;
        Ok((reference, grid))
    }
}

/// Match every block of `grid` and write its tile into `canvas`
///
/// Each block row is placed by one task that owns the canvas band under it.
/// A block whose tile cannot be rendered or written keeps the canvas pixels
/// already there and is returned as a [`BlockFailure`], in row-major order;
/// the remaining blocks are still placed.
///
/// # Errors
///
/// Returns [`MosaicError::NoMatchFound`] if the palette is empty
pub fn place_blocks<M>(
    grid: &BlockGrid,
    palette: &PaletteIndex,
    metric: &M,
    compositor: &Compositor,
    canvas: &mut MosaicCanvas,
    progress: &PhaseProgress,
) -> Result<Vec<BlockFailure>>
where
    M: ColorDistance + ?Sized,
{
    let bands = canvas.bands_mut(grid.block_size());
    let rows: Vec<&[Block]> = grid.block_rows().collect();
    let failures = bands
        .into_par_iter()
        .zip(rows)
        .map(|(mut band, row)| place_row(&mut band, row, palette, metric, compositor, progress))
        .collect::<Result<Vec<_>>>()?;
    Ok(failures.into_iter().flatten().collect())
}

// Matching failures are fatal; placement failures become report entries.
fn place_row<M>(
    band: &mut CanvasBand<'_>,
    row: &[Block],
    palette: &PaletteIndex,
    metric: &M,
    compositor: &Compositor,
    progress: &PhaseProgress,
) -> Result<Vec<BlockFailure>>
where
    M: ColorDistance + ?Sized,
{
    let rendered = row
        .par_iter()
        .map(|block| -> Result<_> {
            let tile = match_block(block, palette, metric)?;
            Ok((block, tile, compositor.render(block, tile)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut failures = Vec::new();
    for (block, tile, pixels) in rendered {
        let placed = pixels.and_then(|pixels| Compositor::write(band, block, tile, &pixels));
        progress.inc();
        if let Err(error) = placed {
            warn!(
                x = block.x,
                y = block.y,
                tile = %tile.path().display(),
                %error,
                "leaving block unplaced"
            );
            failures.push(BlockFailure {
                position: block.position(),
                tile: tile.path().to_path_buf(),
                error,
            });
        }
    }
    Ok(failures)
}
