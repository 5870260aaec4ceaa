//! Command-line interface for building a photomosaic

use crate::algorithm::executor::{MosaicConfig, MosaicPipeline};
use crate::algorithm::report::RunReport;
use crate::color::ColorMetric;
use crate::io::configuration::{DEFAULT_BLOCK_SIZE, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::ResampleFilter;
use crate::io::logging::filter_directive;
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image out of tile images matched by average color"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Reference image to reproduce
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Directory of tile images (jpg, jpeg, png)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Output file, defaults to <REFERENCE stem>_mosaic.<ext> next to the reference
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Edge length of each block in pixels
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BLOCK_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub block_size: u32,

    /// Color distance used to match tiles to blocks
    #[arg(short, long, value_enum, default_value_t = ColorMetric::default())]
    pub metric: ColorMetric,

    /// Interpolation used to scale tiles to block size
    #[arg(short, long, value_enum, default_value_t = ResampleFilter::default())]
    pub filter: ResampleFilter,

    /// Worker threads, defaults to the number of available cores
    #[arg(
        short = 'j',
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub threads: Option<usize>,

    /// Suppress progress bars and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Fail when any block could not be placed (the output is still written)
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter matching the verbosity flags
    pub const fn log_filter(&self) -> &'static str {
        filter_directive(self.quiet, self.verbose)
    }

    /// Output path, derived from the reference when not given
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.reference))
    }

    /// Translate the arguments into a pipeline configuration
    pub fn to_config(&self) -> MosaicConfig {
        MosaicConfig {
            block_size: self.block_size,
            metric: self.metric,
            filter: self.filter,
            threads: self.threads,
            strict: self.strict,
            ..MosaicConfig::new(&self.reference, &self.dataset, self.output_path())
        }
    }

    /// Build the mosaic described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline hits a fatal condition
    pub fn run(&self) -> Result<RunReport> {
        MosaicPipeline::new(self.to_config(), self.should_show_progress()).run()
    }
}

/// `<stem>_mosaic.<ext>` next to `reference`, falling back to `.png` without an extension
pub fn default_output_path(reference: &Path) -> PathBuf {
    let stem = reference.file_stem().unwrap_or_default();
    let extension = reference
        .extension()
        .map_or_else(|| "png".into(), |ext| ext.to_string_lossy());
    let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    if let Some(parent) = reference.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
