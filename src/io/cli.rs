//! Command-line interface for batch stereogram generation

use crate::depth::shapes::ShapeKind;
use crate::io::configuration::{
    DEFAULT_DEPTH_SCALE, DEFAULT_EYE_SEPARATION, DEFAULT_HEIGHT, DEFAULT_WIDTH, OUTPUT_EXTENSION,
    OUTPUT_SUFFIX,
};
use crate::io::error::{Result, StereogramError, invalid_parameter};
use crate::io::image::{export_png, load_depth_source};
use crate::io::progress::ProgressManager;
use crate::synthesis::options::{AlignmentKind, GenerationOptions, ViewingMode};
use crate::synthesis::pipeline::{DepthSource, Generator, Stereogram};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Image extensions picked up when the target is a directory
const SOURCE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Guide overlay choices on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignmentArg {
    /// No overlay
    None,
    /// Two red dots
    Dots,
    /// Two outlined frames
    Frames,
    /// Two perspective cubes
    Cubes,
}

impl From<AlignmentArg> for AlignmentKind {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::None => Self::None,
            AlignmentArg::Dots => Self::Dots,
            AlignmentArg::Frames => Self::Frames,
            AlignmentArg::Cubes => Self::Cubes,
        }
    }
}

/// One solid or every solid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSelection {
    /// A single solid
    One(ShapeKind),
    /// All six solids
    All,
}

impl ShapeSelection {
    /// Solids covered by the selection
    pub fn shapes(self) -> Vec<ShapeKind> {
        match self {
            Self::One(shape) => vec![shape],
            Self::All => ShapeKind::ALL.to_vec(),
        }
    }
}

impl FromStr for ShapeSelection {
    type Err = StereogramError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::One)
    }
}

fn parse_shape_selection(s: &str) -> std::result::Result<ShapeSelection, String> {
    s.parse().map_err(|e: StereogramError| e.to_string())
}

#[derive(Parser)]
#[command(name = "autostereogram")]
#[command(
    author,
    version,
    about = "Generate random-dot autostereograms from depth images or procedural solids"
)]
/// Command-line arguments for the stereogram tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Depth image or directory of depth images; brighter is nearer
    #[arg(value_name = "TARGET", required_unless_present = "shape")]
    pub target: Option<PathBuf>,

    /// Render a procedural solid instead: sphere, cube, pyramid, cylinder, torus, cone or all
    #[arg(long, value_parser = parse_shape_selection, conflicts_with = "target")]
    pub shape: Option<ShapeSelection>,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Eye separation in pixels; 0 produces plain noise
    #[arg(short, long, default_value_t = DEFAULT_EYE_SEPARATION)]
    pub eye_separation: u32,

    /// Depth multiplier applied to the horizontal shift
    #[arg(short, long, default_value_t = DEFAULT_DEPTH_SCALE, allow_hyphen_values = true)]
    pub depth_scale: f64,

    /// Generate for cross-eyed instead of parallel viewing
    #[arg(short = 'x', long)]
    pub cross_eyed: bool,

    /// Noise blend from 0 (base colors) to 1 (pure noise); defaults depend on the source
    #[arg(short, long)]
    pub color_disparity: Option<f64>,

    /// Alignment guide drawn on top of the image
    #[arg(short, long, value_enum, default_value_t = AlignmentArg::Dots)]
    pub alignment: AlignmentArg,

    /// Random seed for reproducible noise; fresh entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory for generated images; defaults next to the source
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Viewing mode selected by the flags
    pub const fn viewing_mode(&self) -> ViewingMode {
        if self.cross_eyed {
            ViewingMode::CrossEyed
        } else {
            ViewingMode::Parallel
        }
    }

    /// Generation options for a source kind, with that kind's defaults filled in
    pub fn options_for(&self, job: &Job) -> GenerationOptions {
        let defaults = match job {
            Job::Image(_) => GenerationOptions::for_image(),
            Job::Shape(_) => GenerationOptions::for_shape(),
        };
        GenerationOptions {
            width: self.width,
            height: self.height,
            eye_separation: self.eye_separation,
            depth_scale: self.depth_scale,
            viewing_mode: self.viewing_mode(),
            color_disparity: self.color_disparity.unwrap_or(defaults.color_disparity),
            alignment: self.alignment.into(),
        }
    }
}

/// One image to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Depth image on disk
    Image(PathBuf),
    /// Procedural solid
    Shape(ShapeKind),
}

impl Job {
    /// Short name for progress display
    pub fn label(&self) -> String {
        match self {
            Self::Image(path) => path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            Self::Shape(shape) => shape.name().to_string(),
        }
    }

    /// Where the job's result is written
    pub fn output_path(&self, output_dir: Option<&Path>) -> PathBuf {
        let stem = match self {
            Self::Image(path) => path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            Self::Shape(shape) => shape.name().to_string(),
        };
        let output_name = format!("{stem}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}");

        let directory = match (output_dir, self) {
            (Some(dir), _) => Some(dir.to_path_buf()),
            (None, Self::Image(path)) => path.parent().map(Path::to_path_buf),
            (None, Self::Shape(_)) => None,
        };

        directory.map_or_else(|| PathBuf::from(&output_name), |dir| dir.join(&output_name))
    }
}

fn is_source_image(path: &Path) -> bool {
    let is_generated = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
    let has_extension = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    has_extension && !is_generated
}

/// Orchestrates batch generation with progress tracking
pub struct JobProcessor {
    cli: Cli,
    generator: Generator<StdRng>,
    progress_manager: Option<ProgressManager>,
}

impl JobProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let generator = cli.seed.map_or_else(Generator::from_entropy, Generator::seeded);

        Self {
            cli,
            generator,
            progress_manager,
        }
    }

    /// Generate every job described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, decoding, generation or export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let jobs = self.collect_jobs()?;

        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut written = Vec::with_capacity(jobs.len());
        for (index, job) in jobs.iter().enumerate() {
            written.push(self.process_job(job, index)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Jobs implied by the target or shape argument, skipping finished ones
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing, unreadable or not an image
    pub fn collect_jobs(&self) -> Result<Vec<Job>> {
        if let Some(selection) = self.cli.shape {
            let jobs = selection.shapes().into_iter().map(Job::Shape);
            return Ok(jobs.filter(|job| self.should_process(job)).collect());
        }

        let Some(target) = self.cli.target.as_ref() else {
            return Err(invalid_parameter(
                "target",
                &"<none>",
                &"a depth image, a directory or --shape is required",
            ));
        };

        if target.is_file() {
            if is_source_image(target) {
                let job = Job::Image(target.clone());
                Ok(if self.should_process(&job) { vec![job] } else { vec![] })
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a PNG, JPEG, BMP or GIF image",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| StereogramError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut paths = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file() && is_source_image(&path) {
                    paths.push(path);
                }
            }
            paths.sort();
            Ok(paths
                .into_iter()
                .map(Job::Image)
                .filter(|job| self.should_process(job))
                .collect())
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or a directory",
            ))
        }
    }

    fn should_process(&self, job: &Job) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = job.output_path(self.cli.output_dir.as_deref());
        if output_path.exists() {
            if !self.cli.quiet {
                warn!("Skipping: {} (output exists)", job.label());
            }
            false
        } else {
            true
        }
    }

    fn process_job(&mut self, job: &Job, index: usize) -> Result<PathBuf> {
        let options = self.cli.options_for(job);
        let output_path = job.output_path(self.cli.output_dir.as_deref());

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_job(index, &job.label(), options.height);
        }

        let stereogram = match job {
            Job::Image(path) => {
                let image = load_depth_source(path, options.width, options.height)?;
                let source = DepthSource::Image {
                    pixels: image.as_raw(),
                };
                self.generate(source, &options, index)?
            }
            Job::Shape(shape) => self.generate(DepthSource::Shape(*shape), &options, index)?,
        };

        export_png(&stereogram.buffer, &output_path)?;
        info!(
            "Wrote {} ({}x{}, pattern width {})",
            output_path.display(),
            options.width,
            options.height,
            stereogram.pattern_width
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_job(index);
        }

        Ok(output_path)
    }

    fn generate(
        &mut self,
        source: DepthSource<'_>,
        options: &GenerationOptions,
        index: usize,
    ) -> Result<Stereogram> {
        let progress = &mut self.progress_manager;
        self.generator
            .generate_with_progress(source, options, |row| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_rows(index, row + 1);
                }
            })
    }
}
