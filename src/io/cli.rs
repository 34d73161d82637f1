//! Command-line interface for batch processing word lists into layouts

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::algorithm::placer::{PlacementResult, WordPlacer};
use crate::io::configuration::{DEFAULT_ATTEMPTS, DEFAULT_GRID_SIZE, DEFAULT_SEED, OUTPUT_SUFFIX};
use crate::io::error::{PlacementError, Result, invalid_parameter};
use crate::io::image::export_result_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::render_report;
use crate::io::wordlist::load_word_list;

#[derive(Parser)]
#[command(name = "wordweave")]
#[command(
    version,
    about = "Arrange word lists into crossword-style grid layouts"
)]
/// Command-line arguments for the layout tool
pub struct Cli {
    /// Input word list file or directory of .txt files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid row count (also column count unless --cols is given)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub rows: usize,

    /// Grid column count
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Full runs to try per word list, keeping the densest
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Also export the layout as a PNG image
    #[arg(short, long)]
    pub image: bool,

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

    /// Effective column count (square grid unless overridden)
    pub const fn effective_cols(&self) -> usize {
        match self.cols {
            Some(cols) => cols,
            None => self.rows,
        }
    }
}

/// Orchestrates batch processing of word lists with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process word lists according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, word list loading, or output
    /// writing fails.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"must be at least 1",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("txt") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a .txt word list",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("txt")
                    && !Self::is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a .txt word list or directory",
            ))
        }
    }

    // Generated layouts share the input extension; never re-process them
    fn is_output_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped inputs
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback when an image export is skipped
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path, self.cli.attempts);
        }

        let vocabulary = load_word_list(input_path)?;
        let word_count = vocabulary.len();
        let grid = crate::spatial::Grid::new(self.cli.rows, self.cli.effective_cols())?;
        let mut placer = WordPlacer::from_vocabulary(grid, vocabulary, self.cli.seed);

        let result = self.run_attempts(&mut placer, word_count);

        let report = render_report(&result);
        let output_path = Self::get_output_path(input_path);
        std::fs::write(&output_path, report).map_err(|e| PlacementError::FileSystem {
            path: output_path.clone(),
            operation: "write layout",
            source: e,
        })?;

        if self.cli.image {
            if result.letters.is_empty() {
                if !self.cli.quiet {
                    eprintln!(
                        "No letters placed for {}; skipping image export",
                        input_path.display()
                    );
                }
            } else {
                let image_path = Self::get_image_path(input_path);
                export_result_as_png(
                    &result,
                    image_path
                        .to_str()
                        .ok_or_else(|| invalid_parameter(
                            "target",
                            &image_path.display(),
                            &"image output path is not valid UTF-8",
                        ))?,
                )?;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(result.placed_count(), word_count);
        }

        Ok(())
    }

    /// Run full placements, keeping the densest result
    fn run_attempts(&self, placer: &mut WordPlacer, word_count: usize) -> PlacementResult {
        let mut best: Option<PlacementResult> = None;

        for attempt in 1..=self.cli.attempts {
            let result = placer.place_words();
            let complete = result.placed_count() == word_count;

            if best
                .as_ref()
                .is_none_or(|current| result.placed_count() > current.placed_count())
            {
                best = Some(result);
            }

            if let Some(ref pm) = self.progress_manager {
                pm.update_attempt(attempt);
            }

            if complete {
                break;
            }
        }

        best.unwrap_or_else(|| placer.place_words())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.txt", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    fn get_image_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let image_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(image_name)
        } else {
            PathBuf::from(image_name)
        }
    }
}
