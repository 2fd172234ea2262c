//! Command-line interface for generating and printing puzzles

use crate::algorithm::executor::{GeneratorConfig, PatternGenerator};
use crate::algorithm::validity::Difficulty;
use crate::io::configuration::{AUTO_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED};
use crate::io::description::describe_pattern;
use crate::io::error::{Result, invalid_parameter};
use crate::io::palette::{PALETTE_TAGS, Palette, palette_by_tag};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::LazyLock;

/// Difficulty as exposed on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    /// Simple snaking shapes on few layers
    Easy,
    /// Folded-back shapes requiring a 3-D fold
    Medium,
    /// Tight spirals allowed, 3-D fold required
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "trifold")]
#[command(
    author,
    version,
    about = "Generate triangle-folding puzzle patterns and print their folding instructions"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Puzzle difficulty
    #[arg(short, long, value_enum, default_value = "medium")]
    pub difficulty: DifficultyArg,

    /// Odd grid side length; 0 derives the smallest size fitting the target
    #[arg(short, long, default_value_t = AUTO_GRID_SIZE)]
    pub grid_size: i32,

    /// Number of triangles in the chain; defaults to the palette length
    #[arg(short, long)]
    pub triangles: Option<usize>,

    /// Colour set used for the folding instructions
    #[arg(short, long, default_value = "pink-blue-purple-green",
          value_parser = PALETTE_TAGS)]
    pub palette: String,

    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Whole-attempt retries before giving up on a configuration
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Orchestrates batch pattern generation with progress tracking
pub struct PuzzleRunner {
    cli: Cli,
    progress: Option<ProgressBar>,
}

impl PuzzleRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(|| {
            let bar = ProgressBar::new(cli.count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });

        Self { cli, progress }
    }

    /// Generate the requested puzzles and print their instructions
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation, the palette
    /// tag is unknown, or any puzzle exhausts its attempt budget.
    pub fn process(&self) -> Result<()> {
        let palette = palette_by_tag(&self.cli.palette)?;
        let max_count = self.cli.triangles.unwrap_or(palette.len());

        if max_count > palette.len() {
            return Err(invalid_parameter(
                "triangles",
                &max_count,
                &format!("palette '{}' colours at most {} triangles", palette.tag, palette.len()),
            ));
        }

        let mut generator = PatternGenerator::new(GeneratorConfig {
            max_count,
            grid_size: self.cli.grid_size,
            difficulty: self.cli.difficulty.into(),
        })?;

        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        for puzzle in 1..=self.cli.count {
            generator.generate(&mut rng, self.cli.attempts)?;
            self.print_pattern(&generator, &palette, puzzle);

            if let Some(bar) = &self.progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = &self.progress {
            bar.finish();
        }

        Ok(())
    }

    // Instruction sheets are the tool's output
    #[allow(clippy::print_stdout)]
    fn print_pattern(&self, generator: &PatternGenerator, palette: &Palette, puzzle: usize) {
        let pattern = generator.pattern();
        let text = describe_pattern(
            pattern.folds(),
            pattern.start_clockwise(),
            pattern.layers_count(),
            palette,
        );

        if self.cli.count > 1 {
            println!("--- Puzzle {puzzle} ---");
        }
        println!("{text}");
    }
}
