//! Retry-driven pattern construction
//!
//! Generation is a two-level loop: each attempt seeds a fresh pattern at the
//! grid centre and greedily folds until the target length is reached or no
//! fold direction fits; failed attempts are discarded whole and re-rolled.
//! Randomness comes from an injected [`Rng`] so runs are reproducible, and
//! the retry loop carries an explicit attempt ceiling instead of spinning
//! forever on configurations that cannot succeed.

use rand::Rng;

use crate::algorithm::folding::{FoldDirection, FoldResult, Rotation, Triangle, next_fold_result};
use crate::algorithm::validity::Difficulty;
use crate::io::error::{GenerationError, invalid_parameter};
use crate::spatial::coordinates::GridPos;
use crate::spatial::pattern::Pattern;

/// Generation parameters: target length, lattice size, and difficulty
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of triangles the finished chain must cover exactly
    pub max_count: usize,
    /// Odd lattice side length, or any value ≤ 0 to derive the smallest odd
    /// size that fits `max_count` triangles
    pub grid_size: i32,
    /// How permissive the shape rules are
    pub difficulty: Difficulty,
}

impl GeneratorConfig {
    /// Resolve the configured grid size, applying the auto sentinel
    pub const fn effective_grid_size(&self) -> usize {
        if self.grid_size <= 0 {
            self.max_count.div_ceil(2) * 2 + 1
        } else {
            self.grid_size as usize
        }
    }

    /// Validate the configuration before any generation work
    fn validate(&self) -> crate::Result<()> {
        if self.max_count == 0 {
            return Err(invalid_parameter(
                "max_count",
                &self.max_count,
                &"at least one triangle is required",
            ));
        }
        if self.grid_size > 0 && self.grid_size % 2 == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &"grid size must be odd so a unique centre cell exists",
            ));
        }
        Ok(())
    }
}

/// Outcome details of a successful generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Attempts consumed, counting the successful one
    pub attempts: usize,
}

/// Pattern generator owning the single active pattern
///
/// The pattern is replaced wholesale on reconfiguration and reset at the
/// start of every attempt; callers read it through [`pattern`](Self::pattern)
/// after a successful [`generate`](Self::generate).
#[derive(Debug)]
pub struct PatternGenerator {
    config: GeneratorConfig,
    pattern: Pattern,
}

impl PatternGenerator {
    /// Create a generator with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `max_count` is zero or a positive `grid_size` is
    /// even.
    pub fn new(config: GeneratorConfig) -> crate::Result<Self> {
        config.validate()?;
        let pattern = Pattern::new(config.effective_grid_size());
        Ok(Self { config, pattern })
    }

    /// Current configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Target chain length
    pub const fn max_count(&self) -> usize {
        self.config.max_count
    }

    /// Read surface of the active pattern
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Replace the configuration, keeping the pattern when nothing changed
    ///
    /// Returns `false` without touching the pattern when the configuration is
    /// identical, so callers know whether a new pattern must be generated.
    /// Otherwise installs a fresh empty pattern sized for the new
    /// configuration and returns `true`.
    ///
    /// # Errors
    ///
    /// Returns an error if the new configuration fails validation; the
    /// previous configuration and pattern stay in place.
    pub fn set_config(&mut self, config: GeneratorConfig) -> crate::Result<bool> {
        if config == self.config {
            return Ok(false);
        }
        config.validate()?;
        self.pattern = Pattern::new(config.effective_grid_size());
        self.config = config;
        Ok(true)
    }

    /// Generate a pattern, retrying whole attempts up to `max_attempts`
    ///
    /// On success the accepted pattern is left in place for
    /// [`pattern`](Self::pattern) and the consumed attempt count is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AttemptsExhausted`] when no attempt reaches
    /// `max_count` triangles and passes the acceptance check, and an invalid
    /// parameter error when `max_attempts` is zero.
    pub fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        max_attempts: usize,
    ) -> crate::Result<GenerationReport> {
        if max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &max_attempts,
                &"at least one attempt is required",
            ));
        }

        for attempt in 1..=max_attempts {
            self.start_new_pattern(rng);
            self.fold_pattern_until_done(rng);

            if self.pattern.len() == self.config.max_count
                && self.pattern.is_valid(self.config.difficulty)
            {
                return Ok(GenerationReport { attempts: attempt });
            }
        }

        Err(GenerationError::AttemptsExhausted {
            attempts: max_attempts,
            max_count: self.config.max_count,
            grid_size: self.pattern.grid_size(),
        })
    }

    /// Reset the pattern and commit the seed triangle at the grid centre
    ///
    /// The seed sits on layer 0 with the first rotation, a uniformly random
    /// clockwise flag, and a sentinel flat fold that no fold produced.
    fn start_new_pattern<R: Rng>(&mut self, rng: &mut R) {
        let mid = (self.pattern.grid_size() / 2) as i32;

        self.pattern.reset();
        self.pattern.add_fold_result(FoldResult {
            position: GridPos::new(0, mid, mid),
            triangle: Triangle {
                rotation: Rotation::TopRight,
                clockwise: rng.random_bool(0.5),
                index: 0,
            },
            fold: FoldDirection::Flat,
        });
    }

    /// Grow the chain until the target length or until no direction fits
    ///
    /// Each step draws a uniformly random starting direction and tries the
    /// three fold directions round-robin from there. All three failing means
    /// the shape is stuck short of the target; the attempt ends and the outer
    /// retry loop takes over.
    fn fold_pattern_until_done<R: Rng>(&mut self, rng: &mut R) {
        while self.pattern.len() < self.config.max_count {
            let start = rng.random_range(0..FoldDirection::ALL.len());
            let committed = FoldDirection::ALL
                .iter()
                .cycle()
                .skip(start)
                .take(FoldDirection::ALL.len())
                .any(|&fold| self.try_apply_fold(fold));

            if !committed {
                return;
            }
        }
    }

    /// Attempt one fold from the most recent triangle
    ///
    /// Computes the candidate with the fold math, validates it against the
    /// store, and commits on success. Returns whether a fold was committed;
    /// a full pattern always fails fast.
    fn try_apply_fold(&mut self, fold: FoldDirection) -> bool {
        if self.pattern.len() == self.config.max_count {
            return false;
        }
        let Some(prev) = self.pattern.prev_result() else {
            return false;
        };

        let candidate = next_fold_result(prev, fold, self.pattern.len());
        if self.pattern.can_add_fold_result(&candidate, self.config.difficulty) {
            self.pattern.add_fold_result(candidate);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{GeneratorConfig, PatternGenerator};
    use crate::algorithm::folding::FoldDirection;
    use crate::algorithm::validity::Difficulty;
    use crate::io::error::GenerationError;
    use crate::spatial::coordinates::GridPos;
    use rand::{SeedableRng, rngs::StdRng};

    fn config(max_count: usize, grid_size: i32, difficulty: Difficulty) -> GeneratorConfig {
        GeneratorConfig {
            max_count,
            grid_size,
            difficulty,
        }
    }

    #[test]
    fn test_auto_grid_size_fits_target() {
        assert_eq!(config(20, 0, Difficulty::Easy).effective_grid_size(), 21);
        assert_eq!(config(5, 0, Difficulty::Easy).effective_grid_size(), 7);
        assert_eq!(config(5, -3, Difficulty::Easy).effective_grid_size(), 7);
        assert_eq!(config(5, 9, Difficulty::Easy).effective_grid_size(), 9);
    }

    #[test]
    fn test_zero_max_count_fails_fast() {
        let result = PatternGenerator::new(config(0, 5, Difficulty::Easy));
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter { parameter: "max_count", .. })
        ));
    }

    #[test]
    fn test_even_grid_size_fails_fast() {
        let result = PatternGenerator::new(config(4, 6, Difficulty::Easy));
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter { parameter: "grid_size", .. })
        ));
    }

    #[test]
    fn test_single_triangle_terminates_after_seeding() {
        let Ok(mut generator) = PatternGenerator::new(config(1, 5, Difficulty::Medium)) else {
            unreachable!("configuration is valid");
        };
        let mut rng = StdRng::seed_from_u64(3);

        let report = generator.generate(&mut rng, 1);
        assert_eq!(report.map(|r| r.attempts), Ok(1));

        let pattern = generator.pattern();
        assert_eq!(pattern.len(), 1);
        let folds = pattern.folds();
        assert_eq!(folds.first().map(|f| f.position), Some(GridPos::new(0, 2, 2)));
        assert_eq!(folds.first().map(|f| f.fold), Some(FoldDirection::Flat));
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut sequences = Vec::new();
        for _ in 0..2 {
            let Ok(mut generator) = PatternGenerator::new(config(12, 0, Difficulty::Medium)) else {
                unreachable!("configuration is valid");
            };
            let mut rng = StdRng::seed_from_u64(99);
            assert!(generator.generate(&mut rng, 10_000).is_ok());
            sequences.push(generator.pattern().folds().to_vec());
        }
        assert_eq!(sequences.first(), sequences.last());
    }

    #[test]
    fn test_set_config_is_a_noop_when_unchanged() {
        let settings = config(6, 0, Difficulty::Easy);
        let Ok(mut generator) = PatternGenerator::new(settings) else {
            unreachable!("configuration is valid");
        };
        let mut rng = StdRng::seed_from_u64(11);
        assert!(generator.generate(&mut rng, 10_000).is_ok());

        assert_eq!(generator.set_config(settings), Ok(false));
        assert_eq!(generator.pattern().len(), 6, "pattern must survive a no-op");

        let changed = generator.set_config(config(6, 0, Difficulty::Hard));
        assert_eq!(changed, Ok(true));
        assert!(generator.pattern().is_empty(), "new config installs a fresh pattern");
    }

    #[test]
    fn test_exhaustion_is_reported_not_hung() {
        // A 1x1 grid pins every layer to the single cell, so a 4-chain can
        // never spread across two rows and the acceptance check always fails.
        let Ok(mut generator) = PatternGenerator::new(config(4, 1, Difficulty::Easy)) else {
            unreachable!("configuration is valid");
        };
        let mut rng = StdRng::seed_from_u64(5);

        let result = generator.generate(&mut rng, 50);
        assert!(matches!(
            result,
            Err(GenerationError::AttemptsExhausted { attempts: 50, max_count: 4, .. })
        ));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let Ok(mut generator) = PatternGenerator::new(config(3, 5, Difficulty::Easy)) else {
            unreachable!("configuration is valid");
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generator.generate(&mut rng, 0),
            Err(GenerationError::InvalidParameter { parameter: "max_attempts", .. })
        ));
    }
}
