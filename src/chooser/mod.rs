//! Uniform random selection
//!
//! Picks one option with uniform probability, and produces the finite
//! reveal sequence behind the animated spin. The sequence is a plain
//! value producer; pacing the reveals is the frontend's job.

use std::time::Duration;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{Result, SpinPickError};

/// Default number of decoy reveals before the final draw
pub const DEFAULT_STEPS: usize = 10;

/// One step of a spin animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinStep {
    /// Intermediate decoy value, shown then replaced
    Reveal {
        value: String,
        step: usize,
        total: usize,
    },
    /// The outcome. Always the last step of a sequence.
    Settle { value: String },
}

/// Uniform random chooser
#[derive(Debug)]
pub struct Chooser {
    rng: SmallRng,
}

impl Chooser {
    /// Create a chooser seeded from the OS entropy source
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a deterministic chooser for tests
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Choose one element with uniform probability 1/n.
    /// Calls are independent; repeats are allowed.
    pub fn pick<'a>(&mut self, options: &'a [String]) -> Result<&'a str> {
        if options.is_empty() {
            return Err(SpinPickError::EmptySet);
        }
        let index = self.rng.gen_range(0..options.len());
        Ok(&options[index])
    }

    /// Start a spin over a snapshot of `options`: `steps` decoy
    /// reveals, each an independent uniform draw, then one settle
    /// carrying the outcome.
    pub fn spin(&mut self, options: &[String], steps: usize) -> Result<SpinSequence> {
        if options.is_empty() {
            return Err(SpinPickError::EmptySet);
        }
        Ok(SpinSequence {
            options: options.to_vec(),
            steps,
            emitted: 0,
            rng: SmallRng::seed_from_u64(self.rng.gen()),
        })
    }
}

impl Default for Chooser {
    fn default() -> Self {
        Self::new()
    }
}

/// Finite producer of spin steps.
///
/// Yields exactly `steps` `Reveal` items followed by one `Settle`,
/// every value an independent uniform draw over the snapshot taken at
/// creation. Consumed by value: a sequence cannot be restarted.
#[derive(Debug)]
pub struct SpinSequence {
    options: Vec<String>,
    steps: usize,
    emitted: usize,
    rng: SmallRng,
}

impl SpinSequence {
    /// Number of decoy reveals before the settle
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn draw(&mut self) -> String {
        let index = self.rng.gen_range(0..self.options.len());
        self.options[index].clone()
    }
}

impl Iterator for SpinSequence {
    type Item = SpinStep;

    fn next(&mut self) -> Option<SpinStep> {
        if self.emitted < self.steps {
            let step = self.emitted;
            self.emitted += 1;
            Some(SpinStep::Reveal {
                value: self.draw(),
                step,
                total: self.steps,
            })
        } else if self.emitted == self.steps {
            self.emitted += 1;
            Some(SpinStep::Settle { value: self.draw() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps + 1 - self.emitted.min(self.steps + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpinSequence {}

/// Delay before the reveal at `step` is replaced by the next one.
/// Grows from `base` at step 0 to just under 2x `base` at step 9,
/// matching the slowing-wheel feel of the original animation.
pub fn step_delay(base: Duration, step: usize) -> Duration {
    base * (5 + step as u32) / 5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_pick_empty_list() {
        let mut chooser = Chooser::from_seed(1);
        let err = chooser.pick(&[]).unwrap_err();
        assert!(matches!(err, SpinPickError::EmptySet));
    }

    #[test]
    fn test_pick_single_element_always_returns_it() {
        let mut chooser = Chooser::from_seed(1);
        let opts = options(&["Pizza"]);
        for _ in 0..100 {
            assert_eq!(chooser.pick(&opts).unwrap(), "Pizza");
        }
    }

    #[test]
    fn test_pick_is_uniform_over_many_draws() {
        let mut chooser = Chooser::from_seed(42);
        let opts = options(&["A", "B", "C", "D"]);

        let mut counts = [0usize; 4];
        for _ in 0..10_000 {
            let picked = chooser.pick(&opts).unwrap();
            let index = opts.iter().position(|o| o == picked).unwrap();
            counts[index] += 1;
        }

        // Expected 2500 each; allow a generous band around it
        for count in counts {
            assert!(
                (2200..=2800).contains(&count),
                "frequency {} outside uniform tolerance",
                count
            );
        }
    }

    #[test]
    fn test_spin_empty_list() {
        let mut chooser = Chooser::from_seed(1);
        let err = chooser.spin(&[], 10).unwrap_err();
        assert!(matches!(err, SpinPickError::EmptySet));
    }

    #[test]
    fn test_spin_sequence_shape() {
        let mut chooser = Chooser::from_seed(7);
        let opts = options(&["Pizza", "Sushi", "Tacos"]);
        let sequence = chooser.spin(&opts, 10).unwrap();
        assert_eq!(sequence.len(), 11);

        let steps: Vec<SpinStep> = sequence.collect();
        assert_eq!(steps.len(), 11);

        for (i, step) in steps.iter().take(10).enumerate() {
            match step {
                SpinStep::Reveal { value, step, total } => {
                    assert_eq!(*step, i);
                    assert_eq!(*total, 10);
                    assert!(opts.contains(value));
                }
                SpinStep::Settle { .. } => panic!("settle before the end"),
            }
        }
        match &steps[10] {
            SpinStep::Settle { value } => assert!(opts.contains(value)),
            SpinStep::Reveal { .. } => panic!("sequence must end with a settle"),
        }
    }

    #[test]
    fn test_spin_zero_steps_settles_immediately() {
        let mut chooser = Chooser::from_seed(7);
        let opts = options(&["Pizza"]);
        let steps: Vec<SpinStep> = chooser.spin(&opts, 0).unwrap().collect();
        assert_eq!(steps.len(), 1);
        assert!(matches!(&steps[0], SpinStep::Settle { value } if value == "Pizza"));
    }

    #[test]
    fn test_spin_is_deterministic_per_seed() {
        let opts = options(&["A", "B", "C"]);
        let a: Vec<SpinStep> = Chooser::from_seed(9).spin(&opts, 5).unwrap().collect();
        let b: Vec<SpinStep> = Chooser::from_seed(9).spin(&opts, 5).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spin_snapshots_options() {
        let mut chooser = Chooser::from_seed(3);
        let mut opts = options(&["Pizza", "Sushi"]);
        let sequence = chooser.spin(&opts, 5).unwrap();

        // Mutating the caller's list does not affect a running spin
        opts.clear();
        for step in sequence {
            let value = match step {
                SpinStep::Reveal { value, .. } => value,
                SpinStep::Settle { value } => value,
            };
            assert!(value == "Pizza" || value == "Sushi");
        }
    }

    #[test]
    fn test_step_delay_grows() {
        let base = Duration::from_millis(100);
        assert_eq!(step_delay(base, 0), Duration::from_millis(100));
        assert_eq!(step_delay(base, 5), Duration::from_millis(200));
        assert_eq!(step_delay(base, 9), Duration::from_millis(280));

        let mut previous = Duration::ZERO;
        for step in 0..20 {
            let delay = step_delay(base, step);
            assert!(delay >= previous);
            previous = delay;
        }
    }
}
