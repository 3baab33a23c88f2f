//! Interval sweep - grow-the-curve animation
//!
//! Replays the current curve from an empty interval up to its full
//! length in fixed increments. The sweep is a finite iterator owned by
//! the app and advanced one value per GUI frame, so input stays live and
//! the animation can be cancelled or restarted mid-run.

/// Interval increment per frame
const SWEEP_STEP: f32 = 0.02;

/// A finite, restartable sequence of interval values from 0 up to a target
///
/// Yields `step, 2·step, …` and finally the target itself, then ends.
/// A non-positive target produces an empty sweep.
#[derive(Clone, Debug)]
pub struct IntervalSweep {
    target: f32,
    step: f32,
    current: f32,
    done: bool,
}

impl IntervalSweep {
    /// Sweep from 0 to `target` in the default increment
    pub fn new(target: f32) -> Self {
        Self::with_step(target, SWEEP_STEP)
    }

    /// Sweep with a custom increment; non-positive steps fall back to the
    /// default
    pub fn with_step(target: f32, step: f32) -> Self {
        let step = if step > 0.0 { step } else { SWEEP_STEP };
        Self {
            target,
            step,
            current: 0.0,
            done: false,
        }
    }

    /// The interval value the sweep ends on
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Rewind to the beginning without changing target or step
    pub fn restart(&mut self) {
        self.current = 0.0;
        self.done = false;
    }
}

impl Iterator for IntervalSweep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.done || self.target <= 0.0 {
            self.done = true;
            return None;
        }

        self.current += self.step;
        if self.current >= self.target {
            // Land on the target exactly instead of overshooting
            self.done = true;
            return Some(self.target);
        }

        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_sweep_is_finite_and_lands_on_target() {
        let values: Vec<f32> = IntervalSweep::new(1.0).collect();
        assert!(!values.is_empty());
        assert_relative_eq!(*values.last().unwrap(), 1.0);

        // Strictly increasing, never past the target
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(values.iter().all(|v| *v <= 1.0));
    }

    #[test]
    fn test_sweep_step_size() {
        let values: Vec<f32> = IntervalSweep::with_step(1.0, 0.25).collect();
        assert_eq!(values.len(), 4);
        assert_relative_eq!(values[0], 0.25);
        assert_relative_eq!(values[1], 0.5);
    }

    #[test]
    fn test_empty_for_non_positive_target() {
        assert_eq!(IntervalSweep::new(0.0).count(), 0);
        assert_eq!(IntervalSweep::new(-2.0).count(), 0);
    }

    #[test]
    fn test_restart() {
        let mut sweep = IntervalSweep::with_step(0.5, 0.1);
        let first: Vec<f32> = sweep.by_ref().collect();
        assert!(sweep.next().is_none());

        sweep.restart();
        let second: Vec<f32> = sweep.collect();
        assert_eq!(first.len(), second.len());
        assert_relative_eq!(*second.last().unwrap(), 0.5);
    }

    #[test]
    fn test_bad_step_falls_back() {
        let values: Vec<f32> = IntervalSweep::with_step(0.1, 0.0).collect();
        assert!(!values.is_empty());
        assert_relative_eq!(*values.last().unwrap(), 0.1);
    }
}
