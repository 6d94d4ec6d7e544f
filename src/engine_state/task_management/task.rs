//! # Task Module
//!
//! Defines the unit of work run by the [`PeriodicTaskRunner`](super::PeriodicTaskRunner).

/// A callback fired by the periodic task runner.
///
/// `C` is the context the runner is driven with; it lets a task read or
/// reset state owned by whoever drives the runner.
pub trait Task<C> {
    /// Runs the task.
    ///
    /// # Arguments
    /// * `context` - The runner's context for this tick
    /// * `now` - The tick time, in seconds
    fn process(&mut self, context: &mut C, now: f64);
}

impl<C, F> Task<C> for F
where
    F: FnMut(&mut C, f64),
{
    fn process(&mut self, context: &mut C, now: f64) {
        self(context, now)
    }
}
