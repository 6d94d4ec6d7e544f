//! # Task Management System
//!
//! Fixed-interval callbacks for the frame loop.
//!
//! ## Architecture Overview
//!
//! - [`Task`]: a callback, fired with the runner's context and the tick time
//! - [`PeriodicTaskRunner`]: the list of registered tasks and their last run
//! - [`Clock`]: the wall-clock source the frame loop reads `now` from
//!
//! ## Task Lifecycle
//! 1. Tasks are registered with an interval via [`PeriodicTaskRunner::add_task`]
//! 2. The frame loop calls [`PeriodicTaskRunner::update`] once per frame
//! 3. Every task whose interval has elapsed since its last run fires, in
//!    registration order, and its last run becomes `now`
//!
//! There is no catch-up: a task that is late by several intervals fires
//! once, and its schedule restarts from the late tick.

mod clock;
pub mod task;

pub use clock::Clock;
pub use task::Task;

/// A registered task and its schedule.
struct ScheduledTask<C> {
    interval: f64,
    last_run: f64,
    task: Box<dyn Task<C>>,
}

/// Fires registered tasks at fixed intervals.
///
/// Single-threaded and synchronous; tasks run inside [`PeriodicTaskRunner::update`].
pub struct PeriodicTaskRunner<C = ()> {
    tasks: Vec<ScheduledTask<C>>,
}

impl<C> PeriodicTaskRunner<C> {
    /// Creates a runner with no tasks.
    pub fn new() -> Self {
        PeriodicTaskRunner { tasks: Vec::new() }
    }

    /// Registers `task` to fire every `interval` seconds.
    ///
    /// The task is treated as having last run at time zero.
    pub fn add_task(&mut self, interval: f64, task: Box<dyn Task<C>>) {
        self.tasks.push(ScheduledTask {
            interval,
            last_run: 0.0,
            task,
        });
    }

    /// Fires every task that is due at `now`.
    ///
    /// # Returns
    /// The number of tasks fired.
    pub fn update(&mut self, now: f64, context: &mut C) -> usize {
        let mut fired = 0;
        for scheduled in &mut self.tasks {
            if now - scheduled.last_run >= scheduled.interval {
                scheduled.task.process(context, now);
                scheduled.last_run = now;
                fired += 1;
            }
        }
        fired
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<C> Default for PeriodicTaskRunner<C> {
    fn default() -> Self {
        PeriodicTaskRunner::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_once_per_elapsed_interval() {
        let mut runner: PeriodicTaskRunner<Vec<f64>> = PeriodicTaskRunner::new();
        runner.add_task(1.0, Box::new(|log: &mut Vec<f64>, now: f64| log.push(now)));

        let mut log = Vec::new();
        for now in [0.5, 1.0, 1.5, 1.99, 2.0, 5.0, 5.5] {
            runner.update(now, &mut log);
        }
        assert_eq!(log, vec![1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_late_ticks_do_not_catch_up() {
        let mut runner: PeriodicTaskRunner<u32> = PeriodicTaskRunner::new();
        runner.add_task(0.25, Box::new(|count: &mut u32, _now: f64| *count += 1));

        let mut count = 0;
        assert_eq!(runner.update(10.0, &mut count), 1);
        assert_eq!(runner.update(10.1, &mut count), 0);
        assert_eq!(runner.update(10.25, &mut count), 1);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_due_tasks_fire_in_registration_order() {
        let mut runner: PeriodicTaskRunner<Vec<&'static str>> = PeriodicTaskRunner::new();
        runner.add_task(2.0, Box::new(|log: &mut Vec<&'static str>, _: f64| log.push("slow")));
        runner.add_task(1.0, Box::new(|log: &mut Vec<&'static str>, _: f64| log.push("fast")));
        assert_eq!(runner.len(), 2);

        let mut log = Vec::new();
        runner.update(1.0, &mut log);
        runner.update(2.0, &mut log);
        assert_eq!(log, vec!["fast", "slow", "fast"]);
    }

    #[test]
    fn test_zero_interval_fires_every_update() {
        let mut runner: PeriodicTaskRunner = PeriodicTaskRunner::new();
        let mut fired = 0;
        runner.add_task(0.0, Box::new(|_: &mut (), _: f64| {}));
        for now in [0.0, 0.0, 0.1] {
            fired += runner.update(now, &mut ());
        }
        assert_eq!(fired, 3);
    }
}
