//! Per-iteration progress hook.

/// Progress of one completed Lloyd iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationEvent {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Assignment cost against the centers used in this iteration.
    pub cost: f64,
    /// Largest positional distance between old and new centers.
    pub max_shift: f64,
    /// Clusters that received no points in this iteration.
    pub empty_clusters: usize,
}

/// Receives an [`IterationEvent`] after every iteration.
///
/// Any `FnMut(&IterationEvent)` closure is an observer.
pub trait IterationObserver {
    /// Called once per iteration, after the convergence check.
    fn on_iteration(&mut self, event: &IterationEvent);
}

impl<F> IterationObserver for F
where
    F: FnMut(&IterationEvent),
{
    fn on_iteration(&mut self, event: &IterationEvent) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {
    fn on_iteration(&mut self, _event: &IterationEvent) {}
}
