/*!
 * Reporter Traits
 * Sinks that consume the ordered event stream
 */

use super::events::SimEvent;
use crate::core::errors::SimResult;

/// Consumer of simulation events
///
/// Events arrive in report order; implementations must not reorder them.
pub trait Reporter {
    /// Handle a single event
    fn report(&mut self, event: &SimEvent) -> SimResult<()>;

    /// Flush any buffered output once the run is over
    fn finish(&mut self) -> SimResult<()> {
        Ok(())
    }

    /// Handle a batch of events in order
    fn report_all(&mut self, events: &[SimEvent]) -> SimResult<()> {
        events.iter().try_for_each(|event| self.report(event))
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: &SimEvent) -> SimResult<()> {
        (**self).report(event)
    }

    fn finish(&mut self) -> SimResult<()> {
        (**self).finish()
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, event: &SimEvent) -> SimResult<()> {
        (**self).report(event)
    }

    fn finish(&mut self) -> SimResult<()> {
        (**self).finish()
    }
}

/// Fan every event out to two reporters
impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn report(&mut self, event: &SimEvent) -> SimResult<()> {
        self.0.report(event)?;
        self.1.report(event)
    }

    fn finish(&mut self) -> SimResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Keeps every event in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    events: Vec<SimEvent>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SimEvent> {
        self.events
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, event: &SimEvent) -> SimResult<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
