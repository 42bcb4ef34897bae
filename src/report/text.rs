/*!
 * Text Reporter
 * Renders events in the plain-text report format, one line per event
 */

use super::events::SimEvent;
use super::traits::Reporter;
use crate::core::errors::SimResult;
use std::io::Write;

/// Which events a text reporter writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFilter {
    /// The full report
    #[default]
    All,
    /// Only the queue-status block
    QueueStatus,
}

/// Writes the text report to any `Write` sink
pub struct TextReporter<W: Write> {
    writer: W,
    filter: TextFilter,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            filter: TextFilter::All,
        }
    }

    /// Reporter that only echoes the queue-status block
    pub fn queue_status(writer: W) -> Self {
        Self {
            writer,
            filter: TextFilter::QueueStatus,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, event: &SimEvent) -> SimResult<()> {
        if self.filter == TextFilter::QueueStatus && !event.is_queue_status() {
            return Ok(());
        }
        writeln!(self.writer, "{}", event)?;
        Ok(())
    }

    fn finish(&mut self) -> SimResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
