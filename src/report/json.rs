/*!
 * JSON Lines Reporter
 * One serialized event per line for machine consumption
 */

use super::events::SimEvent;
use super::traits::Reporter;
use crate::core::errors::SimResult;
use std::io::Write;

/// Writes each event as a single-line JSON object
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&mut self, event: &SimEvent) -> SimResult<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> SimResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessId;
    use crate::scheduler::LaneId;

    #[test]
    fn test_one_object_per_line() {
        let mut reporter = JsonLinesReporter::new(Vec::new());
        reporter
            .report_all(&[
                SimEvent::Assigned {
                    id: ProcessId::from("P1"),
                    lane: LaneId::PRIORITY_3,
                },
                SimEvent::Finished {
                    id: ProcessId::from("P1"),
                    lane: LaneId::PRIORITY_3,
                    ran: 3,
                },
            ])
            .unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let back: SimEvent = serde_json::from_str(lines[1]).unwrap();
        assert!(back.is_completion());
    }
}
