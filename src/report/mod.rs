/*!
 * Report Module
 * The ordered event stream and the sinks that render it
 */

pub mod events;
pub mod json;
pub mod summary;
pub mod text;
pub mod traits;

// Re-export for convenience
pub use events::SimEvent;
pub use json::JsonLinesReporter;
pub use summary::{LaneStats, RunSummary};
pub use text::{TextFilter, TextReporter};
pub use traits::{CollectingReporter, Reporter};
