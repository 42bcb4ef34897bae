/*!
 * Admission Module
 * RAM-budgeted classification of processes into priority lanes
 */

pub mod budget;
pub mod controller;
pub mod types;

// Re-export for convenience
pub use budget::RamBudget;
pub use controller::AdmissionController;
pub use types::*;
