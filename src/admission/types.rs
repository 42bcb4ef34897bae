/*!
 * Admission Types
 * RAM pools, rejection reasons, and budget statistics
 */

use crate::core::types::{Priority, Ram};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Admission operation result
pub type AdmissionResult<T> = Result<T, AdmissionError>;

/// Which partition of the RAM budget a process draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RamPool {
    /// Partition reserved for priority 0
    Reserved,
    /// Remainder shared by priorities 1-3
    Shared,
}

impl fmt::Display for RamPool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RamPool::Reserved => write!(f, "reserved"),
            RamPool::Shared => write!(f, "shared"),
        }
    }
}

/// Why a process was rejected
///
/// Rejection is terminal for that process only; the run continues.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AdmissionError {
    #[error("Insufficient RAM in {pool} pool: requested {requested}, available {available}")]
    #[diagnostic(
        code(admission::insufficient_ram),
        help("RAM is never released within a run; earlier admissions hold their share.")
    )]
    InsufficientRam {
        pool: RamPool,
        requested: Ram,
        available: Ram,
    },

    #[error("Priority {0} does not map to any lane")]
    #[diagnostic(code(admission::unroutable_priority), help("Valid priorities are 0-3."))]
    UnroutablePriority(Priority),
}

/// Snapshot of both RAM pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamStats {
    pub reserved_total: Ram,
    pub reserved_used: Ram,
    pub shared_total: Ram,
    pub shared_remaining: Ram,
}

impl RamStats {
    #[inline]
    pub fn shared_used(&self) -> Ram {
        self.shared_total - self.shared_remaining
    }

    #[inline]
    pub fn reserved_available(&self) -> Ram {
        self.reserved_total - self.reserved_used
    }

    /// Percentage of a pool already committed
    pub fn usage_percentage(&self, pool: RamPool) -> f64 {
        let (used, total) = match pool {
            RamPool::Reserved => (self.reserved_used, self.reserved_total),
            RamPool::Shared => (self.shared_used(), self.shared_total),
        };
        if total == 0 {
            0.0
        } else {
            (used as f64 / total as f64) * 100.0
        }
    }
}
