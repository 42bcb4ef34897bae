/*!
 * RAM Budget
 * Two-tier accounting: a reserved partition for priority 0 and a shared pool
 *
 * Commitments are permanent for the run. Neither pool ever grows back,
 * even after the owning process completes.
 */

use super::types::{AdmissionError, AdmissionResult, RamPool, RamStats};
use crate::core::types::Ram;

/// RAM counters owned by the admission controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamBudget {
    reserved_total: Ram,
    reserved_used: Ram,
    shared_total: Ram,
    shared_remaining: Ram,
}

impl RamBudget {
    /// Split `total` into a `reserved` partition and the shared remainder
    pub fn new(total: Ram, reserved: Ram) -> Self {
        let shared = total.saturating_sub(reserved);
        Self {
            reserved_total: reserved.min(total),
            reserved_used: 0,
            shared_total: shared,
            shared_remaining: shared,
        }
    }

    /// Commit `ram` from the given pool, or fail without touching it
    pub fn commit(&mut self, pool: RamPool, ram: Ram) -> AdmissionResult<()> {
        let available = self.available(pool);
        if ram > available {
            return Err(AdmissionError::InsufficientRam {
                pool,
                requested: ram,
                available,
            });
        }

        match pool {
            RamPool::Reserved => self.reserved_used += ram,
            RamPool::Shared => self.shared_remaining -= ram,
        }
        Ok(())
    }

    /// RAM still available in a pool
    #[inline]
    pub fn available(&self, pool: RamPool) -> Ram {
        match pool {
            RamPool::Reserved => self.reserved_total - self.reserved_used,
            RamPool::Shared => self.shared_remaining,
        }
    }

    #[inline]
    pub fn reserved_used(&self) -> Ram {
        self.reserved_used
    }

    #[inline]
    pub fn shared_remaining(&self) -> Ram {
        self.shared_remaining
    }

    pub fn stats(&self) -> RamStats {
        RamStats {
            reserved_total: self.reserved_total,
            reserved_used: self.reserved_used,
            shared_total: self.shared_total,
            shared_remaining: self.shared_remaining,
        }
    }
}
