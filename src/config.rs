/*!
 * Simulation Configuration
 *
 * RAM budget sizing, Round-Robin quanta, and dispatch mode.
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::limits::*;
use crate::core::types::{Ram, Ticks};
use crate::scheduler::{Algorithm, LaneId};
use serde::{Deserialize, Serialize};

/// How lanes are drained after admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// One lane after another on the calling thread
    #[default]
    Sequential,
    /// One scoped thread per lane, reassembled in lane order
    Parallel,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    /// Total RAM pool `T`
    pub total_ram: Ram,

    /// Partition `R` usable only by priority 0; priorities 1-3 share `T - R`
    pub reserved_ram: Ram,

    /// Time quantum of the priority-2 Round-Robin lane (default: 8)
    pub quantum_priority_2: Ticks,

    /// Time quantum of the priority-3 Round-Robin lane (default: 16)
    pub quantum_priority_3: Ticks,

    pub dispatch: DispatchMode,
}

impl SimConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            total_ram: DEFAULT_TOTAL_RAM,
            reserved_ram: DEFAULT_RESERVED_RAM,
            quantum_priority_2: DEFAULT_QUANTUM_PRIORITY_2,
            quantum_priority_3: DEFAULT_QUANTUM_PRIORITY_3,
            dispatch: DispatchMode::Sequential,
        }
    }

    pub fn with_ram(mut self, total_ram: Ram, reserved_ram: Ram) -> Self {
        self.total_ram = total_ram;
        self.reserved_ram = reserved_ram;
        self
    }

    pub fn with_quanta(mut self, priority_2: Ticks, priority_3: Ticks) -> Self {
        self.quantum_priority_2 = priority_2;
        self.quantum_priority_3 = priority_3;
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Size of the pool shared by priorities 1-3
    #[inline]
    pub fn shared_ram(&self) -> Ram {
        self.total_ram.saturating_sub(self.reserved_ram)
    }

    /// Algorithm bound to a lane
    pub fn algorithm_for(&self, lane: LaneId) -> Algorithm {
        match lane {
            LaneId::PRIORITY_0 => Algorithm::Fcfs,
            LaneId::PRIORITY_1 => Algorithm::Sjf,
            LaneId::PRIORITY_2 => Algorithm::RoundRobin {
                quantum: self.quantum_priority_2,
            },
            _ => Algorithm::RoundRobin {
                quantum: self.quantum_priority_3,
            },
        }
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> SimResult<()> {
        if self.reserved_ram >= self.total_ram {
            return Err(SimError::Configuration(format!(
                "reserved_ram ({}) must be smaller than total_ram ({})",
                self.reserved_ram, self.total_ram
            )));
        }
        if self.quantum_priority_2 == 0 || self.quantum_priority_3 == 0 {
            return Err(SimError::Configuration(format!(
                "Round-Robin quanta must be non-zero (got {} and {})",
                self.quantum_priority_2, self.quantum_priority_3
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
