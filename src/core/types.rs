/*!
 * Core Types
 * Common scalar types used across the simulator
 */

/// Memory units requested by a process
pub type Ram = u32;

/// CPU time units (burst lengths and quanta)
pub type Ticks = u32;

/// Priority class as read from input (only 0-3 are routable)
pub type Priority = i32;

/// Logical arrival stamp, informational only
pub type ArrivalTime = i32;

/// CPU number carried from the input record, informational only
pub type CpuHint = i32;
