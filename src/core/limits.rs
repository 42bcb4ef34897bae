/*!
 * Simulator Limits and Constants
 *
 * Default sizing for the RAM budget and the Round-Robin lanes.
 * Every value here can be overridden through `SimConfig`.
 */

// =============================================================================
// MEMORY BUDGET
// =============================================================================

/// Total simulated RAM pool
pub const DEFAULT_TOTAL_RAM: u32 = 2048;

/// Partition of the pool usable only by priority-0 processes
pub const DEFAULT_RESERVED_RAM: u32 = 512;

// =============================================================================
// ROUND-ROBIN QUANTA
// =============================================================================

/// Time slice for the priority-2 lane
pub const DEFAULT_QUANTUM_PRIORITY_2: u32 = 8;

/// Time slice for the priority-3 lane
pub const DEFAULT_QUANTUM_PRIORITY_3: u32 = 16;

// =============================================================================
// LANES
// =============================================================================

/// Number of priority lanes (0..=3)
pub const LANE_COUNT: usize = 4;

/// Separator used when listing lane membership
pub const LANE_MEMBER_SEPARATOR: &str = "-";

/// Report file written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";
