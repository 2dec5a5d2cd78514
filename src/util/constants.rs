pub const GROUND_FLOOR: u8 = 0;

/// Cars at or above this load factor never take opportunistic stops.
pub const FULL_LOAD_FACTOR: f64 = 0.9;

pub const DEFAULT_NUM_FLOORS: u8 = 5;
pub const DEFAULT_NUM_CARS: usize = 2;
pub const DEFAULT_TICK_MS: u64 = 250;
pub const DEFAULT_CALL_PROBABILITY: f64 = 0.2;
pub const DEFAULT_LOG_LEVEL: &str = "info";
