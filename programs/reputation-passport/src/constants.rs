pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const MAX_PLATFORM_LEN: usize = 32;
pub const MAX_JOB_TYPE_LEN: usize = 32;

/// Scores carry two implied decimals: a mean rating of 4.00 is reported as 400.
pub const SCORE_SCALE: u64 = 100;
