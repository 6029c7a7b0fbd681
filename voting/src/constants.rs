/// 1ms, the contract time unit.
pub const MSECOND: u64 = 1;
/// 1s in milliseconds.
pub const SECOND: u64 = 1_000 * MSECOND;
pub const MINUTE: u64 = 60 * SECOND;
pub const HOUR: u64 = 60 * MINUTE;

/// ID assigned to the first created poll.
pub const FIRST_POLL_ID: u64 = 1;

/// Question length bounds, in bytes.
pub const MIN_QUESTION_LEN: usize = 1;
pub const MAX_QUESTION_LEN: usize = 256;

/// Answer length bounds, in bytes.
pub const MIN_ANSWER_LEN: usize = 1;
pub const MAX_ANSWER_LEN: usize = 100;

pub const MIN_ANSWERS: usize = 2;
/// Default value of `Settings::max_answers`.
pub const DEFAULT_MAX_ANSWERS: u8 = 16;
/// Upper bound the admin can raise `Settings::max_answers` to.
pub const MAX_ANSWERS_LIMIT: u8 = 80;
