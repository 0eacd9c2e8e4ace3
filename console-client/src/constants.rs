pub const EVENT_LOG_SIZE: usize = 8;
pub const LOG_PREFIX: &str = "Gomoku";
