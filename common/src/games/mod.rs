mod broadcaster;

pub mod gomoku;

pub use broadcaster::GameBroadcaster;
