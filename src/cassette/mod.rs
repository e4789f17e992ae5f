//! Cassette format for recording and replaying delete exchanges.

pub mod format;
pub mod recorder;
pub mod replayer;
