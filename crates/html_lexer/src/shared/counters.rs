//! Per-parse counters.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub tokens_emitted: u64,
    pub errors: u64,
    pub warnings: u64,
}
