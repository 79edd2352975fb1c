pub mod coin_change;
pub mod coin_set;
pub mod fibonacci;
pub mod trace;

// Re-export the trace builders with descriptive names
pub use coin_change::{
    build_coin_change_trace, reconstruct_combination, Candidate, CoinChangeStep, CoinChangeTrace,
    CoinCount, MAX_AMOUNT,
};
pub use coin_set::CoinSet;
pub use fibonacci::{build_fibonacci_trace, FibonacciStep, MAX_FIBONACCI_N};
pub use trace::{Timeline, Trace, TraceStep};
