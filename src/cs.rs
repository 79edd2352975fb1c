pub mod dynamic;
pub mod playback;
pub mod session;

// Re-export the trace builders and their driver
pub use dynamic::*;
pub use playback::{PlaybackConfig, PlaybackController, PlaybackState, Speed};
pub use session::{CoinChangeSession, FibonacciSession, SessionConfig};
