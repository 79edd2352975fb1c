pub mod cs;
pub mod error;

pub use cs::{dynamic, playback, session};
pub use error::{Error, Result};
