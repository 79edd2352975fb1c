use thiserror::Error;

/// Errors raised at the input edge (coin editing, speed selection).
///
/// The trace builders and the playback controller never fail; invalid numeric
/// input degrades to an empty trace instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("coin denominations must be positive")]
    ZeroCoin,
    #[error("coin {0} is already in the set")]
    DuplicateCoin(usize),
    #[error("coin {0} is not in the set")]
    UnknownCoin(usize),
    #[error("cannot remove the last remaining coin")]
    LastCoin,
    #[error("a coin set needs at least one coin")]
    EmptyCoinSet,
    #[error("unsupported playback speed: {0}ms")]
    UnknownSpeed(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
