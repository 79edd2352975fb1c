//! Input-owning sessions that keep a trace and its player in step.
//!
//! A session holds the current inputs, the trace built from them and a
//! [`PlaybackController`] over that trace. Any input change rebuilds the trace
//! and sends the player back to idle before the new trace can be shown.

use crate::cs::dynamic::{
    build_coin_change_trace, build_fibonacci_trace, CoinChangeTrace, CoinSet, FibonacciStep, Trace,
};
use crate::cs::playback::{PlaybackConfig, PlaybackController};
use crate::error::Result;

/// Defaults and input bounds for both sessions.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Initial Fibonacci index
    pub fibonacci_n: i64,
    /// Largest accepted Fibonacci index
    pub max_n: i64,
    /// Initial coin change target
    pub amount: i64,
    /// Largest accepted coin change target
    pub max_amount: i64,
    /// Initial coin denominations
    pub coins: Vec<usize>,
    pub playback: PlaybackConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fibonacci_n: 8,
            max_n: 30,
            amount: 11,
            max_amount: 100,
            coins: vec![1, 2, 5],
            playback: PlaybackConfig::default(),
        }
    }
}

/// Fibonacci inputs plus playback.
#[derive(Debug, Clone)]
pub struct FibonacciSession {
    n: i64,
    max_n: i64,
    player: PlaybackController<Trace<FibonacciStep>>,
}

impl FibonacciSession {
    pub fn new(config: &SessionConfig) -> Self {
        let n = config.fibonacci_n.min(config.max_n);
        Self {
            n,
            max_n: config.max_n,
            player: PlaybackController::with_config(build_fibonacci_trace(n), &config.playback),
        }
    }

    pub fn n(&self) -> i64 {
        self.n
    }

    /// Sets a new index, clamped to the configured maximum.
    ///
    /// Negative values are kept and produce an empty trace.
    pub fn set_n(&mut self, n: i64) {
        let n = n.min(self.max_n);
        if n == self.n {
            return;
        }
        log::debug!("fibonacci n {} -> {n}", self.n);
        self.n = n;
        self.player.load(build_fibonacci_trace(n));
    }

    pub fn trace(&self) -> &Trace<FibonacciStep> {
        self.player.timeline()
    }

    pub fn player(&self) -> &PlaybackController<Trace<FibonacciStep>> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlaybackController<Trace<FibonacciStep>> {
        &mut self.player
    }
}

/// Coin change inputs plus playback.
#[derive(Debug, Clone)]
pub struct CoinChangeSession {
    amount: i64,
    max_amount: i64,
    coins: CoinSet,
    player: PlaybackController<CoinChangeTrace>,
}

impl CoinChangeSession {
    /// Fails only when the configured coins are not a valid coin set.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let coins = CoinSet::new(config.coins.iter().copied())?;
        let amount = config.amount.min(config.max_amount);
        let trace = build_coin_change_trace(amount, coins.as_slice());
        Ok(Self {
            amount,
            max_amount: config.max_amount,
            coins,
            player: PlaybackController::with_config(trace, &config.playback),
        })
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn coins(&self) -> &CoinSet {
        &self.coins
    }

    /// Sets a new target, clamped to the configured maximum.
    pub fn set_amount(&mut self, amount: i64) {
        let amount = amount.min(self.max_amount);
        if amount == self.amount {
            return;
        }
        log::debug!("coin change amount {} -> {amount}", self.amount);
        self.amount = amount;
        self.rebuild();
    }

    pub fn add_coin(&mut self, coin: usize) -> Result<()> {
        self.coins.insert(coin)?;
        self.rebuild();
        Ok(())
    }

    pub fn remove_coin(&mut self, coin: usize) -> Result<()> {
        self.coins.remove(coin)?;
        self.rebuild();
        Ok(())
    }

    pub fn set_coins(&mut self, coins: CoinSet) {
        if coins == self.coins {
            return;
        }
        self.coins = coins;
        self.rebuild();
    }

    pub fn trace(&self) -> &CoinChangeTrace {
        self.player.timeline()
    }

    pub fn player(&self) -> &PlaybackController<CoinChangeTrace> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlaybackController<CoinChangeTrace> {
        &mut self.player
    }

    /// The chosen coins, shown once playback has reached the final amount.
    pub fn revealed_solution(&self) -> Option<Vec<usize>> {
        if !self.player.is_at_end() {
            return None;
        }
        self.trace().combination()
    }

    fn rebuild(&mut self) {
        let trace = build_coin_change_trace(self.amount, self.coins.as_slice());
        self.player.load(trace);
    }
}
