//! # Coin Change Traces
//!
//! Bottom-up minimum-coin tabulation for the unbounded coin change problem,
//! recorded one amount at a time. Each step also keeps the per-coin candidates
//! that were weighed for that amount, so a viewer can show which coin won and
//! why.
//!
//! `dp[0] = 0`, and for every `a > 0`:
//!
//! ```text
//! dp[a] = min over coins c <= a of dp[a - c] + 1
//! ```
//!
//! Amounts no combination of coins can form are [`CoinCount::Unreachable`].
//!
//! ## Example
//! ```rust
//! use dptrace::cs::dynamic::coin_change::{build_coin_change_trace, CoinCount};
//!
//! let trace = build_coin_change_trace(11, &[1, 2, 5]);
//! assert_eq!(trace.result(), Some(CoinCount::Reachable(3)));
//! assert_eq!(trace.combination(), Some(vec![1, 5, 5]));
//! ```

use std::fmt;

use super::trace::{Timeline, Trace, TraceStep};

/// Largest target amount the builder will tabulate. Larger inputs yield an
/// empty trace.
pub const MAX_AMOUNT: i64 = 10_000;

/// Minimum number of coins for an amount, or `Unreachable`.
///
/// Every reachable count orders below `Unreachable`, so `min` behaves like a
/// comparison against infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoinCount {
    Reachable(usize),
    Unreachable,
}

impl CoinCount {
    pub fn is_reachable(self) -> bool {
        matches!(self, CoinCount::Reachable(_))
    }

    pub fn count(self) -> Option<usize> {
        match self {
            CoinCount::Reachable(n) => Some(n),
            CoinCount::Unreachable => None,
        }
    }

    /// One more coin on top of this count. Unreachable stays unreachable.
    pub fn plus_one(self) -> CoinCount {
        match self {
            CoinCount::Reachable(n) => CoinCount::Reachable(n + 1),
            CoinCount::Unreachable => CoinCount::Unreachable,
        }
    }
}

impl fmt::Display for CoinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinCount::Reachable(n) => write!(f, "{n}"),
            CoinCount::Unreachable => f.write_str("∞"),
        }
    }
}

/// One coin weighed while filling a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub coin: usize,
    /// `amount - coin`
    pub remaining: usize,
    /// `dp[remaining] + 1`
    pub candidate_coins: CoinCount,
    /// Whether this candidate strictly improved the cell when it was weighed.
    pub is_best: bool,
}

impl Candidate {
    /// The amount whose cell this candidate was weighed for.
    pub fn amount(&self) -> usize {
        self.remaining + self.coin
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coin {}: dp[{} - {}] + 1 = dp[{}] + 1 = {}",
            self.coin,
            self.amount(),
            self.coin,
            self.remaining,
            self.candidate_coins
        )?;
        if self.is_best {
            f.write_str(" (best option)")?;
        }
        Ok(())
    }
}

/// One filled cell of the coin change table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinChangeStep {
    pub amount: usize,
    pub value: CoinCount,
    /// Candidates in coin-evaluation order; empty for amount 0.
    pub choices: Vec<Candidate>,
    pub explanation: String,
}

impl CoinChangeStep {
    /// The candidate that settled this cell, if any coin improved it.
    ///
    /// When several candidates improved the cell in turn, the last one holds.
    pub fn winning_choice(&self) -> Option<&Candidate> {
        self.choices.iter().rev().find(|c| c.is_best)
    }
}

impl TraceStep for CoinChangeStep {
    fn position(&self) -> usize {
        self.amount
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// The full result of a coin change tabulation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoinChangeTrace {
    amount: usize,
    coins: Vec<usize>,
    steps: Trace<CoinChangeStep>,
    table: Vec<CoinCount>,
    last_coin: Vec<Option<usize>>,
}

impl CoinChangeTrace {
    fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Target amount. Meaningless for an empty trace.
    pub fn amount(&self) -> usize {
        self.amount
    }

    /// Coins in the order they were evaluated.
    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn steps(&self) -> &Trace<CoinChangeStep> {
        &self.steps
    }

    /// The completed DP table, `amount + 1` cells.
    pub fn table(&self) -> &[CoinCount] {
        &self.table
    }

    /// For each amount, the coin that last improved its cell.
    pub fn last_coin(&self) -> &[Option<usize>] {
        &self.last_coin
    }

    /// Minimum coins for the target amount; `None` for an empty trace.
    pub fn result(&self) -> Option<CoinCount> {
        self.table.last().copied()
    }

    /// One minimal combination of coins for the target amount.
    pub fn combination(&self) -> Option<Vec<usize>> {
        if self.is_empty() {
            return None;
        }
        reconstruct_combination(&self.table, &self.last_coin, self.amount)
    }

    /// The table as it looks once playback has reached `cursor`.
    ///
    /// Cells not yet computed are `None`.
    pub fn table_as_of(&self, cursor: Option<usize>) -> Vec<Option<CoinCount>> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| match cursor {
                Some(c) if i <= c => Some(step.value),
                _ => None,
            })
            .collect()
    }

    /// Closing sentence for a reachable target.
    pub fn summary(&self) -> Option<String> {
        match self.result()? {
            CoinCount::Reachable(n) => Some(format!(
                "Minimum coins needed to make amount {}: {n}",
                self.amount
            )),
            CoinCount::Unreachable => None,
        }
    }
}

impl Timeline for CoinChangeTrace {
    type Step = CoinChangeStep;

    fn trace(&self) -> &Trace<CoinChangeStep> {
        &self.steps
    }
}

/// Tabulates minimum coins for every amount `0..=amount`, recording each cell.
///
/// Coins are weighed in the order given; the slice is not re-sorted. A
/// candidate only replaces the cell's value when it is strictly smaller, so on
/// ties the first coin to reach the minimum wins.
///
/// A negative `amount`, an `amount` above [`MAX_AMOUNT`], or an empty `coins`
/// slice produces an empty trace.
///
/// # Examples
///
/// ```
/// use dptrace::cs::dynamic::coin_change::{build_coin_change_trace, CoinCount};
///
/// let trace = build_coin_change_trace(3, &[2]);
/// let table: Vec<CoinCount> = trace.table().to_vec();
/// assert_eq!(
///     table,
///     vec![
///         CoinCount::Reachable(0),
///         CoinCount::Unreachable,
///         CoinCount::Reachable(1),
///         CoinCount::Unreachable,
///     ]
/// );
/// assert_eq!(trace.combination(), None);
///
/// assert!(build_coin_change_trace(-5, &[1]).is_empty());
/// assert!(build_coin_change_trace(5, &[]).is_empty());
/// ```
pub fn build_coin_change_trace(amount: i64, coins: &[usize]) -> CoinChangeTrace {
    let amount = match usize::try_from(amount) {
        Ok(a) if a <= MAX_AMOUNT as usize && !coins.is_empty() => a,
        _ => {
            log::debug!(
                "coin change trace requested for amount={amount} with {} coins, returning empty trace",
                coins.len()
            );
            return CoinChangeTrace::empty();
        }
    };

    let mut dp = vec![CoinCount::Unreachable; amount + 1];
    dp[0] = CoinCount::Reachable(0);
    let mut last_coin: Vec<Option<usize>> = vec![None; amount + 1];

    let mut steps = Vec::with_capacity(amount + 1);
    steps.push(CoinChangeStep {
        amount: 0,
        value: CoinCount::Reachable(0),
        choices: Vec::new(),
        explanation: "Base case: 0 coins needed to make amount 0".to_string(),
    });

    for current in 1..=amount {
        let mut choices = Vec::new();

        for &coin in coins {
            if coin == 0 || coin > current {
                continue;
            }
            let remaining = current - coin;
            let candidate_coins = dp[remaining].plus_one();
            // Unreachable never compares below anything, ties never win.
            let is_best = candidate_coins < dp[current];
            if is_best {
                dp[current] = candidate_coins;
                last_coin[current] = Some(coin);
            }
            choices.push(Candidate {
                coin,
                remaining,
                candidate_coins,
                is_best,
            });
        }

        let explanation = match dp[current] {
            CoinCount::Reachable(n) => {
                format!("Calculating minimum coins for amount {current}: {n}")
            }
            CoinCount::Unreachable => {
                format!("Calculating minimum coins for amount {current}: Not possible")
            }
        };
        log::trace!("{explanation} ({} candidates)", choices.len());

        steps.push(CoinChangeStep {
            amount: current,
            value: dp[current],
            choices,
            explanation,
        });
    }

    log::debug!(
        "built coin change trace for amount={amount}, coins={coins:?}: result {}",
        dp[amount]
    );

    CoinChangeTrace {
        amount,
        coins: coins.to_vec(),
        steps: Trace::from_steps(steps),
        table: dp,
        last_coin,
    }
}

/// Walks back from `amount` through `last_coin` to recover one optimal
/// combination, listed in the order the walk picks coins.
///
/// Returns `None` when the amount is out of range, unreachable, or the record
/// is inconsistent with the table.
///
/// # Examples
///
/// ```
/// use dptrace::cs::dynamic::coin_change::{build_coin_change_trace, reconstruct_combination};
///
/// let trace = build_coin_change_trace(18, &[1, 6, 10]);
/// let coins = reconstruct_combination(trace.table(), trace.last_coin(), 18).unwrap();
/// assert_eq!(coins, vec![6, 6, 6]);
/// ```
pub fn reconstruct_combination(
    table: &[CoinCount],
    last_coin: &[Option<usize>],
    amount: usize,
) -> Option<Vec<usize>> {
    let expected = table.get(amount)?.count()?;

    let mut used = Vec::with_capacity(expected);
    let mut remaining = amount;
    while remaining > 0 {
        let coin = (*last_coin.get(remaining)?)?;
        if coin == 0 || coin > remaining || used.len() == expected {
            return None;
        }
        used.push(coin);
        remaining -= coin;
    }
    Some(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::Rng;

    /// Coin-major unbounded knapsack, used as an independent answer check.
    fn min_coins_for_change(coins: &[usize], amount: usize) -> Option<usize> {
        let mut dp = vec![usize::MAX; amount + 1];
        dp[0] = 0;
        for &coin in coins {
            for curr_amount in coin..=amount {
                if dp[curr_amount - coin] != usize::MAX {
                    dp[curr_amount] = dp[curr_amount].min(dp[curr_amount - coin] + 1);
                }
            }
        }
        if dp[amount] == usize::MAX {
            None
        } else {
            Some(dp[amount])
        }
    }

    #[test]
    fn test_coin_count_ordering() {
        assert!(CoinCount::Reachable(usize::MAX) < CoinCount::Unreachable);
        assert!(CoinCount::Reachable(2) < CoinCount::Reachable(3));
        assert_eq!(CoinCount::Unreachable.plus_one(), CoinCount::Unreachable);
        assert_eq!(CoinCount::Reachable(4).plus_one(), CoinCount::Reachable(5));
        assert_eq!(CoinCount::Unreachable.to_string(), "∞");
        assert_eq!(CoinCount::Reachable(7).count(), Some(7));
    }

    #[test]
    fn test_empty_inputs() {
        let trace = build_coin_change_trace(-1, &[1, 2]);
        assert!(trace.is_empty());
        assert!(trace.table().is_empty());
        assert_eq!(trace.result(), None);
        assert_eq!(trace.combination(), None);

        assert!(build_coin_change_trace(4, &[]).is_empty());
    }

    #[test]
    fn test_amount_above_ceiling_is_empty() {
        let trace = build_coin_change_trace(i64::MAX, &[1]);
        assert!(trace.is_empty());
        assert_eq!(trace.result(), None);
        assert!(build_coin_change_trace(MAX_AMOUNT + 1, &[1, 2, 5]).is_empty());
        let widest = build_coin_change_trace(MAX_AMOUNT, &[1]);
        let expected = CoinCount::Reachable(MAX_AMOUNT as usize);
        assert_eq!(widest.result(), Some(expected));
    }

    #[test]
    fn test_amount_zero() {
        let trace = build_coin_change_trace(0, &[3]);
        assert_eq!(trace.steps().len(), 1);
        let base = &trace.steps()[0];
        assert_eq!(base.value, CoinCount::Reachable(0));
        assert!(base.choices.is_empty());
        assert_eq!(base.explanation, "Base case: 0 coins needed to make amount 0");
        assert_eq!(trace.combination(), Some(vec![]));
    }

    #[test]
    fn test_unreachable_odd_amounts() {
        let trace = build_coin_change_trace(3, &[2]);
        let steps = trace.steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1].value, CoinCount::Unreachable);
        assert!(steps[1].choices.is_empty());
        assert_eq!(steps[2].value, CoinCount::Reachable(1));
        assert_eq!(steps[3].value, CoinCount::Unreachable);
        assert_eq!(
            steps[3].explanation,
            "Calculating minimum coins for amount 3: Not possible"
        );
        assert_eq!(steps[3].choices[0].candidate_coins, CoinCount::Unreachable);
        assert!(!steps[3].choices[0].is_best);
        assert_eq!(trace.summary(), None);
    }

    #[test]
    fn test_eleven_with_one_two_five() {
        let trace = build_coin_change_trace(11, &[1, 2, 5]);
        assert_eq!(trace.steps().len(), 12);
        assert_eq!(trace.steps()[11].value, CoinCount::Reachable(3));
        assert_eq!(
            trace.summary().as_deref(),
            Some("Minimum coins needed to make amount 11: 3")
        );

        let combo = trace.combination().unwrap();
        assert_eq!(combo.iter().sum::<usize>(), 11);
        assert_eq!(combo.len(), 3);
        assert_eq!(combo, vec![1, 5, 5]);
    }

    #[test]
    fn test_ties_keep_first_improvement() {
        // Amount 11: coin 1 gives dp[10] + 1 = 3 first, coin 5 ties with 3.
        let trace = build_coin_change_trace(11, &[1, 2, 5]);
        let choices = &trace.steps()[11].choices;
        let flags: Vec<(usize, bool)> = choices.iter().map(|c| (c.coin, c.is_best)).collect();
        assert_eq!(flags, vec![(1, true), (2, false), (5, false)]);
        assert_eq!(choices[2].candidate_coins, CoinCount::Reachable(3));
        assert_eq!(trace.last_coin()[11], Some(1));
        assert_eq!(trace.steps()[11].winning_choice().unwrap().coin, 1);
    }

    #[test]
    fn test_later_strict_improvement_is_also_best() {
        // Amount 6 with [1, 3]: coin 1 gives 4, coin 3 improves to 2.
        let trace = build_coin_change_trace(6, &[1, 3]);
        let choices = &trace.steps()[6].choices;
        assert!(choices[0].is_best);
        assert!(choices[1].is_best);
        assert_eq!(trace.steps()[6].winning_choice().unwrap().coin, 3);
        assert_eq!(trace.last_coin()[6], Some(3));
    }

    #[test]
    fn test_honours_given_coin_order() {
        let ascending = build_coin_change_trace(6, &[1, 3]);
        let descending = build_coin_change_trace(6, &[3, 1]);
        assert_eq!(ascending.table(), descending.table());

        let coins: Vec<usize> = descending.steps()[6].choices.iter().map(|c| c.coin).collect();
        assert_eq!(coins, vec![3, 1]);
        assert!(descending.steps()[6].choices[0].is_best);
        assert!(!descending.steps()[6].choices[1].is_best);
        assert_eq!(descending.coins(), &[3, 1]);
    }

    #[test]
    fn test_candidate_display() {
        let trace = build_coin_change_trace(11, &[1, 2, 5]);
        let choices = &trace.steps()[11].choices;
        assert_eq!(
            choices[0].to_string(),
            "Coin 1: dp[11 - 1] + 1 = dp[10] + 1 = 3 (best option)"
        );
        assert_eq!(choices[2].to_string(), "Coin 5: dp[11 - 5] + 1 = dp[6] + 1 = 3");

        let unreachable = build_coin_change_trace(3, &[2]);
        assert_eq!(
            unreachable.steps()[3].choices[0].to_string(),
            "Coin 2: dp[3 - 2] + 1 = dp[1] + 1 = ∞"
        );
    }

    #[test]
    fn test_table_as_of_cursor() {
        let trace = build_coin_change_trace(3, &[2]);
        assert_eq!(trace.table_as_of(None), vec![None, None, None, None]);
        assert_eq!(
            trace.table_as_of(Some(2)),
            vec![
                Some(CoinCount::Reachable(0)),
                Some(CoinCount::Unreachable),
                Some(CoinCount::Reachable(1)),
                None,
            ]
        );
    }

    #[test]
    fn test_reconstruct_rejects_bad_input() {
        let trace = build_coin_change_trace(5, &[2]);
        assert_eq!(reconstruct_combination(trace.table(), trace.last_coin(), 5), None);
        assert_eq!(reconstruct_combination(trace.table(), trace.last_coin(), 99), None);
        assert_eq!(
            reconstruct_combination(trace.table(), trace.last_coin(), 4),
            Some(vec![2, 2])
        );
        // A record that never reaches zero is refused rather than looping.
        let table = vec![CoinCount::Reachable(0), CoinCount::Reachable(1)];
        assert_eq!(reconstruct_combination(&table, &[None, None], 1), None);
    }

    #[test]
    fn test_matches_reference_on_random_inputs() {
        let mut rng = rand::thread_rng();
        let pool: Vec<usize> = (1..=25).collect();
        for _ in 0..50 {
            let count = rng.gen_range(1..=4);
            let mut coins: Vec<usize> = pool.choose_multiple(&mut rng, count).copied().collect();
            coins.sort_unstable();
            let amount = rng.gen_range(0..=100usize);

            let trace = build_coin_change_trace(amount as i64, &coins);
            assert_eq!(trace.steps().len(), amount + 1);
            assert_eq!(trace.steps()[0].value, CoinCount::Reachable(0));
            for (i, step) in trace.steps().iter().enumerate() {
                assert_eq!(step.position(), i);
                assert_eq!(step.value, trace.table()[i]);
            }

            let expected = min_coins_for_change(&coins, amount);
            assert_eq!(trace.result().and_then(CoinCount::count), expected);

            match (trace.combination(), expected) {
                (Some(combo), Some(n)) => {
                    assert_eq!(combo.len(), n);
                    assert_eq!(combo.iter().sum::<usize>(), amount);
                    assert!(combo.iter().all(|c| coins.contains(c)));
                }
                (None, None) => {}
                (got, want) => panic!("combination {got:?} disagrees with {want:?}"),
            }
        }
    }

    #[test]
    fn test_build_is_pure() {
        assert_eq!(
            build_coin_change_trace(23, &[1, 7, 10]),
            build_coin_change_trace(23, &[1, 7, 10])
        );
    }
}
