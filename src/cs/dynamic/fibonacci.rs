//! Fibonacci tabulation with a per-cell trace.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::trace::{Trace, TraceStep};

/// Largest index the builder will tabulate. Larger inputs yield an empty trace.
pub const MAX_FIBONACCI_N: i64 = 1_000;

/// One filled cell of the Fibonacci table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciStep {
    pub index: usize,
    pub value: BigUint,
    pub explanation: String,
}

impl TraceStep for FibonacciStep {
    fn position(&self) -> usize {
        self.index
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Fills `fib[0..=n]` left to right and records every cell as a step.
///
/// Negative `n`, or `n` above [`MAX_FIBONACCI_N`], yields an empty trace.
/// Otherwise the trace has `n + 1` steps, ordered by index, with the two base
/// cases first.
///
/// # Examples
///
/// ```
/// use dptrace::cs::dynamic::fibonacci::build_fibonacci_trace;
///
/// let trace = build_fibonacci_trace(8);
/// let values: Vec<u64> = trace
///     .iter()
///     .map(|step| step.value.to_string().parse().unwrap())
///     .collect();
/// assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21]);
///
/// assert!(build_fibonacci_trace(-1).is_empty());
/// ```
pub fn build_fibonacci_trace(n: i64) -> Trace<FibonacciStep> {
    let n = match usize::try_from(n) {
        Ok(n) if n <= MAX_FIBONACCI_N as usize => n,
        _ => {
            log::debug!("fibonacci trace requested for n={n}, returning empty trace");
            return Trace::empty();
        }
    };

    let mut dp: Vec<BigUint> = Vec::with_capacity(n + 1);
    let mut steps = Vec::with_capacity(n + 1);

    // Base cases
    dp.push(BigUint::zero());
    steps.push(base_step(0, BigUint::zero()));
    if n >= 1 {
        dp.push(BigUint::one());
        steps.push(base_step(1, BigUint::one()));
    }

    for i in 2..=n {
        let value = &dp[i - 1] + &dp[i - 2];
        let explanation = format!(
            "fib({i}) = fib({}) + fib({}) = {} + {} = {value}",
            i - 1,
            i - 2,
            dp[i - 1],
            dp[i - 2],
        );
        log::trace!("{explanation}");
        steps.push(FibonacciStep {
            index: i,
            value: value.clone(),
            explanation,
        });
        dp.push(value);
    }

    log::debug!("built fibonacci trace for n={n} with {} steps", steps.len());
    Trace::from_steps(steps)
}

fn base_step(index: usize, value: BigUint) -> FibonacciStep {
    FibonacciStep {
        index,
        explanation: format!("Base case: fib({index}) = {value}"),
        value,
    }
}
