// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Run a computation until two consecutive attempts agree.

use tracing::{debug, warn};

/// Failure of [`confirm`].
#[derive(Debug, thiserror::Error)]
pub enum ConfirmError<E> {
    /// No two consecutive attempts produced equal results.
    #[error("no two consecutive results agreed within {attempts} attempts")]
    Exhausted {
        /// Attempts made (the configured bound).
        attempts: usize,
    },
    /// An attempt failed outright; no further attempts were made.
    #[error("attempt failed: {0}")]
    Compute(E),
}

/// Calls `compute(attempt)` for `attempt` in `1..=max_attempts` and returns the
/// first result equal to the result of the attempt before it.
///
/// At least two attempts are needed to confirm anything; a bound below 2 is
/// always exhausted. Errors from `compute` are returned immediately.
///
/// # Errors
///
/// [`ConfirmError::Exhausted`] if the bound is reached without agreement;
/// [`ConfirmError::Compute`] if an attempt fails.
pub fn confirm<T, E, F>(max_attempts: usize, mut compute: F) -> Result<T, ConfirmError<E>>
where
    T: PartialEq,
    F: FnMut(usize) -> Result<T, E>,
{
    let mut previous: Option<T> = None;
    for attempt in 1..=max_attempts {
        let current = compute(attempt).map_err(ConfirmError::Compute)?;
        match previous {
            Some(ref last) if *last == current => {
                debug!(attempt, "result confirmed");
                return Ok(current);
            }
            Some(_) => warn!(attempt, "result differs from the previous attempt; retrying"),
            None => {}
        }
        previous = Some(current);
    }
    Err(ConfirmError::Exhausted {
        attempts: max_attempts,
    })
}
