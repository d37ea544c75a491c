//! Ledger error type
//!
//! Every validation failure carries enough structured detail for the caller
//! to correct the call without re-querying state.

use serde::{Deserialize, Serialize};

/// Errors produced by escrow bookkeeping and payout reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerError {
    /// Zero entries or a zero top-up amount.
    InvalidAmount,
    /// Joining would push the participant past the global per-user entry cap.
    ExceedsMaxEntriesPerUser { requested_total: u32, max: u32 },
    /// Joining would push the pool past its total-entry capacity.
    ExceedsCapacity { requested_total: u32, capacity: u32 },
    /// Payout plan names more winners than the configured recipient cap.
    TooManyRecipients { count: usize, max: usize },
    /// Winner and amount lists differ in length.
    ArraysMismatch { winners: usize, amounts: usize },
    /// The same winner appears twice within one payout plan.
    DuplicateWinner { index: usize },
    /// A named winner never bought an entry in this pool.
    WinnerNotParticipant { index: usize },
    /// The plan total exceeds what custody reports as withdrawable.
    InsufficientPool { required: u64, available: u64 },
    /// Custody released less than the plan requires.
    InsufficientWithdrawn { withdrawn: u64, required: u64 },
    /// The open-pool index does not hold the expected id at a position.
    StaleOpenIndex { position: usize },
    /// u64 overflow computing total dues or total payout.
    Overflow,
}

impl core::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedgerError::InvalidAmount => write!(f, "amount must be greater than zero"),
            LedgerError::ExceedsMaxEntriesPerUser { requested_total, max } =>
                write!(f, "entry total {} exceeds per-user cap {}", requested_total, max),
            LedgerError::ExceedsCapacity { requested_total, capacity } =>
                write!(f, "pool total {} exceeds capacity {}", requested_total, capacity),
            LedgerError::TooManyRecipients { count, max } =>
                write!(f, "{} recipients exceeds cap {}", count, max),
            LedgerError::ArraysMismatch { winners, amounts } =>
                write!(f, "{} winners but {} amounts", winners, amounts),
            LedgerError::DuplicateWinner { index } =>
                write!(f, "duplicate winner at plan index {}", index),
            LedgerError::WinnerNotParticipant { index } =>
                write!(f, "winner at plan index {} is not a participant", index),
            LedgerError::InsufficientPool { required, available } =>
                write!(f, "plan requires {} but only {} is withdrawable", required, available),
            LedgerError::InsufficientWithdrawn { withdrawn, required } =>
                write!(f, "custody released {} but plan requires {}", withdrawn, required),
            LedgerError::StaleOpenIndex { position } =>
                write!(f, "open-pool index is stale at position {}", position),
            LedgerError::Overflow => write!(f, "arithmetic overflow"),
        }
    }
}
