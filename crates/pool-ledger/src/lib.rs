//! Pool Ledger — escrow accounting for pay-to-enter contest pools
//!
//! Pure bookkeeping for the escrow-pools program: join/capacity accounting,
//! payout-plan validation, reconciliation arithmetic, open-pool index
//! maintenance, and vault-label sanitization. This crate is compiled to:
//! - Native (for the on-chain program and operator tooling)
//! - WASM (for frontend pre-validation of plans before submitting)

mod entries;
mod error;
mod index;
mod plan;
mod reconcile;
mod symbol;

#[cfg(feature = "wasm")]
mod wasm;

pub use entries::{check_join, total_dues, JoinOutcome};
pub use error::LedgerError;
pub use index::{swap_remove_open, SwapRemoval};
pub use plan::validate_plan;
pub use reconcile::{check_liquidity, confirm_withdrawal, Settlement};
pub use symbol::{sanitize_vault_symbol, SYMBOL_FALLBACK, SYMBOL_MAX_CHARS};

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a pool.
///
/// `Open` accepts joins, `PendingPayout` awaits the organizer's single
/// distribution call, `Settled` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolPhase {
    Open,
    PendingPayout,
    Settled,
}

/// Derive a pool's phase from its clock and settlement flag.
///
/// Joins are rejected strictly after the deadline while payout becomes
/// eligible at the deadline itself, so at `now == deadline` the pool is
/// still `Open` but already distributable.
pub fn pool_phase(now: i64, deadline: i64, payout_complete: bool) -> PoolPhase {
    if payout_complete {
        PoolPhase::Settled
    } else if now > deadline {
        PoolPhase::PendingPayout
    } else {
        PoolPhase::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        assert_eq!(pool_phase(100, 200, false), PoolPhase::Open);
        assert_eq!(pool_phase(200, 200, false), PoolPhase::Open);
        assert_eq!(pool_phase(201, 200, false), PoolPhase::PendingPayout);
        assert_eq!(pool_phase(201, 200, true), PoolPhase::Settled);
        // Settlement wins regardless of the clock
        assert_eq!(pool_phase(0, 200, true), PoolPhase::Settled);
    }

    /// Ledger-level walk through the full contest flow: joins, a top-up,
    /// and an exact distribution with the surplus routed to overflow.
    #[test]
    fn test_contest_flow_accounting() {
        let dues = 1_000_000u64; // 6-decimal stable asset
        let capacity = 10u32;
        let max_per_user = 100u32;

        // A joins with 2 entries, then 3 more — one participant, 5 entries
        let join1 = check_join(dues, 2, 0, 0, capacity, max_per_user).unwrap();
        assert!(join1.first_join);
        let join2 =
            check_join(dues, 3, join1.user_entries, join1.pool_entries, capacity, max_per_user)
                .unwrap();
        assert!(!join2.first_join);
        assert_eq!(join2.user_entries, 5);
        assert_eq!(join2.pool_entries, 5);

        // Custody holds the dues plus a 1_000_000 top-up from a contributor
        let custody = join1.total_dues + join2.total_dues + 1_000_000;
        assert_eq!(custody, 6_000_000);

        // Organizer pays A 4_000_000; the rest overflows
        let participants = ["a"];
        let total = validate_plan(&["a"], &[4_000_000], &participants, 16).unwrap();
        check_liquidity(total, custody).unwrap();
        let settlement = confirm_withdrawal(custody, total).unwrap();
        assert_eq!(settlement.total_payout, 4_000_000);
        assert_eq!(settlement.overflow, 2_000_000);
    }

    /// Distribution demanding more than custody holds fails before any
    /// transfer with both figures reported.
    #[test]
    fn test_overdrawn_plan_rejected() {
        let participants = ["a", "b"];
        let total =
            validate_plan(&["a", "b"], &[1_000_000, 1_000_000], &participants, 16).unwrap();
        let err = check_liquidity(total, 1_500_000).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientPool { required: 2_000_000, available: 1_500_000 }
        );
    }

    /// Zero-winner close-out: the empty plan totals zero and the whole
    /// custody balance overflows.
    #[test]
    fn test_zero_winner_close_out() {
        let participants = ["a", "b", "c"];
        let total = validate_plan::<&str>(&[], &[], &participants, 16).unwrap();
        assert_eq!(total, 0);
        let settlement = confirm_withdrawal(5_000_000, total).unwrap();
        assert_eq!(settlement.overflow, 5_000_000);
    }
}
