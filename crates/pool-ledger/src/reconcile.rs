//! Payout reconciliation arithmetic
//!
//! The reconciler never trusts figures the custody layer declares: the
//! caller snapshots the withdrawable balance before settling and re-measures
//! what was actually released afterwards. These functions hold the exact
//! accounting between those two measurements.
//!
//! There is no tolerance band. The plan must fit exactly within custody,
//! every winner gets exactly the planned amount, and all surplus (including
//! slippage dust) goes to the overflow recipient, never to the last winner.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Result of confirming a settlement against measured custody figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Exact sum owed to winners.
    pub total_payout: u64,
    /// Surplus routed to the overflow recipient.
    pub overflow: u64,
}

/// The sole capacity check: the plan must fit within what custody reports
/// as withdrawable at settlement time.
pub fn check_liquidity(total_payout: u64, max_withdrawable: u64) -> Result<(), LedgerError> {
    if total_payout > max_withdrawable {
        return Err(LedgerError::InsufficientPool {
            required: total_payout,
            available: max_withdrawable,
        });
    }
    Ok(())
}

/// Confirm that custody actually released enough to cover the plan and
/// compute the overflow. `withdrawn` is the measured balance delta, not the
/// custody layer's declared return.
pub fn confirm_withdrawal(withdrawn: u64, total_payout: u64) -> Result<Settlement, LedgerError> {
    if withdrawn < total_payout {
        return Err(LedgerError::InsufficientWithdrawn {
            withdrawn,
            required: total_payout,
        });
    }
    Ok(Settlement {
        total_payout,
        overflow: withdrawn - total_payout,
    })
}
