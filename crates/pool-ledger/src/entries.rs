//! Entry accounting
//!
//! Capacity and per-user limit checks for joins, plus the checked dues
//! arithmetic. Entry counts only ever grow until a pool settles; there are
//! no partial refunds.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// The state deltas a successful join commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinOutcome {
    /// Participant's entry count after the join.
    pub user_entries: u32,
    /// Pool's total entry count after the join.
    pub pool_entries: u32,
    /// Whether this join adds the participant to the pool's participant set.
    pub first_join: bool,
    /// Exact dues owed for this join, in the asset's smallest unit.
    pub total_dues: u64,
}

/// Validate a join and compute its outcome.
///
/// Checks, in order: nonzero entries, the global per-user cap, the pool
/// capacity (a cap on total entries, not unique participants), and the dues
/// product. Nothing is mutated here; the caller commits the returned totals.
pub fn check_join(
    dues_per_entry: u64,
    num_entries: u32,
    user_entries: u32,
    pool_entries: u32,
    capacity: u32,
    max_entries_per_user: u32,
) -> Result<JoinOutcome, LedgerError> {
    if num_entries == 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let new_user_total = user_entries
        .checked_add(num_entries)
        .ok_or(LedgerError::Overflow)?;
    if new_user_total > max_entries_per_user {
        return Err(LedgerError::ExceedsMaxEntriesPerUser {
            requested_total: new_user_total,
            max: max_entries_per_user,
        });
    }

    let new_pool_total = pool_entries
        .checked_add(num_entries)
        .ok_or(LedgerError::Overflow)?;
    if new_pool_total > capacity {
        return Err(LedgerError::ExceedsCapacity {
            requested_total: new_pool_total,
            capacity,
        });
    }

    Ok(JoinOutcome {
        user_entries: new_user_total,
        pool_entries: new_pool_total,
        first_join: user_entries == 0,
        total_dues: total_dues(dues_per_entry, num_entries)?,
    })
}

/// Checked dues product. Overflow is rejected, never wrapped.
pub fn total_dues(dues_per_entry: u64, num_entries: u32) -> Result<u64, LedgerError> {
    dues_per_entry
        .checked_mul(num_entries as u64)
        .ok_or(LedgerError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_entries_rejected() {
        let err = check_join(1_000_000, 0, 0, 0, 10, 100).unwrap_err();
        assert_eq!(err, LedgerError::InvalidAmount);
    }

    #[test]
    fn test_first_join_flagged_once() {
        let first = check_join(1_000_000, 2, 0, 0, 10, 100).unwrap();
        assert!(first.first_join);
        assert_eq!(first.user_entries, 2);
        assert_eq!(first.total_dues, 2_000_000);

        let second = check_join(1_000_000, 3, first.user_entries, first.pool_entries, 10, 100).unwrap();
        assert!(!second.first_join);
        assert_eq!(second.user_entries, 5);
        assert_eq!(second.pool_entries, 5);
    }

    #[test]
    fn test_per_user_cap_boundary() {
        // Exactly at the cap succeeds
        let ok = check_join(1, 4, 6, 6, 100, 10).unwrap();
        assert_eq!(ok.user_entries, 10);
        // One past the cap fails with both figures
        let err = check_join(1, 5, 6, 6, 100, 10).unwrap_err();
        assert_eq!(err, LedgerError::ExceedsMaxEntriesPerUser { requested_total: 11, max: 10 });
    }

    #[test]
    fn test_capacity_boundary() {
        // Filling the pool exactly to capacity succeeds
        let ok = check_join(1, 3, 0, 7, 10, 100).unwrap();
        assert_eq!(ok.pool_entries, 10);
        // One entry past capacity fails
        let err = check_join(1, 4, 0, 7, 10, 100).unwrap_err();
        assert_eq!(err, LedgerError::ExceedsCapacity { requested_total: 11, capacity: 10 });
    }

    #[test]
    fn test_dues_overflow_rejected() {
        assert_eq!(total_dues(u64::MAX, 2), Err(LedgerError::Overflow));
        assert_eq!(total_dues(u64::MAX, 1), Ok(u64::MAX));
    }

    #[test]
    fn test_cumulative_joins_match_single_join() {
        // a then b lands on the same totals and dues as a+b in one call
        let a = check_join(250, 2, 0, 0, 100, 100).unwrap();
        let b = check_join(250, 3, a.user_entries, a.pool_entries, 100, 100).unwrap();
        let once = check_join(250, 5, 0, 0, 100, 100).unwrap();
        assert_eq!(b.user_entries, once.user_entries);
        assert_eq!(b.pool_entries, once.pool_entries);
        assert_eq!(a.total_dues + b.total_dues, once.total_dues);
    }

    proptest! {
        #[test]
        fn prop_successful_join_never_breaks_invariants(
            dues in 1u64..=10_000_000,
            num in 1u32..=64,
            user in 0u32..=64,
            pool in 0u32..=256,
            capacity in 1u32..=256,
            max_per_user in 1u32..=64,
        ) {
            // The pool total always includes the user's entries
            prop_assume!(user <= pool);
            if let Ok(outcome) = check_join(dues, num, user, pool, capacity, max_per_user) {
                prop_assert!(outcome.pool_entries <= capacity);
                prop_assert!(outcome.user_entries <= max_per_user);
                prop_assert_eq!(outcome.pool_entries - pool, outcome.user_entries - user);
                prop_assert_eq!(outcome.total_dues, dues * num as u64);
                prop_assert_eq!(outcome.first_join, user == 0);
            }
        }

        #[test]
        fn prop_split_joins_equal_single_join(
            dues in 1u64..=1_000_000,
            a in 1u32..=32,
            b in 1u32..=32,
        ) {
            let capacity = 128;
            let max_per_user = 128;
            let first = check_join(dues, a, 0, 0, capacity, max_per_user).unwrap();
            let second =
                check_join(dues, b, first.user_entries, first.pool_entries, capacity, max_per_user)
                    .unwrap();
            let once = check_join(dues, a + b, 0, 0, capacity, max_per_user).unwrap();
            prop_assert_eq!(second.user_entries, once.user_entries);
            prop_assert_eq!(second.pool_entries, once.pool_entries);
            prop_assert_eq!(first.total_dues + second.total_dues, once.total_dues);
        }
    }
}
