//! Open-pool index maintenance
//!
//! The set of currently-open pool ids lives in one shared sequence. Removal
//! on settlement is swap-with-last-and-truncate so it stays O(1); each pool
//! stores its own position, and when the last element is moved into the hole
//! the caller must write the new position back to that pool's record. The
//! [`SwapRemoval`] returned here tells the caller exactly which record needs
//! the fixup.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Outcome of removing an id from the open-pool index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRemoval {
    /// The pool id that was moved into the vacated position, if any.
    /// `None` when the removed id was already last.
    pub moved_id: Option<u64>,
    /// The position the moved id now occupies (the removed id's old slot).
    pub position: u32,
}

/// Remove `expected_id` from `open_pools` at `position`.
///
/// Fails with [`LedgerError::StaleOpenIndex`] if the position is out of
/// bounds or holds a different id — either means a pool record and the
/// shared index disagree, which must never pass silently.
pub fn swap_remove_open(
    open_pools: &mut Vec<u64>,
    position: u32,
    expected_id: u64,
) -> Result<SwapRemoval, LedgerError> {
    let at = position as usize;
    if open_pools.get(at) != Some(&expected_id) {
        return Err(LedgerError::StaleOpenIndex { position: at });
    }

    open_pools.swap_remove(at);

    Ok(SwapRemoval {
        moved_id: open_pools.get(at).copied(),
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_remove_last_moves_nothing() {
        let mut open = vec![10, 11, 12];
        let removal = swap_remove_open(&mut open, 2, 12).unwrap();
        assert_eq!(removal.moved_id, None);
        assert_eq!(open, vec![10, 11]);
    }

    #[test]
    fn test_remove_middle_reports_moved_id() {
        let mut open = vec![10, 11, 12, 13];
        let removal = swap_remove_open(&mut open, 1, 11).unwrap();
        assert_eq!(removal.moved_id, Some(13));
        assert_eq!(removal.position, 1);
        assert_eq!(open, vec![10, 13, 12]);
    }

    #[test]
    fn test_stale_position_rejected() {
        let mut open = vec![10, 11];
        let err = swap_remove_open(&mut open, 1, 10).unwrap_err();
        assert_eq!(err, LedgerError::StaleOpenIndex { position: 1 });
        let err = swap_remove_open(&mut open, 5, 10).unwrap_err();
        assert_eq!(err, LedgerError::StaleOpenIndex { position: 5 });
        // Nothing was mutated on either failure
        assert_eq!(open, vec![10, 11]);
    }

    #[test]
    fn test_singleton_index_drains() {
        let mut open = vec![42];
        let removal = swap_remove_open(&mut open, 0, 42).unwrap();
        assert_eq!(removal.moved_id, None);
        assert!(open.is_empty());
    }

    proptest! {
        /// Tracked positions stay consistent under arbitrary removal orders.
        #[test]
        fn prop_positions_stay_consistent(
            n in 1usize..=32,
            picks in proptest::collection::vec(0usize..32, 1..=32),
        ) {
            let mut open: Vec<u64> = (0..n as u64).collect();
            let mut positions: HashMap<u64, u32> =
                open.iter().map(|&id| (id, id as u32)).collect();

            for pick in picks {
                if open.is_empty() {
                    break;
                }
                let at = (pick % open.len()) as u32;
                let id = open[at as usize];

                let removal = swap_remove_open(&mut open, at, id).unwrap();
                positions.remove(&id);
                if let Some(moved) = removal.moved_id {
                    positions.insert(moved, removal.position);
                }

                // Every tracked position still points at its own id
                for (&tracked_id, &pos) in &positions {
                    prop_assert_eq!(open[pos as usize], tracked_id);
                }
                prop_assert_eq!(open.len(), positions.len());
            }
        }
    }
}
