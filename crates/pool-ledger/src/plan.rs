//! Payout-plan validation
//!
//! A plan is a caller-supplied list of (winner, amount) pairs. Winners must
//! be distinct within the plan and each must hold at least one entry in the
//! pool. Cross-call duplicates are fine — a principal may win in any number
//! of pools.

use crate::error::LedgerError;

/// Validate a payout plan against a pool's participant set.
///
/// Generic over the principal type so the crate stays runtime-free; the
/// on-chain caller passes `Pubkey` slices. The duplicate scan is O(n²) over
/// this call's winners only, which is fine under the recipient cap.
///
/// Returns the checked plan total.
pub fn validate_plan<K: PartialEq>(
    winners: &[K],
    amounts: &[u64],
    participants: &[K],
    max_recipients: usize,
) -> Result<u64, LedgerError> {
    if winners.len() > max_recipients {
        return Err(LedgerError::TooManyRecipients {
            count: winners.len(),
            max: max_recipients,
        });
    }
    if winners.len() != amounts.len() {
        return Err(LedgerError::ArraysMismatch {
            winners: winners.len(),
            amounts: amounts.len(),
        });
    }

    let mut total: u64 = 0;
    for (i, winner) in winners.iter().enumerate() {
        if !participants.iter().any(|p| p == winner) {
            return Err(LedgerError::WinnerNotParticipant { index: i });
        }
        if winners[..i].iter().any(|w| w == winner) {
            return Err(LedgerError::DuplicateWinner { index: i });
        }
        total = total.checked_add(amounts[i]).ok_or(LedgerError::Overflow)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAX_RECIPIENTS: usize = 16;

    #[test]
    fn test_empty_plan_totals_zero() {
        let participants = ["a", "b"];
        let total = validate_plan::<&str>(&[], &[], &participants, MAX_RECIPIENTS).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_valid_plan_total() {
        let participants = ["a", "b", "c"];
        let total = validate_plan(&["b", "a"], &[300, 200], &participants, MAX_RECIPIENTS).unwrap();
        assert_eq!(total, 500);
    }

    #[test]
    fn test_recipient_cap_checked_before_length_mismatch() {
        let participants = ["a", "b", "c"];
        let err = validate_plan(&["a", "b", "c"], &[1], &participants, 2).unwrap_err();
        assert_eq!(err, LedgerError::TooManyRecipients { count: 3, max: 2 });
    }

    #[test]
    fn test_length_mismatch() {
        let participants = ["a", "b"];
        let err = validate_plan(&["a", "b"], &[1], &participants, MAX_RECIPIENTS).unwrap_err();
        assert_eq!(err, LedgerError::ArraysMismatch { winners: 2, amounts: 1 });
    }

    #[test]
    fn test_non_participant_rejected() {
        let participants = ["a", "b"];
        let err = validate_plan(&["a", "x"], &[1, 2], &participants, MAX_RECIPIENTS).unwrap_err();
        assert_eq!(err, LedgerError::WinnerNotParticipant { index: 1 });
    }

    #[test]
    fn test_duplicate_winner_rejected() {
        let participants = ["a", "b"];
        let err = validate_plan(&["a", "b", "a"], &[1, 2, 3], &participants, MAX_RECIPIENTS)
            .unwrap_err();
        assert_eq!(err, LedgerError::DuplicateWinner { index: 2 });
    }

    #[test]
    fn test_total_overflow_rejected() {
        let participants = ["a", "b"];
        let err = validate_plan(&["a", "b"], &[u64::MAX, 1], &participants, MAX_RECIPIENTS)
            .unwrap_err();
        assert_eq!(err, LedgerError::Overflow);
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_when_plan_valid(
            amounts in proptest::collection::vec(0u64..=1_000_000_000, 0..=8),
        ) {
            // Participants 0..n, winners are a prefix — always valid
            let participants: Vec<usize> = (0..amounts.len()).collect();
            let winners = participants.clone();
            let total =
                validate_plan(&winners, &amounts, &participants, MAX_RECIPIENTS).unwrap();
            prop_assert_eq!(total, amounts.iter().sum::<u64>());
        }

        #[test]
        fn prop_any_duplicate_is_caught(
            n in 2usize..=8,
            dup_at in 1usize..=7,
        ) {
            prop_assume!(dup_at < n);
            let participants: Vec<usize> = (0..n).collect();
            let mut winners = participants.clone();
            winners[dup_at] = winners[0];
            let amounts = vec![1u64; n];
            let err =
                validate_plan(&winners, &amounts, &participants, MAX_RECIPIENTS).unwrap_err();
            prop_assert_eq!(err, LedgerError::DuplicateWinner { index: dup_at });
        }
    }
}
