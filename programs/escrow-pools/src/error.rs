//! Custom error codes
//!
//! Anchor error codes carry no fields, so variants that the ledger reports
//! with structured detail (insufficient-pool, insufficient-withdrawn, the
//! cap overruns) are logged via `msg!` with both figures before the code is
//! returned. See [`ledger_err`].

use anchor_lang::prelude::*;
use pool_ledger::LedgerError;

#[error_code]
pub enum EscrowError {
    #[msg("Caller is not an authorized pool creator")]
    NotAuthorized = 6000,

    #[msg("Caller is not the pool organizer")]
    NotOrganizer = 6001,

    #[msg("Asset does not match the supplied mint")]
    InvalidAsset = 6002,

    #[msg("Principal cannot be the zero address")]
    InvalidPrincipal = 6003,

    #[msg("Dues per entry below the configured minimum")]
    InvalidDues = 6004,

    #[msg("Display name is empty")]
    EmptyName = 6005,

    #[msg("Display name exceeds 50 characters")]
    NameTooLong = 6006,

    #[msg("Deadline is sooner than the configured minimum duration")]
    DeadlineTooSoon = 6007,

    #[msg("Capacity must be between 1 and the configured cap")]
    InvalidCapacity = 6008,

    #[msg("Amount must be greater than zero")]
    InvalidAmount = 6009,

    #[msg("Join would exceed the per-user entry cap")]
    ExceedsMaxEntriesPerUser = 6010,

    #[msg("Join would exceed the pool's entry capacity")]
    ExceedsCapacity = 6011,

    #[msg("Escrow has ended; no entries after the deadline")]
    EscrowEnded = 6012,

    #[msg("Escrow has not ended; payout requires the deadline to pass")]
    NotEnded = 6013,

    #[msg("Pool has already been paid out")]
    AlreadyComplete = 6014,

    #[msg("Payout plan names too many recipients")]
    TooManyRecipients = 6015,

    #[msg("Winner and amount lists differ in length")]
    ArraysMismatch = 6016,

    #[msg("Duplicate winner in payout plan")]
    DuplicateWinner = 6017,

    #[msg("Winner is not a pool participant")]
    WinnerNotParticipant = 6018,

    #[msg("Plan total exceeds the withdrawable pool balance")]
    InsufficientPool = 6019,

    #[msg("Custody released less than the plan requires")]
    InsufficientWithdrawn = 6020,

    #[msg("Max entries per user must be greater than zero")]
    InvalidMax = 6021,

    #[msg("Invalid global configuration value")]
    InvalidConfig = 6022,

    #[msg("Principal is already an authorized creator")]
    AlreadyAuthorized = 6023,

    #[msg("Principal is not on the creator whitelist")]
    CreatorNotFound = 6024,

    #[msg("Winner token account does not match the plan")]
    InvalidWinnerAccount = 6025,

    #[msg("Overflow token account is not owned by the overflow recipient")]
    InvalidOverflowAccount = 6026,

    #[msg("Settling a non-last open pool requires the moved pool account")]
    MovedPoolRequired = 6027,

    #[msg("Open-pool index is out of sync with the pool record")]
    StaleOpenIndex = 6028,

    #[msg("Arithmetic overflow")]
    Overflow = 6029,
}

impl From<LedgerError> for EscrowError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount => EscrowError::InvalidAmount,
            LedgerError::ExceedsMaxEntriesPerUser { .. } => EscrowError::ExceedsMaxEntriesPerUser,
            LedgerError::ExceedsCapacity { .. } => EscrowError::ExceedsCapacity,
            LedgerError::TooManyRecipients { .. } => EscrowError::TooManyRecipients,
            LedgerError::ArraysMismatch { .. } => EscrowError::ArraysMismatch,
            LedgerError::DuplicateWinner { .. } => EscrowError::DuplicateWinner,
            LedgerError::WinnerNotParticipant { .. } => EscrowError::WinnerNotParticipant,
            LedgerError::InsufficientPool { .. } => EscrowError::InsufficientPool,
            LedgerError::InsufficientWithdrawn { .. } => EscrowError::InsufficientWithdrawn,
            LedgerError::StaleOpenIndex { .. } => EscrowError::StaleOpenIndex,
            LedgerError::Overflow => EscrowError::Overflow,
        }
    }
}

/// Log the ledger error's structured detail, then surface the fixed code.
pub fn ledger_err(err: LedgerError) -> Error {
    msg!("{}", err);
    EscrowError::from(err).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_variants_map_to_codes() {
        let code = |e: EscrowError| e as u32;
        assert_eq!(
            code(LedgerError::InsufficientPool { required: 2, available: 1 }.into()),
            code(EscrowError::InsufficientPool)
        );
        assert_eq!(
            code(LedgerError::DuplicateWinner { index: 3 }.into()),
            code(EscrowError::DuplicateWinner)
        );
        assert_eq!(code(LedgerError::Overflow.into()), code(EscrowError::Overflow));
    }
}
