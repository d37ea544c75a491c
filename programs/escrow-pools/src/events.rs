//! Events emitted by the escrow-pools program.

use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    pub organizer: Pubkey,
    pub vault: Pubkey,
    pub asset_mint: Pubkey,
    pub dues_per_entry: u64,
    pub deadline: i64,
}

#[event]
pub struct EntryJoined {
    pub pool_id: u64,
    pub participant: Pubkey,
    pub num_entries: u32,
}

#[event]
pub struct PoolFunded {
    pub pool_id: u64,
    pub contributor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct OverflowRecipientSet {
    pub pool_id: u64,
    pub recipient: Pubkey,
}

#[event]
pub struct WinningsDistributed {
    pub pool_id: u64,
    pub winners: Vec<Pubkey>,
    pub amounts: Vec<u64>,
    pub overflow_to: Pubkey,
    pub overflow_amount: u64,
}

#[event]
pub struct MaxEntriesPerUserUpdated {
    pub new_max: u32,
}

#[event]
pub struct CreatorAuthorized {
    pub principal: Pubkey,
}

#[event]
pub struct CreatorRevoked {
    pub principal: Pubkey,
}
