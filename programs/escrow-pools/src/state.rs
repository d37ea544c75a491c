//! Account state definitions

use anchor_lang::prelude::*;

/// Bytes added to a pool account per recorded participant (one pubkey)
pub const BYTES_PER_PARTICIPANT: usize = 32;

/// Bytes added to an index account per recorded pool id
pub const BYTES_PER_POOL_ID: usize = 8;

/// Bytes added to the config account per whitelisted creator
pub const BYTES_PER_CREATOR: usize = 32;

/// Display names are capped at 50 characters (up to 4 bytes each)
pub const MAX_NAME_CHARS: usize = 50;

/// Global configuration account
#[account]
#[derive(Default)]
pub struct Config {
    /// Owner who administers the whitelist and global limits
    pub owner: Pubkey,
    /// Smallest dues-per-entry a pool may charge
    pub minimum_dues: u64,
    /// Smallest allowed gap between creation time and deadline (seconds)
    pub minimum_duration: i64,
    /// Hard cap on any pool's entry capacity
    pub capacity_cap: u32,
    /// Maximum winners in one payout plan
    pub max_recipients: u16,
    /// Global per-user entry cap, applied independently per pool
    pub max_entries_per_user: u32,
    /// Next pool id (strictly increasing, never reused)
    pub next_pool_id: u64,
    /// Whitelisted pool creators (the owner is implicitly authorized)
    pub authorized_creators: Vec<Pubkey>,
    /// Ids of pools that have not yet settled (swap-remove on settlement)
    pub open_pools: Vec<u64>,
    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    /// Base space with both vecs empty
    pub const BASE_SPACE: usize = 8 + // discriminator
        32 +  // owner
        8 +   // minimum_dues
        8 +   // minimum_duration
        4 +   // capacity_cap
        2 +   // max_recipients
        4 +   // max_entries_per_user
        8 +   // next_pool_id
        4 +   // authorized_creators vec len (empty)
        4 +   // open_pools vec len (empty)
        1 +   // bump
        16;   // padding for future fields

    pub fn space(creator_count: usize, open_pool_count: usize) -> usize {
        Self::BASE_SPACE
            + creator_count * BYTES_PER_CREATOR
            + open_pool_count * BYTES_PER_POOL_ID
    }

    /// The owner is authorized implicitly and permanently; everyone else
    /// must be on the whitelist.
    pub fn is_authorized(&self, principal: &Pubkey) -> bool {
        *principal == self.owner || self.authorized_creators.contains(principal)
    }
}

/// One escrow pool per contest
///
/// Sized dynamically; grows via realloc as participants join. Never closed —
/// settled pools stay queryable.
#[account]
#[derive(Default)]
pub struct Pool {
    /// Unique id, assigned from config.next_pool_id
    pub id: u64,
    /// Creator; exclusively authorized to set the overflow recipient and
    /// trigger payout
    pub organizer: Pubkey,
    /// Accepted asset mint (immutable after creation)
    pub asset_mint: Pubkey,
    /// Dedicated custody token account (PDA, authority = this pool)
    pub vault: Pubkey,
    /// Cosmetic vault label derived from the display name
    pub vault_symbol: String,
    /// Human label, 1..=50 chars
    pub display_name: String,
    /// Price of one entry in the asset's smallest unit
    pub dues_per_entry: u64,
    /// No entries after this timestamp; payout eligible from it onward
    pub deadline: i64,
    /// Cap on total entries (not unique participants)
    pub capacity: u32,
    /// Running sum of entries across all participants
    pub total_entries: u32,
    /// Distinct participants in insertion order, each at most once
    pub participants: Vec<Pubkey>,
    /// Where surplus goes at settlement; organizer when unset
    pub overflow_recipient: Option<Pubkey>,
    /// Monotonic false -> true, terminal
    pub payout_complete: bool,
    /// Position in config.open_pools, for O(1) swap-remove fixup
    pub open_index: u32,
    /// PDA bump seed
    pub bump: u8,
}

impl Pool {
    /// Base space with an empty participant set
    pub const BASE_SPACE: usize = 8 + // discriminator
        8 +   // id
        32 +  // organizer
        32 +  // asset_mint
        32 +  // vault
        4 + 11 +                  // vault_symbol (ASCII, <= 11 chars)
        4 + MAX_NAME_CHARS * 4 +  // display_name (UTF-8)
        8 +   // dues_per_entry
        8 +   // deadline
        4 +   // capacity
        4 +   // total_entries
        4 +   // participants vec len (empty)
        1 + 32 + // overflow_recipient
        1 +   // payout_complete
        4 +   // open_index
        1 +   // bump
        16;   // padding for future fields

    pub fn space(participant_count: usize) -> usize {
        Self::BASE_SPACE + participant_count * BYTES_PER_PARTICIPANT
    }

    /// Account size needed to record a join by `participant`. Grows by one
    /// slot only when the participant is not yet recorded; repeat joins
    /// keep the current size.
    pub fn space_after_join(&self, participant: &Pubkey) -> usize {
        let added = usize::from(!self.participants.contains(participant));
        Self::space(self.participants.len() + added)
    }

    /// Overflow recipient, defaulting to the organizer when unset.
    pub fn overflow_to(&self) -> Pubkey {
        self.overflow_recipient.unwrap_or(self.organizer)
    }

    /// Lifecycle phase at `now`.
    pub fn phase(&self, now: i64) -> pool_ledger::PoolPhase {
        pool_ledger::pool_phase(now, self.deadline, self.payout_complete)
    }
}

/// Per-(pool, participant) entry count
///
/// Created on first join; monotonically non-decreasing until the pool
/// settles. The sum of all records for a pool equals the pool's
/// total_entries.
#[account]
#[derive(Default)]
pub struct EntryRecord {
    /// Parent pool
    pub pool: Pubkey,
    /// Participant wallet
    pub participant: Pubkey,
    /// Entries purchased so far
    pub entries: u32,
    /// Timestamp of the first join
    pub joined_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl EntryRecord {
    pub const LEN: usize = 8 + // discriminator
        32 +  // pool
        32 +  // participant
        4 +   // entries
        8 +   // joined_at
        1 +   // bump
        16;   // padding
}

/// Append-only index of pools created by one principal
#[account]
#[derive(Default)]
pub struct CreatorIndex {
    pub authority: Pubkey,
    pub pool_ids: Vec<u64>,
    pub bump: u8,
}

impl CreatorIndex {
    pub const BASE_SPACE: usize = 8 + 32 + 4 + 1 + 8; // discriminator + authority + vec len + bump + padding

    pub fn space(pool_count: usize) -> usize {
        Self::BASE_SPACE + pool_count * BYTES_PER_POOL_ID
    }
}

/// Append-only index of pools one principal has joined
///
/// A pool is recorded once, on the participant's first join.
#[account]
#[derive(Default)]
pub struct MemberIndex {
    pub authority: Pubkey,
    pub pool_ids: Vec<u64>,
    pub bump: u8,
}

impl MemberIndex {
    pub const BASE_SPACE: usize = 8 + 32 + 4 + 1 + 8;

    pub fn space(pool_count: usize) -> usize {
        Self::BASE_SPACE + pool_count * BYTES_PER_POOL_ID
    }

    /// Account size needed to record membership in `pool_id`; unchanged
    /// when the pool is already indexed.
    pub fn space_with(&self, pool_id: u64) -> usize {
        let added = usize::from(!self.pool_ids.contains(&pool_id));
        Self::space(self.pool_ids.len() + added)
    }
}
