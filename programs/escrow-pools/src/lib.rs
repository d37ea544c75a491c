//! Escrow Pools - Pay-to-Enter Contest Escrow
//!
//! A Solana program for pay-to-enter contests: authorized organizers open
//! pools denominated in a stable asset, participants buy entries before a
//! deadline, and after the deadline the organizer settles the pool with an
//! exact payout plan reconciled against the custody vault's measured balance.

use anchor_lang::prelude::*;

mod state;
mod instructions;
mod error;
mod events;

use instructions::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Escrow Pools",
    project_url: "https://github.com/escrow-pools/escrow-pools",
    contacts: "email:security@escrowpools.dev",
    policy: "https://github.com/escrow-pools/escrow-pools/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/escrow-pools/escrow-pools"
}

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod escrow_pools {
    use super::*;

    /// Initialize the global config (one-time setup)
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        params: InitializeConfigParams,
    ) -> Result<()> {
        instructions::admin::initialize_config(ctx, params)
    }

    /// Update the per-user entry cap (owner only)
    pub fn set_max_entries_per_user(ctx: Context<UpdateConfig>, new_max: u32) -> Result<()> {
        instructions::admin::set_max_entries_per_user(ctx, new_max)
    }

    /// Add a principal to the creator whitelist (owner only)
    pub fn authorize_creator(ctx: Context<AuthorizeCreator>, principal: Pubkey) -> Result<()> {
        instructions::admin::authorize_creator(ctx, principal)
    }

    /// Remove a principal from the creator whitelist (owner only)
    pub fn revoke_creator(ctx: Context<UpdateConfig>, principal: Pubkey) -> Result<()> {
        instructions::admin::revoke_creator(ctx, principal)
    }

    /// Create the per-creator pool index (once per creator)
    pub fn initialize_creator_index(ctx: Context<InitializeCreatorIndex>) -> Result<()> {
        instructions::pool::initialize_creator_index(ctx)
    }

    /// Open a new escrow pool with its custody vault
    pub fn create_pool(ctx: Context<CreatePool>, params: CreatePoolParams) -> Result<()> {
        instructions::pool::create_pool(ctx, params)
    }

    /// Set or replace the pool's overflow recipient (organizer only)
    pub fn set_overflow_recipient(
        ctx: Context<SetOverflowRecipient>,
        recipient: Pubkey,
    ) -> Result<()> {
        instructions::pool::set_overflow_recipient(ctx, recipient)
    }

    /// Create the per-participant pool index (once per participant)
    pub fn initialize_member_index(ctx: Context<InitializeMemberIndex>) -> Result<()> {
        instructions::participant::initialize_member_index(ctx)
    }

    /// Buy entries in an open pool, paying dues into the vault
    pub fn join_pool(ctx: Context<JoinPool>, num_entries: u32) -> Result<()> {
        instructions::participant::join_pool(ctx, num_entries)
    }

    /// Top up a pool's vault without buying entries
    pub fn add_to_pool(ctx: Context<AddToPool>, amount: u64) -> Result<()> {
        instructions::participant::add_to_pool(ctx, amount)
    }

    /// Settle an ended pool: pay winners exactly, route the rest to overflow
    pub fn distribute_winnings<'info>(
        ctx: Context<'_, '_, '_, 'info, DistributeWinnings<'info>>,
        winners: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::payout::distribute_winnings(ctx, winners, amounts)
    }
}
