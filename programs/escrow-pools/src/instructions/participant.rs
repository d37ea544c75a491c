//! Participant instructions: joining pools and voluntary top-ups.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use pool_ledger::check_join;
use crate::state::{Config, EntryRecord, MemberIndex, Pool};
use crate::error::{ledger_err, EscrowError};
use crate::events::{EntryJoined, PoolFunded};

/// One-time index account per participant, grown via realloc on each
/// first join of a new pool.
#[derive(Accounts)]
pub struct InitializeMemberIndex<'info> {
    #[account(
        init,
        payer = member,
        space = MemberIndex::space(0),
        seeds = [b"member-index", member.key().as_ref()],
        bump
    )]
    pub member_index: Account<'info, MemberIndex>,

    #[account(mut)]
    pub member: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_member_index(ctx: Context<InitializeMemberIndex>) -> Result<()> {
    let index = &mut ctx.accounts.member_index;
    index.authority = ctx.accounts.member.key();
    index.pool_ids = Vec::new();
    index.bump = ctx.bumps.member_index;
    Ok(())
}

#[derive(Accounts)]
pub struct JoinPool<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", pool.id.to_le_bytes().as_ref()],
        bump = pool.bump,
        realloc = pool.space_after_join(&participant.key()),
        realloc::payer = participant,
        realloc::zero = false
    )]
    pub pool: Account<'info, Pool>,

    /// Per-participant entry tally. Created on first join, reused after.
    #[account(
        init_if_needed,
        payer = participant,
        space = EntryRecord::LEN,
        seeds = [b"entry", pool.key().as_ref(), participant.key().as_ref()],
        bump
    )]
    pub entry: Account<'info, EntryRecord>,

    #[account(
        mut,
        seeds = [b"member-index", participant.key().as_ref()],
        bump = member_index.bump,
        realloc = member_index.space_with(pool.id),
        realloc::payer = participant,
        realloc::zero = false
    )]
    pub member_index: Account<'info, MemberIndex>,

    #[account(
        mut,
        token::mint = pool.asset_mint
    )]
    pub participant_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"vault", pool.id.to_le_bytes().as_ref()],
        bump,
        token::mint = pool.asset_mint
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn join_pool(ctx: Context<JoinPool>, num_entries: u32) -> Result<()> {
    require!(num_entries > 0, EscrowError::InvalidAmount);

    let config = &ctx.accounts.config;
    let pool = &mut ctx.accounts.pool;
    let entry = &mut ctx.accounts.entry;

    let now = Clock::get()?.unix_timestamp;
    require!(now <= pool.deadline, EscrowError::EscrowEnded);
    require!(!pool.payout_complete, EscrowError::AlreadyComplete);

    let outcome = check_join(
        pool.dues_per_entry,
        num_entries,
        entry.entries,
        pool.total_entries,
        pool.capacity,
        config.max_entries_per_user,
    )
    .map_err(ledger_err)?;

    if outcome.first_join {
        entry.pool = pool.key();
        entry.participant = ctx.accounts.participant.key();
        entry.joined_at = now;
        entry.bump = ctx.bumps.entry;
        pool.participants.push(ctx.accounts.participant.key());
        ctx.accounts.member_index.pool_ids.push(pool.id);
    }
    entry.entries = outcome.user_entries;
    pool.total_entries = outcome.pool_entries;

    // Dues move last, after all state is written
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.participant_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.participant.to_account_info(),
            },
        ),
        outcome.total_dues,
    )?;

    emit!(EntryJoined {
        pool_id: pool.id,
        participant: ctx.accounts.participant.key(),
        num_entries,
    });
    msg!(
        "Pool #{}: {} joined with {} entries, dues = {}",
        pool.id,
        ctx.accounts.participant.key(),
        num_entries,
        outcome.total_dues
    );

    Ok(())
}

/// Anyone may top up a pool's vault without buying entries. Accepted
/// before and after the deadline, up to payout.
#[derive(Accounts)]
pub struct AddToPool<'info> {
    #[account(
        seeds = [b"pool", pool.id.to_le_bytes().as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(
        mut,
        token::mint = pool.asset_mint
    )]
    pub contributor_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"vault", pool.id.to_le_bytes().as_ref()],
        bump,
        token::mint = pool.asset_mint
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn add_to_pool(ctx: Context<AddToPool>, amount: u64) -> Result<()> {
    require!(amount > 0, EscrowError::InvalidAmount);

    let pool = &ctx.accounts.pool;
    require!(!pool.payout_complete, EscrowError::AlreadyComplete);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.contributor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.contributor.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(PoolFunded {
        pool_id: pool.id,
        contributor: ctx.accounts.contributor.key(),
        amount,
    });
    msg!("Pool #{}: {} added {}", pool.id, ctx.accounts.contributor.key(), amount);

    Ok(())
}
