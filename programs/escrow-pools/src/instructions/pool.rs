//! Pool lifecycle instructions: creation and organizer settings.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use pool_ledger::sanitize_vault_symbol;
use crate::state::{Config, CreatorIndex, Pool, MAX_NAME_CHARS};
use crate::error::EscrowError;
use crate::events::{OverflowRecipientSet, PoolCreated};

/// One-time index account per creator. Created before the first pool so
/// `create_pool` can grow it with realloc.
#[derive(Accounts)]
pub struct InitializeCreatorIndex<'info> {
    #[account(
        init,
        payer = creator,
        space = CreatorIndex::space(0),
        seeds = [b"creator-index", creator.key().as_ref()],
        bump
    )]
    pub creator_index: Account<'info, CreatorIndex>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_creator_index(ctx: Context<InitializeCreatorIndex>) -> Result<()> {
    let index = &mut ctx.accounts.creator_index;
    index.authority = ctx.accounts.creator.key();
    index.pool_ids = Vec::new();
    index.bump = ctx.bumps.creator_index;
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreatePoolParams {
    pub asset_kind: Pubkey,
    pub dues_per_entry: u64,
    pub deadline: i64,
    pub display_name: String,
    pub capacity: u32,
    pub overflow_recipient: Option<Pubkey>,
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        realloc = Config::space(
            config.authorized_creators.len(),
            config.open_pools.len() + 1,
        ),
        realloc::payer = creator,
        realloc::zero = false
    )]
    pub config: Account<'info, Config>,

    /// Created at base size; grows via realloc as participants join
    #[account(
        init,
        payer = creator,
        space = Pool::space(0),
        seeds = [b"pool", config.next_pool_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// Custody vault, owned by the pool PDA
    #[account(
        init,
        payer = creator,
        seeds = [b"vault", config.next_pool_id.to_le_bytes().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    pub asset_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [b"creator-index", creator.key().as_ref()],
        bump = creator_index.bump,
        realloc = CreatorIndex::space(creator_index.pool_ids.len() + 1),
        realloc::payer = creator,
        realloc::zero = false
    )]
    pub creator_index: Account<'info, CreatorIndex>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_pool(ctx: Context<CreatePool>, params: CreatePoolParams) -> Result<()> {
    let CreatePoolParams {
        asset_kind,
        dues_per_entry,
        deadline,
        display_name,
        capacity,
        overflow_recipient,
    } = params;

    let config = &mut ctx.accounts.config;
    let creator = ctx.accounts.creator.key();

    require!(config.is_authorized(&creator), EscrowError::NotAuthorized);

    require!(asset_kind != Pubkey::default(), EscrowError::InvalidAsset);
    require!(
        asset_kind == ctx.accounts.asset_mint.key(),
        EscrowError::InvalidAsset
    );

    require!(dues_per_entry >= config.minimum_dues, EscrowError::InvalidDues);

    require!(!display_name.is_empty(), EscrowError::EmptyName);
    require!(
        display_name.chars().count() <= MAX_NAME_CHARS,
        EscrowError::NameTooLong
    );

    let now = Clock::get()?.unix_timestamp;
    require!(
        deadline >= now + config.minimum_duration,
        EscrowError::DeadlineTooSoon
    );

    require!(
        capacity >= 1 && capacity <= config.capacity_cap,
        EscrowError::InvalidCapacity
    );

    if let Some(recipient) = overflow_recipient {
        require!(recipient != Pubkey::default(), EscrowError::InvalidPrincipal);
    }

    let pool = &mut ctx.accounts.pool;
    let pool_id = config.next_pool_id;

    pool.id = pool_id;
    pool.organizer = creator;
    pool.asset_mint = ctx.accounts.asset_mint.key();
    pool.vault = ctx.accounts.vault.key();
    pool.vault_symbol = sanitize_vault_symbol(&display_name);
    pool.display_name = display_name;
    pool.dues_per_entry = dues_per_entry;
    pool.deadline = deadline;
    pool.capacity = capacity;
    pool.total_entries = 0;
    pool.participants = Vec::new();
    pool.overflow_recipient = overflow_recipient;
    pool.payout_complete = false;
    pool.open_index = config.open_pools.len() as u32;
    pool.bump = ctx.bumps.pool;

    config.open_pools.push(pool_id);
    config.next_pool_id = config
        .next_pool_id
        .checked_add(1)
        .ok_or(EscrowError::Overflow)?;

    ctx.accounts.creator_index.pool_ids.push(pool_id);

    emit!(PoolCreated {
        pool_id,
        organizer: pool.organizer,
        vault: pool.vault,
        asset_mint: pool.asset_mint,
        dues_per_entry,
        deadline,
    });
    msg!(
        "Pool #{} created by {}, dues = {}, deadline = {}",
        pool_id,
        pool.organizer,
        dues_per_entry,
        deadline
    );

    Ok(())
}

#[derive(Accounts)]
pub struct SetOverflowRecipient<'info> {
    #[account(
        mut,
        seeds = [b"pool", pool.id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = organizer @ EscrowError::NotOrganizer
    )]
    pub pool: Account<'info, Pool>,

    pub organizer: Signer<'info>,
}

pub fn set_overflow_recipient(
    ctx: Context<SetOverflowRecipient>,
    recipient: Pubkey,
) -> Result<()> {
    require!(recipient != Pubkey::default(), EscrowError::InvalidPrincipal);

    let pool = &mut ctx.accounts.pool;
    require!(!pool.payout_complete, EscrowError::AlreadyComplete);

    pool.overflow_recipient = Some(recipient);

    emit!(OverflowRecipientSet { pool_id: pool.id, recipient });
    msg!("Pool #{} overflow recipient set to {}", pool.id, recipient);
    Ok(())
}
