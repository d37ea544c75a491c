//! Admin instructions

use anchor_lang::prelude::*;
use crate::state::Config;
use crate::error::EscrowError;
use crate::events::{CreatorAuthorized, CreatorRevoked, MaxEntriesPerUserUpdated};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeConfigParams {
    pub minimum_dues: u64,
    pub minimum_duration: i64,
    pub capacity_cap: u32,
    pub max_recipients: u16,
    pub max_entries_per_user: u32,
}

/// Initialize global config
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = owner,
        space = Config::space(0, 0),
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    params: InitializeConfigParams,
) -> Result<()> {
    let InitializeConfigParams {
        minimum_dues,
        minimum_duration,
        capacity_cap,
        max_recipients,
        max_entries_per_user,
    } = params;

    require!(max_entries_per_user > 0, EscrowError::InvalidMax);
    require!(capacity_cap >= 1, EscrowError::InvalidCapacity);
    require!(minimum_duration > 0, EscrowError::InvalidConfig);
    require!(max_recipients >= 1, EscrowError::InvalidConfig);

    let config = &mut ctx.accounts.config;

    config.owner = ctx.accounts.owner.key();
    config.minimum_dues = minimum_dues;
    config.minimum_duration = minimum_duration;
    config.capacity_cap = capacity_cap;
    config.max_recipients = max_recipients;
    config.max_entries_per_user = max_entries_per_user;
    config.next_pool_id = 0;
    config.authorized_creators = Vec::new();
    config.open_pools = Vec::new();
    config.bump = ctx.bumps.config;

    msg!(
        "Config initialized by {}, minimum dues = {}, capacity cap = {}",
        config.owner,
        config.minimum_dues,
        config.capacity_cap
    );

    Ok(())
}

/// Owner-only config and whitelist maintenance
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = owner @ EscrowError::NotAuthorized
    )]
    pub config: Account<'info, Config>,

    pub owner: Signer<'info>,
}

pub fn set_max_entries_per_user(ctx: Context<UpdateConfig>, new_max: u32) -> Result<()> {
    require!(new_max > 0, EscrowError::InvalidMax);

    let config = &mut ctx.accounts.config;
    config.max_entries_per_user = new_max;

    emit!(MaxEntriesPerUserUpdated { new_max });
    msg!("Max entries per user set to {}", new_max);
    Ok(())
}

/// Grow the creator whitelist. The config account reallocs by one entry.
#[derive(Accounts)]
pub struct AuthorizeCreator<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = owner @ EscrowError::NotAuthorized,
        realloc = Config::space(
            config.authorized_creators.len() + 1,
            config.open_pools.len(),
        ),
        realloc::payer = owner,
        realloc::zero = false
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn authorize_creator(ctx: Context<AuthorizeCreator>, principal: Pubkey) -> Result<()> {
    require!(principal != Pubkey::default(), EscrowError::InvalidPrincipal);

    let config = &mut ctx.accounts.config;
    require!(!config.is_authorized(&principal), EscrowError::AlreadyAuthorized);

    config.authorized_creators.push(principal);

    emit!(CreatorAuthorized { principal });
    msg!("Creator authorized: {}", principal);
    Ok(())
}

pub fn revoke_creator(ctx: Context<UpdateConfig>, principal: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;

    let position = config
        .authorized_creators
        .iter()
        .position(|c| *c == principal)
        .ok_or(EscrowError::CreatorNotFound)?;

    config.authorized_creators.remove(position);

    emit!(CreatorRevoked { principal });
    msg!("Creator revoked: {}", principal);
    Ok(())
}
