//! Post-deadline payout reconciliation.
//!
//! Payout marks the pool settled and removes it from the open index before
//! any tokens move. Amounts are reconciled against measured vault balances,
//! never against declared figures, and anything left over after the exact
//! plan goes to the overflow recipient.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use pool_ledger::{check_liquidity, confirm_withdrawal, swap_remove_open, validate_plan};
use crate::state::{Config, Pool};
use crate::error::{ledger_err, EscrowError};
use crate::events::WinningsDistributed;

#[derive(Accounts)]
pub struct DistributeWinnings<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [b"pool", pool.id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = organizer @ EscrowError::NotOrganizer
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [b"vault", pool.id.to_le_bytes().as_ref()],
        bump,
        token::mint = pool.asset_mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Receives whatever the vault holds beyond the exact plan total
    #[account(
        mut,
        token::mint = pool.asset_mint
    )]
    pub overflow_token_account: Account<'info, TokenAccount>,

    /// The pool displaced by swap-remove in the open index. Required
    /// unless the settling pool sits at the tail of the index.
    #[account(mut)]
    pub moved_pool: Option<Account<'info, Pool>>,

    #[account(mut)]
    pub organizer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    // remaining_accounts: winner token accounts, one per plan entry, in order
}

pub fn distribute_winnings<'info>(
    ctx: Context<'_, '_, '_, 'info, DistributeWinnings<'info>>,
    winners: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let pool = &mut ctx.accounts.pool;
    let vault = &mut ctx.accounts.vault;

    let now = Clock::get()?.unix_timestamp;
    require!(now >= pool.deadline, EscrowError::NotEnded);
    require!(!pool.payout_complete, EscrowError::AlreadyComplete);

    let total_payout = validate_plan(
        &winners,
        &amounts,
        &pool.participants,
        config.max_recipients as usize,
    )
    .map_err(ledger_err)?;

    vault.reload()?;
    let max_withdrawable = vault.amount;

    let overflow_to = pool.overflow_to();
    require!(
        ctx.accounts.overflow_token_account.owner == overflow_to,
        EscrowError::InvalidOverflowAccount
    );

    // Settle before any tokens move
    pool.payout_complete = true;
    let removal =
        swap_remove_open(&mut config.open_pools, pool.open_index, pool.id).map_err(ledger_err)?;
    if let Some(moved_id) = removal.moved_id {
        let moved = ctx
            .accounts
            .moved_pool
            .as_mut()
            .ok_or(EscrowError::MovedPoolRequired)?;
        require!(moved.id == moved_id, EscrowError::StaleOpenIndex);
        moved.open_index = removal.position;
    }

    let pool_id = pool.id;
    let id_bytes = pool_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[b"pool", id_bytes.as_ref(), &[pool.bump]]];

    if winners.is_empty() {
        // Close-out: the whole measured balance is overflow
        emit!(WinningsDistributed {
            pool_id,
            winners,
            amounts,
            overflow_to,
            overflow_amount: max_withdrawable,
        });
        msg!("Pool #{}: no winners, {} routed to {}", pool_id, max_withdrawable, overflow_to);

        if max_withdrawable > 0 {
            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: vault.to_account_info(),
                        to: ctx.accounts.overflow_token_account.to_account_info(),
                        authority: pool.to_account_info(),
                    },
                    signer_seeds,
                ),
                max_withdrawable,
            )?;
        }
        return Ok(());
    }

    check_liquidity(total_payout, max_withdrawable).map_err(ledger_err)?;

    require!(
        ctx.remaining_accounts.len() == winners.len(),
        EscrowError::InvalidWinnerAccount
    );

    for (i, winner_account) in ctx.remaining_accounts.iter().enumerate() {
        {
            let data = winner_account.try_borrow_data()?;
            let token_account = TokenAccount::try_deserialize(&mut &data[..])
                .map_err(|_| EscrowError::InvalidWinnerAccount)?;
            require!(
                token_account.mint == pool.asset_mint && token_account.owner == winners[i],
                EscrowError::InvalidWinnerAccount
            );
        }

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: vault.to_account_info(),
                    to: winner_account.clone(),
                    authority: pool.to_account_info(),
                },
                signer_seeds,
            ),
            amounts[i],
        )?;
    }

    // Reconcile against the measured remainder, not the plan's arithmetic
    vault.reload()?;
    let withdrawn = total_payout
        .checked_add(vault.amount)
        .ok_or(EscrowError::Overflow)?;
    let settlement = confirm_withdrawal(withdrawn, total_payout).map_err(ledger_err)?;

    if settlement.overflow > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: vault.to_account_info(),
                    to: ctx.accounts.overflow_token_account.to_account_info(),
                    authority: pool.to_account_info(),
                },
                signer_seeds,
            ),
            settlement.overflow,
        )?;
    }

    msg!(
        "Pool #{}: paid {} to {} winners, overflow {} to {}",
        pool_id,
        settlement.total_payout,
        winners.len(),
        settlement.overflow,
        overflow_to
    );
    emit!(WinningsDistributed {
        pool_id,
        winners,
        amounts,
        overflow_to,
        overflow_amount: settlement.overflow,
    });

    Ok(())
}
