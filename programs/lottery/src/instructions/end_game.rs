use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::events::GameEnded;
use crate::state::{pot_balance, Lottery};

/// Accounts required to close a round.
///
/// This ensures that:
/// 1. Only the lottery admin can draw.
/// 2. The pot is paid straight to the owner of the winning ticket.
#[derive(Accounts)]
pub struct EndGame<'info> {
    /// Must match `lottery.admin`.
    pub admin: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Vault holding the pot.
    #[account(
        mut,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump = lottery.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// Receives the pot. Checked against the drawn owner in the handler.
    #[account(mut)]
    pub winner: SystemAccount<'info>,

    /// System program for lamports transfers.
    pub system_program: Program<'info, System>,
}

pub fn process_end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let balance = pot_balance(ctx.accounts.vault.to_account_info().lamports(), rent_reserve);
    let draw = ctx
        .accounts
        .lottery
        .end_game(&admin, random_seed, balance)?;

    draw.check_recipient(&ctx.accounts.winner.key())?;

    msg!("Random seed: {}", random_seed);
    msg!("Winning ticket: {}", draw.ticket_id);
    msg!("Winner: {}", draw.winner);

    if draw.payout > 0 {
        let lottery_key = ctx.accounts.lottery.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            VAULT_SEED,
            lottery_key.as_ref(),
            &[ctx.accounts.lottery.vault_bump],
        ]];

        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.winner.to_account_info(),
                },
                signer_seeds,
            ),
            draw.payout,
        )?;
    }

    msg!("Paid {} lamports, round reset", draw.payout);
    emit!(GameEnded {
        winner: draw.winner,
        winning_ticket: draw.ticket_id,
        random_seed,
        payout: draw.payout,
    });

    Ok(())
}
