use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::events::TicketPurchased;
use crate::state::Lottery;

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the tickets. Recorded as the ticket owner.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Lottery state account tracking the current round.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Vault receiving the payment.
    #[account(
        mut,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump = lottery.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Buys `ticket_count` tickets for the caller.
///
/// Steps performed:
/// 1. Record the sale in the lottery state (all checks happen here).
/// 2. Transfer `payment` lamports from the buyer into the vault.
/// 3. Send anything above the ticket cost back to the buyer.
///
/// # Arguments
/// * `ctx` - Context containing BuyTicket accounts
/// * `ticket_count` - Number of tickets paid for
/// * `payment` - Lamports attached by the buyer
pub fn process_buy_ticket(ctx: Context<BuyTicket>, ticket_count: u64, payment: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let sale = ctx
        .accounts
        .lottery
        .buy_ticket(buyer, ticket_count, payment)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        payment,
    )?;

    if sale.refund > 0 {
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
                    to: ctx.accounts.buyer.to_account_info(),
                },
                signer_seeds,
            ),
            sale.refund,
        )?;
        msg!("Refunded {} lamports", sale.refund);
    }

    let lottery = &ctx.accounts.lottery;
    msg!(
        "Ticket #{} sold to {} ({} tickets), {} left",
        sale.ticket_id,
        buyer,
        ticket_count,
        lottery.tickets_available
    );
    emit!(TicketPurchased {
        buyer,
        ticket_id: sale.ticket_id,
        ticket_count,
        cost: sale.cost,
        refund: sale.refund,
        tickets_available: lottery.tickets_available,
    });

    Ok(())
}
