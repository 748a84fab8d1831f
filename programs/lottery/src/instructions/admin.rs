use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::events::{LotteryInitialized, MaxTicketsChanged, TicketCostChanged};
use crate::state::Lottery;

/// Accounts required to deploy the lottery.
/// Creates the state account and derives the vault that will hold ticket payments.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Lottery state account.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System-owned PDA holding the pot, funded here with its rent-exempt
    /// minimum so it never drops below it.
    #[account(
        mut,
        seeds = [VAULT_SEED, lottery.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts for the admin-only reconfiguration instructions.
#[derive(Accounts)]
pub struct ChangeConfig<'info> {
    /// Must match `lottery.admin`; checked in the handler so a stranger gets
    /// `Unauthorized` instead of a constraint error.
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Initializes the lottery with its admin and, optionally, a non-default
/// price and round capacity.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `admin` - Key allowed to end rounds and change configuration
/// * `ticket_cost` - Price per ticket in lamports, `DEFAULT_TICKET_COST` if absent
/// * `max_tickets` - Tickets per round, `DEFAULT_MAX_TICKETS` if absent
pub fn process_initialize(
    ctx: Context<Initialize>,
    admin: Pubkey,
    ticket_cost: Option<u64>,
    max_tickets: Option<u64>,
) -> Result<()> {
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let shortfall = rent_reserve.saturating_sub(ctx.accounts.vault.to_account_info().lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            shortfall,
        )?;
        msg!("Vault funded with {} lamports for rent", shortfall);
    }

    let lottery = &mut ctx.accounts.lottery;
    lottery.bump = ctx.bumps.lottery;
    lottery.vault_bump = ctx.bumps.vault;
    lottery.init(
        admin,
        ticket_cost.unwrap_or(DEFAULT_TICKET_COST),
        max_tickets.unwrap_or(DEFAULT_MAX_TICKETS),
    )?;

    msg!(
        "Lottery initialized: admin {}, ticket cost {}, max tickets {}",
        lottery.admin,
        lottery.ticket_cost,
        lottery.max_tickets
    );
    emit!(LotteryInitialized {
        admin: lottery.admin,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
    });

    Ok(())
}

pub fn process_change_ticket_cost(ctx: Context<ChangeConfig>, new_cost: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let old_cost = ctx.accounts.lottery.change_ticket_cost(&admin, new_cost)?;

    msg!("Ticket cost: {} -> {}", old_cost, new_cost);
    emit!(TicketCostChanged { old_cost, new_cost });

    Ok(())
}

pub fn process_change_max_tickets(ctx: Context<ChangeConfig>, new_max: u64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let old_max = ctx.accounts.lottery.change_max_tickets(&admin, new_max)?;

    msg!("Max tickets: {} -> {}", old_max, new_max);
    emit!(MaxTicketsChanged { old_max, new_max });

    Ok(())
}
