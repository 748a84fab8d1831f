#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use error::LotteryError;

declare_id!("8QqoncKeFzRh6kyK3JM3YV1ELVMeUuTg2wtmk3yd9mLz");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        admin: Pubkey,
        ticket_cost: Option<u64>,
        max_tickets: Option<u64>,
    ) -> Result<()> {
        process_initialize(ctx, admin, ticket_cost, max_tickets)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, ticket_count: u64, payment: u64) -> Result<()> {
        process_buy_ticket(ctx, ticket_count, payment)
    }

    pub fn end_game(ctx: Context<EndGame>, random_seed: u64) -> Result<()> {
        process_end_game(ctx, random_seed)
    }

    pub fn change_ticket_cost(ctx: Context<ChangeConfig>, new_cost: u64) -> Result<()> {
        process_change_ticket_cost(ctx, new_cost)
    }

    pub fn change_max_tickets(ctx: Context<ChangeConfig>, new_max: u64) -> Result<()> {
        process_change_max_tickets(ctx, new_max)
    }

    /// Anything that is not one of the instructions above is rejected, so
    /// the program never takes lamports outside `buy_ticket`.
    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        _ix_data: &[u8],
    ) -> Result<()> {
        msg!("Unrecognized instruction");
        err!(LotteryError::OperationNotAllowed)
    }
}
