use anchor_lang::prelude::*;

use crate::constants::MAX_TICKETS_CAP;
use crate::error::LotteryError;

/// One sale recorded in the current round.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerEntry {
    /// Position of the sale in the round, starting at 0 with no gaps.
    pub ticket_id: u64,

    /// The buyer.
    pub owner: Pubkey,

    /// Capacity slots this sale consumed. A single entry is written per
    /// purchase regardless of how many tickets it paid for.
    pub tickets: u64,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Bump of the vault PDA that holds the pooled lamports.
    pub vault_bump: u8,

    /// The only key allowed to end a round or change pricing. Set once at init.
    pub admin: Pubkey,

    /// Price of a single ticket in lamports.
    pub ticket_cost: u64,

    /// Tickets left for sale in the current round.
    pub tickets_available: u64,

    /// Capacity of a round. Always in `1..=MAX_TICKETS_CAP`.
    pub max_tickets: u64,

    /// Key the next sale will be recorded under.
    pub next_ticket_id: u64,

    /// Sales of the current round, in sale order.
    #[max_len(MAX_TICKETS_CAP)]
    pub players: Vec<PlayerEntry>,
}

/// Outcome of a successful purchase, returned to the instruction handler so it
/// can move the lamports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketSale {
    pub ticket_id: u64,
    pub cost: u64,
    pub refund: u64,
}

/// Outcome of a successful draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winner: Pubkey,
    pub ticket_id: u64,
    pub payout: u64,
}

impl Draw {
    /// The account handed in to receive the payout must be the drawn owner.
    pub fn check_recipient(&self, recipient: &Pubkey) -> Result<()> {
        require_keys_eq!(*recipient, self.winner, LotteryError::WinnerAccountMismatch);
        Ok(())
    }
}

/// Lamports in the vault that belong to the pot. `rent_reserve` stays behind
/// so the vault remains rent-exempt between rounds.
pub fn pot_balance(vault_lamports: u64, rent_reserve: u64) -> u64 {
    vault_lamports.saturating_sub(rent_reserve)
}

pub fn validate_max_tickets(max_tickets: u64) -> Result<()> {
    require!(
        max_tickets > 0 && max_tickets <= MAX_TICKETS_CAP,
        LotteryError::InvalidCapacity
    );
    Ok(())
}

impl Lottery {
    /// Resets every lottery field for a fresh deployment. PDA bumps are left
    /// to the caller.
    pub fn init(&mut self, admin: Pubkey, ticket_cost: u64, max_tickets: u64) -> Result<()> {
        validate_max_tickets(max_tickets)?;

        self.admin = admin;
        self.ticket_cost = ticket_cost;
        self.max_tickets = max_tickets;
        self.tickets_available = max_tickets;
        self.next_ticket_id = 0;
        self.players = Vec::new();
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.tickets_available > 0
    }

    pub fn is_drawable(&self) -> bool {
        self.tickets_available == 0
    }

    /// True while nothing has been sold in the current round.
    pub fn is_untouched(&self) -> bool {
        self.tickets_available == self.max_tickets
    }

    /// Capacity slots sold so far this round.
    pub fn tickets_sold(&self) -> u64 {
        self.players.iter().map(|p| p.tickets).sum()
    }

    /// Owner recorded under `ticket_id`, if that index was populated.
    pub fn player(&self, ticket_id: u64) -> Option<&PlayerEntry> {
        self.players.iter().find(|p| p.ticket_id == ticket_id)
    }

    fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, LotteryError::Unauthorized);
        Ok(())
    }

    /// Sells `ticket_count` tickets to `buyer` who attached `payment` lamports.
    ///
    /// Records exactly one player entry per call; `ticket_count` only drives
    /// the price and the capacity decrement.
    pub fn buy_ticket(&mut self, buyer: Pubkey, ticket_count: u64, payment: u64) -> Result<TicketSale> {
        require!(self.is_open(), LotteryError::SoldOut);
        require!(ticket_count > 0, LotteryError::InvalidTicketCount);

        let cost = self
            .ticket_cost
            .checked_mul(ticket_count)
            .ok_or(LotteryError::MathOverflow)?;
        require!(payment >= cost, LotteryError::InsufficientPayment);

        let remaining = self
            .tickets_available
            .checked_sub(ticket_count)
            .ok_or(LotteryError::Underflow)?;

        let ticket_id = self.next_ticket_id;
        self.players.push(PlayerEntry {
            ticket_id,
            owner: buyer,
            tickets: ticket_count,
        });
        self.next_ticket_id += 1;
        self.tickets_available = remaining;

        Ok(TicketSale {
            ticket_id,
            cost,
            refund: payment - cost,
        })
    }

    /// Picks `players[random_seed % max_tickets]`, hands it the whole
    /// `balance`, and opens the next round.
    pub fn end_game(&mut self, caller: &Pubkey, random_seed: u64, balance: u64) -> Result<Draw> {
        self.require_admin(caller)?;
        require!(self.is_drawable(), LotteryError::RoundNotFinished);

        let ticket_id = self.winning_ticket(random_seed)?;
        let winner = self
            .player(ticket_id)
            .map(|p| p.owner)
            .ok_or(LotteryError::NoSuchPlayer)?;

        self.players.clear();
        self.next_ticket_id = 0;
        self.tickets_available = self.max_tickets;

        Ok(Draw {
            winner,
            ticket_id,
            payout: balance,
        })
    }

    fn winning_ticket(&self, random_seed: u64) -> Result<u64> {
        random_seed
            .checked_rem(self.max_tickets)
            .ok_or_else(|| error!(LotteryError::InvalidCapacity))
    }

    /// Returns the previous cost.
    pub fn change_ticket_cost(&mut self, caller: &Pubkey, new_cost: u64) -> Result<u64> {
        self.require_admin(caller)?;
        require!(self.is_untouched(), LotteryError::RoundInProgress);

        Ok(std::mem::replace(&mut self.ticket_cost, new_cost))
    }

    /// Returns the previous capacity. The round is untouched, so the new
    /// capacity is also the number of tickets available.
    pub fn change_max_tickets(&mut self, caller: &Pubkey, new_max: u64) -> Result<u64> {
        self.require_admin(caller)?;
        require!(self.is_untouched(), LotteryError::RoundInProgress);
        validate_max_tickets(new_max)?;

        let old_max = std::mem::replace(&mut self.max_tickets, new_max);
        self.tickets_available = new_max;
        Ok(old_max)
    }
}
