//! Events emitted for off-chain indexers. Program logs carry the same
//! information in human-readable form via `msg!`.

use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub admin: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u64,
}

/// Emitted on every successful `buy_ticket`.
#[event]
pub struct TicketPurchased {
    pub buyer: Pubkey,
    /// Key of the player entry created for this sale.
    pub ticket_id: u64,
    pub ticket_count: u64,
    /// Lamports kept by the vault.
    pub cost: u64,
    /// Lamports returned to the buyer.
    pub refund: u64,
    pub tickets_available: u64,
}

#[event]
pub struct GameEnded {
    pub winner: Pubkey,
    pub winning_ticket: u64,
    pub random_seed: u64,
    pub payout: u64,
}

#[event]
pub struct TicketCostChanged {
    pub old_cost: u64,
    pub new_cost: u64,
}

#[event]
pub struct MaxTicketsChanged {
    pub old_max: u64,
    pub new_max: u64,
}
