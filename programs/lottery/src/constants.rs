use anchor_lang::prelude::*;
use solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the PDA holding the lottery state.
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Seed of the system-owned PDA that custodies ticket payments.
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

/// Ticket price used when `initialize` is called without one.
#[constant]
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;

/// Round capacity used when `initialize` is called without one.
#[constant]
pub const DEFAULT_MAX_TICKETS: u64 = 3;

/// Upper bound on `max_tickets`. The player list is stored inline in the
/// lottery account, so its length has to fit the space allocated at init.
#[constant]
pub const MAX_TICKETS_CAP: u64 = 128;
