use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Caller is not the lottery admin")]
    Unauthorized,
    #[msg("No tickets available in this round")]
    SoldOut,
    #[msg("Attached payment does not cover the ticket cost")]
    InsufficientPayment,
    #[msg("Requested more tickets than are available")]
    Underflow,
    #[msg("The round still has tickets for sale")]
    RoundNotFinished,
    #[msg("Tickets have already been sold this round")]
    RoundInProgress,
    #[msg("Winning ticket index has no recorded owner")]
    NoSuchPlayer,
    #[msg("Max tickets must be between 1 and the account capacity")]
    InvalidCapacity,
    #[msg("Operation not allowed")]
    OperationNotAllowed,
    #[msg("Ticket count must be positive")]
    InvalidTicketCount,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Winner account does not match the drawn ticket owner")]
    WinnerAccountMismatch,
}
