use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    // Time windows
    #[msg("Close time must be in the future and no later than resolve-after")]
    InvalidTime,
    #[msg("Market is closed to new activity")]
    MarketClosed,

    // Lifecycle state
    #[msg("Market has already been resolved")]
    MarketAlreadyResolved,
    #[msg("Market has not been resolved yet")]
    MarketNotResolved,

    // Parameters
    #[msg("Invalid parameters")]
    InvalidParams,
    #[msg("Question exceeds maximum length")]
    QuestionTooLong,
    #[msg("Collateral mint precision is not supported")]
    InvalidDecimals,

    // Balances
    #[msg("Claim balance too low")]
    InsufficientBalance,
    #[msg("Market collateral cannot cover this payout")]
    InsufficientCollateral,

    // Trading
    #[msg("Slippage tolerance exceeded")]
    Slippage,
    #[msg("Trade is too small to produce any output")]
    ZeroOutput,

    // External collaborators
    #[msg("Collateral transfer did not deliver the requested amount")]
    TransferFailed,
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("Protocol is paused")]
    ProtocolPaused,
    #[msg("Position does not belong to this market and holder")]
    PositionMismatch,

    #[msg("Arithmetic overflow")]
    Overflow,
}
