//! Price view
//!
//! Read-only instruction returning the pool's implied probabilities through
//! return data. Clients can equally compute them from the market account.

use anchor_lang::prelude::*;

use crate::amm::Prices;
use crate::state::Market;

#[derive(Accounts)]
pub struct GetPrices<'info> {
    pub market: Account<'info, Market>,
}

impl<'info> GetPrices<'info> {
    pub fn get_prices(&self) -> Result<Prices> {
        self.market.prices()
    }
}
