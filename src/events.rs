//! Events for the Dutch auction contracts (CES compliant)

use odra::casper_types::U256;
use odra::prelude::*;

// ============ NFT REGISTRY EVENTS ============

/// Emitted when a new token id is minted
#[odra::event]
pub struct Minted {
    pub to: Address,
    pub token_id: u64,
}

/// Emitted when a spender is approved for a token id
#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub token_id: u64,
}

/// Emitted when token ownership changes
#[odra::event]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub token_id: u64,
}

// ============ AUCTION EVENTS ============

/// Emitted when a bid settles the auction
#[odra::event]
pub struct BidAccepted {
    pub bidder: Address,
    pub seller: Address,
    pub token_id: u64,
    pub price: U256,
}

/// Emitted when a V2 contract takes over a prior auction's state
#[odra::event]
pub struct AuctionMigrated {
    pub prior_auction: Address,
    pub owner: Address,
    pub version: u64,
}
