//! NFT Dutch auction for Casper Network
//!
//! This crate provides a fixed-lot Dutch auction where:
//! - A seller lists a single NFT at a price that decays over time
//! - Bids are settled in a CEP-18 payment token via allowance
//! - The first sufficient bid wins atomically and closes the auction
//! - The auction can be upgraded by migrating its state to a V2 contract
//!   that adds an owner guard and a version marker

#![no_std]

extern crate alloc;

pub mod dutch_auction;
pub mod dutch_auction_v2;
pub mod errors;
pub mod events;
pub mod nft;
pub mod payment_token;

// Re-export main types for external use
pub use dutch_auction::DutchAuction;
pub use dutch_auction_v2::DutchAuctionV2;
pub use errors::*;
pub use events::*;
pub use nft::BasicNft;
pub use payment_token::PaymentToken;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use dutch_auction::{DutchAuctionHostRef, DutchAuctionInitArgs};
#[cfg(not(target_arch = "wasm32"))]
pub use dutch_auction_v2::{DutchAuctionV2HostRef, DutchAuctionV2InitArgs};
#[cfg(not(target_arch = "wasm32"))]
pub use nft::BasicNftHostRef;
#[cfg(not(target_arch = "wasm32"))]
pub use payment_token::PaymentTokenHostRef;
