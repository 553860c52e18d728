//! Test utilities and helpers for the Dutch auction tests

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;

use nft_dutch_auction::dutch_auction::{DutchAuction, DutchAuctionInitArgs};
use nft_dutch_auction::nft::BasicNft;
use nft_dutch_auction::payment_token::PaymentToken;
use nft_dutch_auction::{BasicNftHostRef, DutchAuctionHostRef, PaymentTokenHostRef};

/// Constants for testing: one NFT listed at 2000, decaying to a 1000 reserve
pub const AUCTION_TOKEN_ID: u64 = 1;
pub const RESERVE_PRICE: u64 = 1000;
pub const NUM_DECAY_STEPS: u64 = 10;
pub const PRICE_DECREMENT: u64 = 100;
pub const INITIAL_PRICE: u64 = RESERVE_PRICE + NUM_DECAY_STEPS * PRICE_DECREMENT; // 2000
pub const BIDDER_FUNDS: u64 = 2000;

/// Simulated block interval; 15 of these stand in for 15 mined blocks
pub const BLOCK_TIME_MS: u64 = 1000;
pub use nft_dutch_auction::dutch_auction::DECAY_INTERVAL_MS;

/// Deploy the full fixture: NFT minted to the seller, payment token funded
/// to the bidder, auction deployed by the seller and approved for the NFT.
///
/// Returns `(env, auction, nft, token, seller, bidder)`. The env's caller is
/// left as the seller.
pub fn setup() -> (
    HostEnv,
    DutchAuctionHostRef,
    BasicNftHostRef,
    PaymentTokenHostRef,
    Address,
    Address,
) {
    let env = odra_test::env();

    let seller = env.get_account(0);
    let bidder = env.get_account(1);

    // Seller deploys the registry and mints the lot to themselves
    env.set_caller(seller);
    let mut nft = BasicNft::deploy(&env, NoArgs);
    nft.mint(seller, AUCTION_TOKEN_ID);

    // Bidder deploys the settlement token and mints their own funds
    env.set_caller(bidder);
    let mut token = PaymentToken::deploy(&env, NoArgs);
    token.mint(bidder, U256::from(BIDDER_FUNDS));

    // Seller deploys the auction and approves it for the NFT
    env.set_caller(seller);
    let auction = DutchAuction::deploy(
        &env,
        DutchAuctionInitArgs {
            payment_token: token.address(),
            nft_contract: nft.address(),
            token_id: AUCTION_TOKEN_ID,
            reserve_price: U256::from(RESERVE_PRICE),
            num_decay_steps: NUM_DECAY_STEPS,
            price_decrement: U256::from(PRICE_DECREMENT),
        },
    );
    nft.approve(auction.address(), AUCTION_TOKEN_ID);

    (env, auction, nft, token, seller, bidder)
}
