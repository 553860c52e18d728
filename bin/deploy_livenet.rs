//! Livenet deployment script for the Dutch auction contracts
//!
//! Deploys PaymentToken, BasicNft and DutchAuction to Casper network,
//! mints the auctioned NFT to the deployer and approves the auction
//! contract to move it.

use odra::casper_types::U256;
use odra::host::{Deployer, NoArgs};
use odra::prelude::Addressable;
use nft_dutch_auction::{BasicNft, DutchAuction, DutchAuctionInitArgs, PaymentToken};

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    // Caller is the deployer and seller
    let seller = env.caller();
    println!("Seller address: {}", seller.to_string());

    // Auction parameters from environment or canonical defaults
    let token_id: u64 = read_env("AUCTION_TOKEN_ID", 1);
    let reserve_price: u64 = read_env("AUCTION_RESERVE_PRICE", 1000);
    let num_decay_steps: u64 = read_env("AUCTION_DECAY_STEPS", 10);
    let price_decrement: u64 = read_env("AUCTION_PRICE_DECREMENT", 100);

    // Step 1: Deploy the payment token
    println!("\n=== Deploying PaymentToken ===");
    env.set_gas(200_000_000_000u64); // 200 CSPR gas (CEP-18 needs more)
    let payment_token = PaymentToken::deploy(&env, NoArgs);
    println!("PaymentToken deployed at: {}", payment_token.address().to_string());

    // Step 2: Deploy the NFT registry and mint the lot
    println!("\n=== Deploying BasicNft ===");
    env.set_gas(100_000_000_000u64); // 100 CSPR gas
    let mut nft = BasicNft::deploy(&env, NoArgs);
    println!("BasicNft deployed at: {}", nft.address().to_string());

    env.set_gas(5_000_000_000u64); // 5 CSPR gas
    nft.mint(seller, token_id);
    println!("Minted token id {} to seller", token_id);

    // Step 3: Deploy the auction
    println!("\n=== Deploying DutchAuction ===");
    env.set_gas(150_000_000_000u64); // 150 CSPR gas
    let auction = DutchAuction::deploy(
        &env,
        DutchAuctionInitArgs {
            payment_token: payment_token.address(),
            nft_contract: nft.address(),
            token_id,
            reserve_price: U256::from(reserve_price),
            num_decay_steps,
            price_decrement: U256::from(price_decrement),
        },
    );
    println!("DutchAuction deployed at: {}", auction.address().to_string());

    // Step 4: Approve the auction to move the NFT
    env.set_gas(5_000_000_000u64); // 5 CSPR gas
    nft.approve(auction.address(), token_id);
    println!("Auction approved for token id {}", token_id);

    // Verify deployment
    println!("\n=== Deployment Summary ===");
    println!("PaymentToken: {}", payment_token.address().to_string());
    println!("BasicNft: {}", nft.address().to_string());
    println!("DutchAuction: {}", auction.address().to_string());
    println!("Initial price: {}", auction.initial_price());
    println!("\nDeployment complete!");
}

fn read_env(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
