//! Upgrade tests: V2 migration, version marker, owner guard and settlement

mod test_utils;

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;

use nft_dutch_auction::dutch_auction_v2::{DutchAuctionV2, DutchAuctionV2InitArgs};
use nft_dutch_auction::errors::Error;
use nft_dutch_auction::events::AuctionMigrated;
use nft_dutch_auction::{DutchAuctionHostRef, DutchAuctionV2HostRef};

use test_utils::*;

/// Migrate the auction to V2; the current env caller becomes the owner
fn upgrade(env: &HostEnv, auction: &DutchAuctionHostRef) -> DutchAuctionV2HostRef {
    DutchAuctionV2::deploy(
        env,
        DutchAuctionV2InitArgs {
            prior_auction: auction.address(),
        },
    )
}

#[test]
fn test_upgrade_preserves_configuration() {
    let (env, auction, nft, token, seller, _bidder) = setup();

    let v2 = upgrade(&env, &auction);

    assert_eq!(v2.initial_price(), U256::from(INITIAL_PRICE));
    assert_eq!(v2.payment_token(), Some(token.address()));
    assert_eq!(v2.nft_contract(), Some(nft.address()));
    assert_eq!(v2.token_id(), AUCTION_TOKEN_ID);
    assert_eq!(v2.seller(), Some(seller));
    assert_eq!(v2.reserve_price(), U256::from(RESERVE_PRICE));
    assert_eq!(v2.num_decay_steps(), NUM_DECAY_STEPS);
    assert_eq!(v2.price_decrement(), U256::from(PRICE_DECREMENT));
    assert_eq!(v2.start_time(), auction.start_time());
    assert!(!v2.auction_end());
}

#[test]
fn test_upgrade_reports_version_2() {
    let (env, auction, _nft, _token, _seller, _bidder) = setup();

    let v2 = upgrade(&env, &auction);

    assert_eq!(v2.is_ver2(), 2);
}

#[test]
fn test_migration_emits_event() {
    let (env, auction, _nft, _token, seller, _bidder) = setup();

    let v2 = upgrade(&env, &auction);

    let expected_event = AuctionMigrated {
        prior_auction: auction.address(),
        owner: seller,
        version: 2,
    };
    assert!(
        env.emitted_event(&v2, expected_event),
        "Should emit AuctionMigrated event"
    );
}

#[test]
fn test_only_owner_passes_owner_check() {
    let (env, auction, _nft, _token, seller, bidder) = setup();

    // Seller performs the migration and becomes the owner
    let v2 = upgrade(&env, &auction);
    assert_eq!(v2.get_owner(), Some(seller));

    // Non-owners are rejected
    env.set_caller(bidder);
    let result = v2.try_is_owner();
    assert!(result.is_err(), "Non-owner must not pass the owner check");
    assert_eq!(result.unwrap_err(), Error::NotOwner.into());

    // The owner passes
    env.set_caller(seller);
    assert!(v2.is_owner());
}

#[test]
fn test_migration_preserves_decay_schedule() {
    let (env, auction, _nft, _token, _seller, _bidder) = setup();

    // Two intervals of decay happen before the upgrade
    env.advance_block_time(2 * DECAY_INTERVAL_MS);
    let expected = INITIAL_PRICE - 2 * PRICE_DECREMENT;
    assert_eq!(auction.current_price(), U256::from(expected));

    // V2 continues on the same clock, not a fresh one
    let v2 = upgrade(&env, &auction);
    assert_eq!(v2.current_price(), U256::from(expected));
}

#[test]
fn test_ends_auction_after_bidding_on_v2() {
    // Upgrade, re-approve the NFT to the new address, advance blocks,
    // grant allowance, bid, verify settlement.
    let (env, auction, mut nft, mut token, seller, bidder) = setup();

    let mut v2 = upgrade(&env, &auction);
    nft.approve(v2.address(), AUCTION_TOKEN_ID);

    // Initial state
    assert_eq!(token.balance_of(bidder), U256::from(2000u64));
    assert_eq!(nft.get_approved(AUCTION_TOKEN_ID), Some(v2.address()));
    assert_eq!(v2.initial_price(), U256::from(2000u64));
    assert_eq!(v2.is_ver2(), 2);

    // Simulate 15 produced blocks
    env.advance_block_time(15 * BLOCK_TIME_MS);

    // Award allowance to the upgraded auction and bid
    env.set_caller(bidder);
    token.increase_allowance(v2.address(), U256::from(2000u64));
    v2.bid();

    assert_eq!(nft.owner_of(AUCTION_TOKEN_ID), bidder);
    assert_eq!(token.balance_of(bidder), U256::zero());
    assert_eq!(token.balance_of(seller), U256::from(2000u64));
    assert!(v2.auction_end());
}

#[test]
fn test_v2_bid_requires_fresh_nft_approval() {
    let (env, auction, nft, mut token, seller, bidder) = setup();

    // Upgrade without re-approving: the registry approval still points at V1
    let mut v2 = upgrade(&env, &auction);
    assert_eq!(nft.get_approved(AUCTION_TOKEN_ID), Some(auction.address()));

    env.set_caller(bidder);
    token.increase_allowance(v2.address(), U256::from(INITIAL_PRICE));
    let result = v2.try_bid();
    assert!(result.is_err(), "V2 cannot settle without its own NFT approval");

    // Full rollback
    assert!(!v2.auction_end());
    assert_eq!(nft.owner_of(AUCTION_TOKEN_ID), seller);
    assert_eq!(token.balance_of(bidder), U256::from(BIDDER_FUNDS));
}

#[test]
fn test_migrating_settled_auction_stays_closed() {
    let (env, mut auction, _nft, mut token, seller, bidder) = setup();

    // Settle on V1 first
    env.set_caller(bidder);
    token.approve(auction.address(), U256::from(INITIAL_PRICE));
    auction.bid();
    assert!(auction.auction_end());

    // The migrated contract carries the closed state over
    env.set_caller(seller);
    let mut v2 = upgrade(&env, &auction);
    assert!(v2.auction_end());

    let result = v2.try_bid();
    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), Error::AuctionAlreadyEnded.into());
}
