//! DutchAuctionV2 - upgraded auction with an owner guard and version marker
//!
//! Casper contracts upgrade by deploy-and-migrate: the V2 constructor reads
//! the complete configuration and runtime state out of a prior auction
//! through its accessors and takes over from the same decay schedule. The
//! migrator becomes the contract owner. Because V2 lives at a new address,
//! the seller must re-approve the NFT (and bidders re-grant allowance) to
//! V2 before settlement can succeed.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::dutch_auction::{DutchAuctionContractRef, DECAY_INTERVAL_MS};
use crate::errors::Error;
use crate::events::{AuctionMigrated, BidAccepted};
use crate::nft::BasicNftContractRef;
use crate::payment_token::PaymentTokenContractRef;

/// Implementation version reported by `is_ver2`
pub const CONTRACT_VERSION: u64 = 2;

/// Upgraded Dutch auction, state-compatible with [`crate::DutchAuction`]
#[odra::module]
pub struct DutchAuctionV2 {
    // Collaborator contracts
    payment_token: Var<Address>,
    nft_contract: Var<Address>,

    // Lot configuration
    token_id: Var<u64>,
    seller: Var<Address>,

    // Pricing configuration
    reserve_price: Var<U256>,
    num_decay_steps: Var<u64>,
    price_decrement: Var<U256>,

    // Runtime state
    start_time: Var<u64>,
    auction_end: Var<bool>,

    // V2 additions
    owner: Var<Address>,
}

#[odra::module]
impl DutchAuctionV2 {
    /// Take over the state of a prior auction
    ///
    /// Copies every configuration field and the runtime state, preserving
    /// `start_time` so the price keeps decaying on the original schedule.
    /// The caller (migrator) becomes the contract owner.
    pub fn init(&mut self, prior_auction: Address) {
        let prior = DutchAuctionContractRef::new(self.env(), prior_auction);

        let payment_token = prior
            .payment_token()
            .unwrap_or_revert_with(&self.env(), Error::PaymentTokenNotSet);
        let nft_contract = prior
            .nft_contract()
            .unwrap_or_revert_with(&self.env(), Error::NftContractNotSet);
        let seller = prior
            .seller()
            .unwrap_or_revert_with(&self.env(), Error::SellerNotSet);

        self.payment_token.set(payment_token);
        self.nft_contract.set(nft_contract);
        self.token_id.set(prior.token_id());
        self.seller.set(seller);
        self.reserve_price.set(prior.reserve_price());
        self.num_decay_steps.set(prior.num_decay_steps());
        self.price_decrement.set(prior.price_decrement());
        self.start_time.set(prior.start_time());
        self.auction_end.set(prior.auction_end());

        let owner = self.env().caller();
        self.owner.set(owner);

        self.env().emit_event(AuctionMigrated {
            prior_auction,
            owner,
            version: CONTRACT_VERSION,
        });
    }

    // ============ CORE FUNCTIONS ============

    /// Accept the current price and settle the auction
    ///
    /// Identical settlement semantics to V1; the allowance and NFT approval
    /// must have been granted to this contract's address.
    pub fn bid(&mut self) {
        if self.auction_end.get_or_default() {
            self.env().revert(Error::AuctionAlreadyEnded);
        }

        let bidder = self.env().caller();
        let seller = self
            .seller
            .get()
            .unwrap_or_revert_with(&self.env(), Error::SellerNotSet);
        let token_id = self.token_id.get_or_default();
        let price = self.current_price();

        let token_address = self
            .payment_token
            .get()
            .unwrap_or_revert_with(&self.env(), Error::PaymentTokenNotSet);
        let mut token = PaymentTokenContractRef::new(self.env(), token_address);

        if token.balance_of(bidder) < price {
            self.env().revert(Error::InsufficientBalance);
        }

        // Close the auction BEFORE external calls (CEI pattern)
        self.auction_end.set(true);

        token.transfer_from(bidder, seller, price);

        let nft_address = self
            .nft_contract
            .get()
            .unwrap_or_revert_with(&self.env(), Error::NftContractNotSet);
        BasicNftContractRef::new(self.env(), nft_address).transfer_from(seller, bidder, token_id);

        self.env().emit_event(BidAccepted {
            bidder,
            seller,
            token_id,
            price,
        });
    }

    // ============ V2 SURFACE ============

    /// Assert that the caller is the contract owner
    ///
    /// Reverts with [`Error::NotOwner`] ("Only the contract owner can
    /// perform this action.") for any other caller.
    pub fn is_owner(&self) -> bool {
        let owner = self
            .owner
            .get()
            .unwrap_or_revert_with(&self.env(), Error::OwnerNotSet);
        if self.env().caller() != owner {
            self.env().revert(Error::NotOwner);
        }
        true
    }

    /// Implementation version marker
    pub fn is_ver2(&self) -> u64 {
        CONTRACT_VERSION
    }

    /// Get the contract owner
    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    // ============ VIEW FUNCTIONS ============

    /// Price at the top of the decay schedule
    pub fn initial_price(&self) -> U256 {
        self.reserve_price.get_or_default()
            + self.price_decrement.get_or_default() * U256::from(self.num_decay_steps.get_or_default())
    }

    /// Price as of the current block time, on the migrated schedule
    pub fn current_price(&self) -> U256 {
        let start = self.start_time.get_or_default();
        let now = self.env().get_block_time();
        let elapsed_steps = now.saturating_sub(start) / DECAY_INTERVAL_MS;
        let steps = elapsed_steps.min(self.num_decay_steps.get_or_default());
        self.initial_price() - self.price_decrement.get_or_default() * U256::from(steps)
    }

    pub fn auction_end(&self) -> bool {
        self.auction_end.get_or_default()
    }

    pub fn payment_token(&self) -> Option<Address> {
        self.payment_token.get()
    }

    pub fn nft_contract(&self) -> Option<Address> {
        self.nft_contract.get()
    }

    pub fn token_id(&self) -> u64 {
        self.token_id.get_or_default()
    }

    pub fn seller(&self) -> Option<Address> {
        self.seller.get()
    }

    pub fn reserve_price(&self) -> U256 {
        self.reserve_price.get_or_default()
    }

    pub fn num_decay_steps(&self) -> u64 {
        self.num_decay_steps.get_or_default()
    }

    pub fn price_decrement(&self) -> U256 {
        self.price_decrement.get_or_default()
    }

    pub fn start_time(&self) -> u64 {
        self.start_time.get_or_default()
    }
}
