//! DutchAuction - single-lot NFT auction with a time-decaying price
//!
//! The seller deploys the auction for one NFT token id and approves the
//! auction contract to move it. The asking price starts at
//! `reserve_price + num_decay_steps * price_decrement` and drops by one
//! decrement per elapsed decay interval until it floors at the reserve.
//! The first bidder whose balance covers the current price wins: the price
//! is pulled from the bidder to the seller through the CEP-18 allowance,
//! the NFT moves to the bidder through the registry approval, and the
//! auction is closed for good.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::errors::Error;
use crate::events::BidAccepted;
use crate::nft::BasicNftContractRef;
use crate::payment_token::PaymentTokenContractRef;

/// Block time per price decay step
pub const DECAY_INTERVAL_MS: u64 = 60 * 60 * 1000; // 1 hour

/// Dutch auction selling one NFT for CEP-18 tokens
#[odra::module]
pub struct DutchAuction {
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
}

#[odra::module]
impl DutchAuction {
    /// Initialize the auction
    ///
    /// The deployer becomes the seller and the decay clock starts at the
    /// current block time. Constructors run exactly once, so the
    /// configuration is immutable for the life of the contract.
    ///
    /// # Arguments
    /// * `payment_token` - CEP-18 token the auction settles in
    /// * `nft_contract` - Registry holding the auctioned token id
    /// * `token_id` - Token id being sold
    /// * `reserve_price` - Floor price after full decay
    /// * `num_decay_steps` - Number of intervals over which the price decays
    /// * `price_decrement` - Price drop per elapsed interval
    pub fn init(
        &mut self,
        payment_token: Address,
        nft_contract: Address,
        token_id: u64,
        reserve_price: U256,
        num_decay_steps: u64,
        price_decrement: U256,
    ) {
        self.payment_token.set(payment_token);
        self.nft_contract.set(nft_contract);
        self.token_id.set(token_id);
        self.seller.set(self.env().caller());
        self.reserve_price.set(reserve_price);
        self.num_decay_steps.set(num_decay_steps);
        self.price_decrement.set(price_decrement);
        self.start_time.set(self.env().get_block_time());
        self.auction_end.set(false);
    }

    // ============ CORE FUNCTIONS ============

    /// Accept the current price and settle the auction
    ///
    /// Requires the bidder to hold at least the current price in payment
    /// tokens and to have granted the auction a sufficient allowance; the
    /// seller must have approved the auction for the NFT. Either missing
    /// authorization reverts the whole call.
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

        // Pull the settlement amount from bidder to seller via allowance
        token.transfer_from(bidder, seller, price);

        // Hand the NFT over via the registry approval
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

    // ============ VIEW FUNCTIONS ============

    /// Price at the top of the decay schedule
    pub fn initial_price(&self) -> U256 {
        self.reserve_price.get_or_default()
            + self.price_decrement.get_or_default() * U256::from(self.num_decay_steps.get_or_default())
    }

    /// Price as of the current block time
    ///
    /// One decrement per full elapsed decay interval, capped at
    /// `num_decay_steps` so the price never drops below the reserve.
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
