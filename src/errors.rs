//! Error definitions for the Dutch auction contracts

use odra::prelude::*;

/// Auction and payment token errors
#[odra::odra_error]
pub enum Error {
    /// The auction has already been settled by a winning bid
    AuctionAlreadyEnded = 1,
    /// Bidder's payment token balance is below the current price
    InsufficientBalance = 2,
    /// "Only the contract owner can perform this action."
    NotOwner = 3,
    /// Caller is not the authorized minter
    NotMinter = 4,
    /// Minter address not set
    MinterNotSet = 5,
    /// Payment token address not set
    PaymentTokenNotSet = 6,
    /// NFT contract address not set
    NftContractNotSet = 7,
    /// Seller address not set
    SellerNotSet = 8,
    /// Contract owner address not set
    OwnerNotSet = 9,
}

/// NFT registry errors
#[odra::odra_error]
pub enum NftError {
    /// No owner recorded for the requested token id
    TokenNotFound = 100,
    /// A token with this id has already been minted
    TokenAlreadyExists = 101,
    /// Caller is neither the token owner nor the approved spender
    NotApproved = 102,
    /// `from` does not match the current token owner
    NotTokenOwner = 103,
    /// Caller is not the authorized minter
    NotMinter = 104,
    /// Minter address not set
    MinterNotSet = 105,
}
