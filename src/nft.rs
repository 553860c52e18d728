//! BasicNft - minimal single-collection NFT ownership registry
//!
//! Tracks the owner and at most one approved spender per `u64` token id.
//! Just enough surface for the auction to settle without escrow: the
//! seller approves the auction contract, which later calls `transfer_from`.

use odra::prelude::*;

use crate::errors::NftError;
use crate::events::{Approval, Minted, Transfer};

/// Minimal NFT ownership registry
#[odra::module]
pub struct BasicNft {
    /// Address authorized to mint new token ids
    minter: Var<Address>,
    /// Token id -> current owner
    owners: Mapping<u64, Address>,
    /// Token id -> approved spender, cleared on transfer
    approvals: Mapping<u64, Option<Address>>,
}

#[odra::module]
impl BasicNft {
    /// Initialize the registry; the deployer becomes the minter
    pub fn init(&mut self) {
        self.minter.set(self.env().caller());
    }

    /// Mint a fresh token id - minter only
    pub fn mint(&mut self, to: Address, token_id: u64) {
        self.require_minter();
        if self.owners.get(&token_id).is_some() {
            self.env().revert(NftError::TokenAlreadyExists);
        }
        self.owners.set(&token_id, to);
        self.env().emit_event(Minted { to, token_id });
    }

    /// Approve a spender to transfer the token - token owner only
    ///
    /// Overwrites any previous approval for the same id.
    pub fn approve(&mut self, spender: Address, token_id: u64) {
        let owner = self.require_token(token_id);
        if self.env().caller() != owner {
            self.env().revert(NftError::NotTokenOwner);
        }
        self.approvals.set(&token_id, Some(spender));
        self.env().emit_event(Approval {
            owner,
            spender,
            token_id,
        });
    }

    /// Transfer the token from its owner to a new owner
    ///
    /// The caller must be the current owner or the approved spender.
    /// Any approval is consumed by the transfer.
    pub fn transfer_from(&mut self, from: Address, to: Address, token_id: u64) {
        let owner = self.require_token(token_id);
        if owner != from {
            self.env().revert(NftError::NotTokenOwner);
        }

        let caller = self.env().caller();
        let approved = self.approvals.get(&token_id).flatten();
        if caller != owner && approved != Some(caller) {
            self.env().revert(NftError::NotApproved);
        }

        self.approvals.set(&token_id, None);
        self.owners.set(&token_id, to);
        self.env().emit_event(Transfer { from, to, token_id });
    }

    /// Get the current owner of a token id
    pub fn owner_of(&self, token_id: u64) -> Address {
        self.require_token(token_id)
    }

    /// Get the approved spender for a token id, if any
    pub fn get_approved(&self, token_id: u64) -> Option<Address> {
        self.require_token(token_id);
        self.approvals.get(&token_id).flatten()
    }

    /// Get current minter address
    pub fn get_minter(&self) -> Option<Address> {
        self.minter.get()
    }

    // Internal functions

    fn require_minter(&self) {
        let minter = self
            .minter
            .get()
            .unwrap_or_revert_with(&self.env(), NftError::MinterNotSet);
        if self.env().caller() != minter {
            self.env().revert(NftError::NotMinter);
        }
    }

    fn require_token(&self, token_id: u64) -> Address {
        self.owners
            .get(&token_id)
            .unwrap_or_revert_with(&self.env(), NftError::TokenNotFound)
    }
}
