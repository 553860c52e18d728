//! Payment token - CEP-18 compliant settlement token for auction bids

use odra::casper_types::U256;
use odra::prelude::*;
use odra_modules::cep18_token::Cep18;

use crate::errors::Error;

/// Fungible token used to settle winning bids
#[odra::module]
pub struct PaymentToken {
    /// CEP-18 token implementation
    cep18: SubModule<Cep18>,
    /// Address authorized to mint new supply
    minter: Var<Address>,
}

#[odra::module]
impl PaymentToken {
    /// Initialize the token; the deployer becomes the minter
    pub fn init(&mut self) {
        self.cep18.init(
            "Auction Settlement Token".to_string(),
            "AST".to_string(),
            9,
            U256::zero(), // Initial supply
        );
        self.minter.set(self.env().caller());
    }

    /// Mint new supply - minter only
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.require_minter();
        self.cep18.raw_mint(&to, &amount);
    }

    /// Transfer tokens - standard CEP-18 passthrough
    pub fn transfer(&mut self, to: Address, amount: U256) {
        self.cep18.transfer(&to, &amount);
    }

    /// Approve spender - standard CEP-18 passthrough
    pub fn approve(&mut self, spender: Address, amount: U256) {
        self.cep18.approve(&spender, &amount);
    }

    /// Raise the caller's existing allowance for a spender
    pub fn increase_allowance(&mut self, spender: Address, amount: U256) {
        let owner = self.env().caller();
        let current = self.cep18.allowance(&owner, &spender);
        self.cep18.approve(&spender, &(current + amount));
    }

    /// Transfer from - standard CEP-18 passthrough
    pub fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) {
        self.cep18.transfer_from(&owner, &to, &amount);
    }

    /// Get token balance - standard CEP-18 view
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.cep18.balance_of(&owner)
    }

    /// Get allowance - standard CEP-18 view
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.cep18.allowance(&owner, &spender)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.cep18.total_supply()
    }

    /// Get token name
    pub fn name(&self) -> String {
        self.cep18.name()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.cep18.symbol()
    }

    /// Get token decimals
    pub fn decimals(&self) -> u8 {
        self.cep18.decimals()
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
            .unwrap_or_revert_with(&self.env(), Error::MinterNotSet);
        if self.env().caller() != minter {
            self.env().revert(Error::NotMinter);
        }
    }
}
