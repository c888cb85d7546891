multiversx_sc::imports!();

use crate::access;
use crate::compliance;
use crate::errors::ERR_INSUFFICIENT_BALANCE;
use crate::investors;

/// Fixed-supply balance ledger. The full supply is credited to the owner at
/// `init`; afterwards balances only move through `transfer`.
#[multiversx_sc::module]
pub trait TokenModule:
    access::AccessModule + investors::InvestorRegistryModule + compliance::ComplianceModule
{
    fn init_token(
        &self,
        owner: &ManagedAddress,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        total_supply: BigUint,
        max_investment: BigUint,
    ) {
        self.token_name().set(&name);
        self.token_symbol().set(&symbol);
        self.total_supply().set(&total_supply);
        self.max_investment().set(&max_investment);
        self.balance(owner).set(&total_supply);

        self.transfer_event(&ManagedAddress::zero(), owner, &total_supply);
    }

    /// Moves `amount` from the caller to `to`.
    ///
    /// The sender's balance is checked first, then the compliance rules on the
    /// recipient. Nothing is written unless both pass.
    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let from = self.blockchain().get_caller();

        let from_balance = self.balance(&from).get();
        require!(from_balance >= amount, ERR_INSUFFICIENT_BALANCE);
        self.require_transfer_allowed(&from, &to, &amount);

        if from != to {
            self.balance(&from).set(&(from_balance - &amount));
            self.balance(&to).update(|balance| *balance += &amount);
        }

        self.transfer_event(&from, &to, &amount);
    }

    #[view(name)]
    fn name(&self) -> ManagedBuffer {
        self.token_name().get()
    }

    #[view(symbol)]
    fn symbol(&self) -> ManagedBuffer {
        self.token_symbol().get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: &ManagedAddress) -> BigUint {
        self.balance(address).get()
    }

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[storage_mapper("tokenName")]
    fn token_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("tokenSymbol")]
    fn token_symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;
}
