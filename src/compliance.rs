multiversx_sc::imports!();

use crate::access;
use crate::investors;
use crate::types::TransferCheck;

/// Recipient-side transfer rules.
///
/// Only the receiving address is screened: holdings may only grow for
/// whitelisted, KYC-approved investors. The sender is not checked, so a
/// de-listed holder can still move tokens out to an eligible recipient.
#[multiversx_sc::module]
pub trait ComplianceModule: access::AccessModule + investors::InvestorRegistryModule {
    /// Evaluates the rules in a fixed order: zero amount, whitelist, KYC,
    /// then the investment cap on the recipient's resulting balance.
    fn check_transfer(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
    ) -> TransferCheck {
        if *amount == 0u64 {
            return TransferCheck::ZeroAmount;
        }
        if !self.whitelisted(to).get() {
            return TransferCheck::RecipientNotWhitelisted;
        }
        if !self.kyc_approved(to).get() {
            return TransferCheck::RecipientKycNotApproved;
        }
        if !self.is_owner(to) {
            let current = self.balance(to).get();
            // a self-transfer leaves the balance unchanged
            let resulting = if from == to { current } else { current + amount };
            if resulting > self.max_investment().get() {
                return TransferCheck::InvestmentCapExceeded;
            }
        }
        TransferCheck::Allowed
    }

    fn require_transfer_allowed(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let check = self.check_transfer(from, to, amount);
        require!(check.is_allowed(), (check.error_message()));
    }

    #[view(canTransfer)]
    fn can_transfer(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) -> TransferCheck {
        self.check_transfer(&from, &to, &amount)
    }

    // ledger storage, shared with the token module

    #[storage_mapper("balance")]
    fn balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(maxInvestment)]
    #[storage_mapper("maxInvestment")]
    fn max_investment(&self) -> SingleValueMapper<BigUint>;
}
