multiversx_sc::imports!();

use crate::access;
use crate::errors::{ERR_KYC_NOT_APPROVED, ERR_NOT_WHITELISTED};
use crate::types::InvestorRecord;

/// Whitelist, KYC and expert-investor flags per address.
///
/// Every flag lives in its own mapper, so an address that was never touched
/// reads back as not whitelisted, not approved and not expert.
#[multiversx_sc::module]
pub trait InvestorRegistryModule: access::AccessModule {
    #[endpoint(addToWhitelist)]
    fn add_to_whitelist(&self, address: ManagedAddress, enabled: bool) {
        self.require_compliance_manager();

        self.whitelisted(&address).set(enabled);
        self.investors().insert(address.clone());

        self.whitelist_updated_event(&address, enabled);
    }

    #[endpoint(approveKYC)]
    fn approve_kyc(&self, address: ManagedAddress, kyc_hash: ManagedBuffer) {
        self.require_compliance_manager();
        require!(self.whitelisted(&address).get(), ERR_NOT_WHITELISTED);

        self.kyc_approved(&address).set(true);
        self.kyc_hash(&address).set(&kyc_hash);

        self.kyc_approved_event(&address, &kyc_hash);
    }

    /// Withdraws a KYC approval. Expert status depends on KYC and is cleared
    /// with it; the hash is kept as the audit reference of the last approval.
    #[endpoint(revokeKYC)]
    fn revoke_kyc(&self, address: ManagedAddress) {
        self.require_compliance_manager();
        require!(self.kyc_approved(&address).get(), ERR_KYC_NOT_APPROVED);

        self.kyc_approved(&address).set(false);
        self.expert(&address).set(false);

        self.kyc_revoked_event(&address);
    }

    #[endpoint(approveExpert)]
    fn approve_expert(&self, address: ManagedAddress, enabled: bool) {
        self.require_compliance_manager();
        require!(self.kyc_approved(&address).get(), ERR_KYC_NOT_APPROVED);

        self.expert(&address).set(enabled);

        self.expert_updated_event(&address, enabled);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getInvestor)]
    fn get_investor(&self, address: ManagedAddress) -> InvestorRecord<Self::Api> {
        InvestorRecord {
            whitelisted: self.whitelisted(&address).get(),
            kyc_approved: self.kyc_approved(&address).get(),
            kyc_hash: self.kyc_hash(&address).get(),
            is_expert: self.expert(&address).get(),
            address,
        }
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, address: &ManagedAddress) -> bool {
        self.whitelisted(address).get()
    }

    #[view(isKycApproved)]
    fn is_kyc_approved(&self, address: &ManagedAddress) -> bool {
        self.kyc_approved(address).get()
    }

    #[view(isExpert)]
    fn is_expert(&self, address: &ManagedAddress) -> bool {
        self.expert(address).get()
    }

    #[view(getInvestorCount)]
    fn get_investor_count(&self) -> usize {
        self.investors().len()
    }

    #[view(getInvestors)]
    fn get_investors(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.investors().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for (idx, investor) in self.investors().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(investor);
            }
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("whitelistUpdated")]
    fn whitelist_updated_event(&self, #[indexed] address: &ManagedAddress, #[indexed] enabled: bool);

    #[event("kycApproved")]
    fn kyc_approved_event(&self, #[indexed] address: &ManagedAddress, kyc_hash: &ManagedBuffer);

    #[event("kycRevoked")]
    fn kyc_revoked_event(&self, #[indexed] address: &ManagedAddress);

    #[event("expertUpdated")]
    fn expert_updated_event(&self, #[indexed] address: &ManagedAddress, #[indexed] enabled: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    /// Every address ever passed to `addToWhitelist`. Never shrinks.
    #[storage_mapper("investors")]
    fn investors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("whitelisted")]
    fn whitelisted(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("kycApproved")]
    fn kyc_approved(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("kycHash")]
    fn kyc_hash(&self, address: &ManagedAddress) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("expert")]
    fn expert(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;
}
