multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_ADDRESS, ERR_UNAUTHORIZED};

/// Owner and compliance manager roles.
///
/// The owner is the deploying account, recorded once at `init`. It is kept in
/// contract storage rather than read from the VM owner field so that it stays
/// fixed for the lifetime of the token.
#[multiversx_sc::module]
pub trait AccessModule {
    fn init_roles(&self, owner: &ManagedAddress) {
        self.owner().set(owner);
        self.compliance_manager().set(owner);
    }

    #[endpoint(setComplianceManager)]
    fn set_compliance_manager(&self, new_manager: ManagedAddress) {
        self.require_owner();
        require!(!new_manager.is_zero(), ERR_INVALID_ADDRESS);

        let previous = self.compliance_manager().get();
        self.compliance_manager().set(&new_manager);

        self.compliance_manager_changed_event(&previous, &new_manager);
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_UNAUTHORIZED);
    }

    fn require_compliance_manager(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.compliance_manager().get(), ERR_UNAUTHORIZED);
    }

    fn is_owner(&self, address: &ManagedAddress) -> bool {
        *address == self.owner().get()
    }

    #[event("complianceManagerChanged")]
    fn compliance_manager_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] new_manager: &ManagedAddress,
    );

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getComplianceManager)]
    #[storage_mapper("complianceManager")]
    fn compliance_manager(&self) -> SingleValueMapper<ManagedAddress>;
}
