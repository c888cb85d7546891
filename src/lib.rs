#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod compliance;
pub mod errors;
pub mod governance;
pub mod investors;
pub mod revenue;
pub mod token;
pub mod types;

// ============================================================
// Contract
// ============================================================

/// Compliance-gated security token with a monthly revenue ledger and
/// one-investor-one-vote governance.
///
/// The deployer becomes the owner, holds the full supply and is exempt from
/// the investment cap. Every other holder must be whitelisted and KYC-approved
/// before their balance can grow, and may never hold more than
/// `maxInvestment`.
#[multiversx_sc::contract]
pub trait SecurityToken:
    access::AccessModule
    + investors::InvestorRegistryModule
    + compliance::ComplianceModule
    + token::TokenModule
    + revenue::RevenueModule
    + governance::GovernanceModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        total_supply: BigUint,
        max_investment: BigUint,
    ) {
        let owner = self.blockchain().get_caller();

        self.init_roles(&owner);
        self.init_token(&owner, name, symbol, total_supply, max_investment);
        self.revenue_amendment_allowed().set(false);
        self.proposal_count().set(0u64);
        self.quorum().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    /// `(maxInvestment, quorum, revenueAmendmentAllowed)`
    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<BigUint, u64, bool> {
        let max_investment = self.max_investment().get();
        let quorum = self.quorum().get();
        let amendment_allowed = self.revenue_amendment_allowed().get();
        (max_investment, quorum, amendment_allowed).into()
    }
}
