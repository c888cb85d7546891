multiversx_sc::imports!();

use crate::access;
use crate::errors::{
    ERR_ALREADY_VOTED, ERR_INVALID_VOTING_PERIOD, ERR_NOT_ELIGIBLE, ERR_PROPOSAL_ALREADY_FINALIZED,
    ERR_PROPOSAL_CLOSED, ERR_PROPOSAL_NOT_FOUND, ERR_VOTING_NOT_ENDED,
};
use crate::investors;
use crate::types::{Proposal, ProposalStatus, VoteResults};

/// One-address-one-vote proposals with a fixed deadline.
///
/// Status after the deadline is derived from the tallies on every read.
/// `finalizeProposal` persists the same derived value, so callers see an
/// identical outcome whether or not anyone finalizes.
#[multiversx_sc::module]
pub trait GovernanceModule: access::AccessModule + investors::InvestorRegistryModule {
    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer, voting_period_seconds: u64) -> u64 {
        self.require_compliance_manager();
        require!(voting_period_seconds > 0, ERR_INVALID_VOTING_PERIOD);

        let now = self.blockchain().get_block_timestamp();
        let deadline = match now.checked_add(voting_period_seconds) {
            Some(deadline) => deadline,
            None => sc_panic!(ERR_INVALID_VOTING_PERIOD),
        };

        let proposal_id = self.proposal_count().get();
        let proposal = Proposal {
            id: proposal_id,
            description,
            created_at: now,
            deadline,
            for_votes: 0,
            against_votes: 0,
            quorum: self.quorum().get(),
            status: ProposalStatus::Active,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, deadline, &proposal.description);

        proposal_id
    }

    /// Casts one vote. Eligibility is whitelisting only; balances carry no weight.
    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        require!(self.whitelisted(&caller).get(), ERR_NOT_ELIGIBLE);
        require!(!self.voters(proposal_id).contains(&caller), ERR_ALREADY_VOTED);

        let mut proposal = proposal_mapper.get();
        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_open_at(now), ERR_PROPOSAL_CLOSED);

        if support {
            proposal.for_votes += 1;
        } else {
            proposal.against_votes += 1;
        }

        self.voters(proposal_id).insert(caller.clone());
        proposal_mapper.set(&proposal);

        self.vote_event(proposal_id, &caller, support);
    }

    /// Persists the outcome of a proposal whose deadline has passed.
    /// Anyone may call it.
    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) -> ProposalStatus {
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);

        let mut proposal = proposal_mapper.get();
        require!(
            proposal.status == ProposalStatus::Active,
            ERR_PROPOSAL_ALREADY_FINALIZED
        );

        let now = self.blockchain().get_block_timestamp();
        let status = proposal.status_at(now);
        require!(status != ProposalStatus::Active, ERR_VOTING_NOT_ENDED);

        proposal.status = status;
        proposal_mapper.set(&proposal);

        self.proposal_finalized_event(proposal_id, status, proposal.for_votes, proposal.against_votes);

        status
    }

    /// Minimum total votes for future proposals. 0 disables the quorum.
    #[endpoint(setQuorum)]
    fn set_quorum(&self, min_votes: u64) {
        self.require_owner();
        self.quorum().set(min_votes);
        self.quorum_changed_event(min_votes);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVoteResults)]
    fn get_vote_results(&self, proposal_id: u64) -> VoteResults {
        let proposal = self.require_proposal(proposal_id);
        let now = self.blockchain().get_block_timestamp();
        VoteResults {
            for_votes: proposal.for_votes,
            against_votes: proposal.against_votes,
            status: proposal.status_at(now),
        }
    }

    /// Returns the proposal with its status resolved at the current block time.
    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mut proposal = self.require_proposal(proposal_id);
        proposal.status = proposal.status_at(self.blockchain().get_block_timestamp());
        proposal
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(voter)
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        proposal_mapper.get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] deadline: u64,
        description: &ManagedBuffer,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        support: bool,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] status: ProposalStatus,
        #[indexed] for_votes: u64,
        against_votes: u64,
    );

    #[event("quorumChanged")]
    fn quorum_changed_event(&self, #[indexed] min_votes: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    /// Next proposal id. Ids start at 0.
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("quorum")]
    fn quorum(&self) -> SingleValueMapper<u64>;
}
