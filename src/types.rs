multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Investor Record — registry view of a single address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct InvestorRecord<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub whitelisted: bool,
    pub kyc_approved: bool,
    /// Opaque content identifier of the off-chain KYC file. Empty if never approved.
    pub kyc_hash: ManagedBuffer<M>,
    pub is_expert: bool,
}

// ============================================================
// Compliance — outcome of a transfer pre-check
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TransferCheck {
    Allowed,
    ZeroAmount,
    RecipientNotWhitelisted,
    RecipientKycNotApproved,
    InvestmentCapExceeded,
}

impl TransferCheck {
    pub fn is_allowed(&self) -> bool {
        *self == TransferCheck::Allowed
    }

    /// Error message raised when a transfer is denied for this reason.
    pub fn error_message(&self) -> &'static str {
        match self {
            TransferCheck::Allowed => "",
            TransferCheck::ZeroAmount => crate::errors::ERR_ZERO_AMOUNT,
            TransferCheck::RecipientNotWhitelisted => crate::errors::ERR_NOT_WHITELISTED,
            TransferCheck::RecipientKycNotApproved => crate::errors::ERR_KYC_NOT_APPROVED,
            TransferCheck::InvestmentCapExceeded => crate::errors::ERR_INVESTMENT_CAP_EXCEEDED,
        }
    }
}

// ============================================================
// Revenue — one disclosed monthly figure
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RevenueRecord<M: ManagedTypeApi> {
    pub year: u32,
    pub month: u8,
    pub amount: BigUint<M>,
    pub description: ManagedBuffer<M>,
    pub recorded_at: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct RevenuePeriod {
    pub year: u32,
    pub month: u8,
}

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting is open until the deadline.
    Active,
    /// Deadline passed with more votes for than against.
    Passed,
    /// Deadline passed with against votes greater than or equal to for votes.
    Rejected,
    /// Deadline passed without reaching the quorum snapshotted at creation.
    Expired,
}

/// Status of a proposal at time `now`.
///
/// Used both for lazy reads and for the explicit finalize step, so the two
/// always agree for the same inputs. A quorum of 0 never yields `Expired`.
pub fn derive_status(
    now: u64,
    deadline: u64,
    for_votes: u64,
    against_votes: u64,
    quorum: u64,
) -> ProposalStatus {
    if now < deadline {
        return ProposalStatus::Active;
    }
    if for_votes.saturating_add(against_votes) < quorum {
        return ProposalStatus::Expired;
    }
    if for_votes > against_votes {
        ProposalStatus::Passed
    } else {
        ProposalStatus::Rejected
    }
}

// ============================================================
// Proposal — the governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub description: ManagedBuffer<M>,
    pub created_at: u64,
    pub deadline: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    /// Minimum total votes, copied from config at creation.
    pub quorum: u64,
    /// Persisted status. Stays `Active` until `finalizeProposal` is called.
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn status_at(&self, now: u64) -> ProposalStatus {
        if self.status != ProposalStatus::Active {
            return self.status;
        }
        derive_status(
            now,
            self.deadline,
            self.for_votes,
            self.against_votes,
            self.quorum,
        )
    }

    pub fn is_open_at(&self, now: u64) -> bool {
        self.status_at(now) == ProposalStatus::Active
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct VoteResults {
    pub for_votes: u64,
    pub against_votes: u64,
    pub status: ProposalStatus,
}
