// Error messages surfaced to callers. Every failed endpoint call reverts
// all storage writes made during the call.

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";

pub const ERR_NOT_WHITELISTED: &str = "Address is not whitelisted";
pub const ERR_KYC_NOT_APPROVED: &str = "KYC is not approved";

pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_INVESTMENT_CAP_EXCEEDED: &str = "Investment cap exceeded";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";

pub const ERR_INVALID_MONTH: &str = "Month must be between 1 and 12";
pub const ERR_DUPLICATE_PERIOD: &str = "Revenue already recorded for this period";
pub const ERR_PERIOD_NOT_FOUND: &str = "No revenue recorded for this period";

pub const ERR_NOT_ELIGIBLE: &str = "Only whitelisted investors can vote";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_PROPOSAL_CLOSED: &str = "Proposal is closed for voting";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_INVALID_VOTING_PERIOD: &str = "Invalid voting period";
pub const ERR_VOTING_NOT_ENDED: &str = "Voting period has not ended";
pub const ERR_PROPOSAL_ALREADY_FINALIZED: &str = "Proposal is already finalized";
