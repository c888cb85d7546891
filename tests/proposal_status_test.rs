use security_token::types::{derive_status, ProposalStatus};

const DEADLINE: u64 = 1_000;

#[test]
fn active_until_deadline() {
    assert_eq!(derive_status(0, DEADLINE, 5, 0, 0), ProposalStatus::Active);
    assert_eq!(derive_status(DEADLINE - 1, DEADLINE, 0, 5, 10), ProposalStatus::Active);
}

#[test]
fn majority_decides_at_deadline() {
    assert_eq!(derive_status(DEADLINE, DEADLINE, 2, 1, 0), ProposalStatus::Passed);
    assert_eq!(derive_status(DEADLINE, DEADLINE, 1, 2, 0), ProposalStatus::Rejected);
    assert_eq!(derive_status(DEADLINE, DEADLINE, 1, 1, 0), ProposalStatus::Rejected);
    assert_eq!(derive_status(DEADLINE + 50, DEADLINE, 0, 0, 0), ProposalStatus::Rejected);
}

#[test]
fn quorum_shortfall_expires() {
    assert_eq!(derive_status(DEADLINE, DEADLINE, 2, 0, 3), ProposalStatus::Expired);
    assert_eq!(derive_status(DEADLINE, DEADLINE, 2, 1, 3), ProposalStatus::Passed);
    assert_eq!(derive_status(DEADLINE, DEADLINE, u64::MAX, 1, u64::MAX), ProposalStatus::Passed);
}
