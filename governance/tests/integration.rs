use covenant_core::{tokens, Action, Address};
use governance::*;

#[test]
fn test_full_lifecycle() {
    let mut gov = Governor::new(GovernanceConfig::default());
    let actions = vec![Action::Mint {
        amount: tokens(1000),
    }];

    let id = gov.create(&Address::from("founder"), actions, 1_000).unwrap();

    // Two of three equal holders vote for
    gov.vote(&Address::from("founder"), id, true, tokens(1000), 2_000)
        .unwrap();
    gov.vote(&Address::from("addr1"), id, true, tokens(1000), 2_000)
        .unwrap();
    gov.vote(&Address::from("addr2"), id, false, tokens(1000), 2_000)
        .unwrap();

    let close = 1_000 + config::VOTING_PERIOD + 1;
    assert_eq!(gov.evaluate(id, close, 0).unwrap(), ProposalStatus::Passed);

    gov.mark_queued(id, close + 2 * 86400, close).unwrap();
    gov.mark_executed(id).unwrap();
    assert_eq!(gov.proposal(id).unwrap().status, ProposalStatus::Executed);
}

#[test]
fn test_failed_proposal_cannot_queue() {
    let mut gov = Governor::new(GovernanceConfig::default());
    let id = gov
        .create(
            &Address::from("founder"),
            vec![Action::Mint { amount: tokens(1) }],
            1_000,
        )
        .unwrap();

    gov.vote(&Address::from("addr1"), id, false, tokens(10), 2_000)
        .unwrap();

    let close = 1_000 + config::VOTING_PERIOD + 1;
    assert_eq!(gov.evaluate(id, close, 0).unwrap(), ProposalStatus::Failed);

    let result = gov.mark_queued(id, close + 2 * 86400, close);
    assert!(matches!(result, Err(GovernanceError::NotPassed(_))));
}

#[test]
fn test_vote_weight_recorded_per_voter() {
    let mut gov = Governor::new(GovernanceConfig::default());
    let id = gov
        .create(
            &Address::from("founder"),
            vec![Action::Mint { amount: tokens(1) }],
            0,
        )
        .unwrap();

    gov.vote(&Address::from("alice"), id, true, tokens(7), 100)
        .unwrap();

    let proposal = gov.proposal(id).unwrap();
    let record = proposal.voters.get(&Address::from("alice")).unwrap();
    assert!(record.support);
    assert_eq!(record.weight, tokens(7));
    assert_eq!(proposal.votes_for, tokens(7));
}
