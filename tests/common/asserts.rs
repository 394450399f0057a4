use cors_gate::{CorsDecision, Headers, Rejection};

pub fn assert_accepted(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Accepted { headers } => headers,
        other => panic!("expected accepted decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> Rejection {
    match decision {
        CorsDecision::Rejected(rejection) => rejection,
        other => panic!("expected rejected decision, got {:?}", other),
    }
}

pub fn assert_passthrough(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::Passthrough),
        "expected passthrough decision, got {:?}",
        decision
    );
}
