use bscribe::domain::{JobResult, JobStatus, PollOutcome, Transcript};

#[test]
fn given_no_result_when_converting_then_outcome_is_still_pending() {
    let outcome = PollOutcome::from(None::<JobResult>);

    assert_eq!(outcome, PollOutcome::StillPending);
    assert_eq!(outcome.status(), JobStatus::Pending);
    assert!(outcome.into_result().is_none());
}

#[test]
fn given_success_result_when_converting_then_outcome_is_completed() {
    let outcome = PollOutcome::from(Some(JobResult::Success(Transcript::new("hi"))));

    assert_eq!(outcome.status(), JobStatus::Completed);
    assert_eq!(
        outcome.into_result().unwrap().transcript().unwrap().text,
        "hi"
    );
}

#[test]
fn given_failure_result_when_converting_then_outcome_is_failed_with_message() {
    let outcome = PollOutcome::from(Some(JobResult::Failure("boom".to_string())));

    assert_eq!(outcome.status(), JobStatus::Failed);
    let result = outcome.into_result().unwrap();
    assert_eq!(result.error_message(), Some("boom"));
    assert!(result.transcript().is_none());
}
