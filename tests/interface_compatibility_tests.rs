use adapter_errors::{
    AdapterError, AdapterErrorKind, AdapterFailure, NoLeaderError, ReportConfig, Result,
    is_no_leader_error, report_failure,
};
use std::error::Error;

// Generic handler written against any adapter failure, with no special-casing.
fn banner_text(error: &dyn AdapterFailure) -> String {
    if error.details().is_empty() {
        error.message().to_string()
    } else {
        format!("{}: {}", error.message(), error.details().join(", "))
    }
}

fn describe<E: AdapterFailure>(error: &E) -> (AdapterErrorKind, String) {
    (error.kind(), error.to_string())
}

fn fetch_jobs(leader_available: bool) -> Result<Vec<String>> {
    if !leader_available {
        Err::<(), _>(NoLeaderError::new())?;
    }
    Ok(vec!["example".to_string()])
}

fn fetch_boxed() -> std::result::Result<(), Box<dyn Error + Send + Sync>> {
    Err(NoLeaderError::new().into())
}

#[test]
fn no_leader_works_in_generic_handlers() {
    assert_eq!(banner_text(&NoLeaderError::new()), "No cluster leader");
    assert_eq!(
        describe(&NoLeaderError::new()),
        (AdapterErrorKind::NoLeader, "No cluster leader".to_string())
    );

    let forbidden = AdapterError::forbidden(vec!["missing token".to_string()]);
    assert_eq!(
        banner_text(&forbidden),
        "The adapter operation is forbidden: missing token"
    );
}

#[test]
fn question_mark_lifts_into_family() {
    let err = fetch_jobs(false).unwrap_err();
    assert!(err.is_no_leader());
    assert_eq!(fetch_jobs(true).unwrap(), vec!["example".to_string()]);
}

#[test]
fn boxed_errors_stay_classifiable() {
    let err = fetch_boxed().unwrap_err();
    assert!(is_no_leader_error(err.as_ref()));
    assert!(err.downcast_ref::<NoLeaderError>().is_some());
}

#[test]
fn caller_branches_on_kind() {
    let outcomes: Vec<&str> = [
        AdapterError::no_leader(),
        AdapterError::timeout(),
        AdapterError::not_found(Vec::new()),
    ]
    .iter()
    .map(|err| match err.kind() {
        AdapterErrorKind::NoLeader => "wait-for-leader",
        _ if err.kind().is_transient() => "retry",
        _ => "show-error",
    })
    .collect();
    assert_eq!(outcomes, vec!["wait-for-leader", "retry", "show-error"]);
}

#[test]
fn reporting_accepts_any_member() {
    let config = ReportConfig::new().target_label("jobs");
    let failures: Vec<Box<dyn AdapterFailure>> = vec![
        Box::new(NoLeaderError::new()),
        Box::new(AdapterError::server(vec!["500".to_string()])),
    ];
    let levels: Vec<_> = failures
        .iter()
        .map(|f| report_failure(f.as_ref(), &config))
        .collect();
    assert_eq!(levels, vec![tracing::Level::WARN, tracing::Level::ERROR]);
}
