//! Unit tests for the agency listing use-case.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use eam_cli::application::services::agency_list::list_agencies;
use eam_cli::domain::RemoteError;

use crate::mocks::{FakeEam, RecordingReporter};

#[tokio::test]
async fn test_list_agencies_keeps_server_order() {
    let api = FakeEam::new()
        .with_agency("agency-2", "B", "agent-b")
        .with_agency("agency-1", "A", "agent-a");
    let reporter = RecordingReporter::default();

    let entries = list_agencies(&api, &reporter).await.unwrap();

    let ids: Vec<_> = entries.iter().map(|e| e.agency.value.as_str()).collect();
    assert_eq!(ids, ["agency-2", "agency-1"]);
    assert_eq!(entries[0].config.agency_name, "B");
    assert_eq!(entries[1].config.agent_name, "agent-a");
}

#[tokio::test]
async fn test_list_agencies_empty_makes_no_config_calls() {
    let api = FakeEam::new();
    let entries = list_agencies(&api, &RecordingReporter::default())
        .await
        .unwrap();
    assert!(entries.is_empty());
    assert_eq!(api.calls(), ["QueryAgency"]);
}

#[tokio::test]
async fn test_list_agencies_stops_at_first_config_fault() {
    let api = FakeEam::new()
        .with_agency("agency-1", "A", "a")
        .with_agency("agency-2", "B", "b")
        .with_agency("agency-3", "C", "c")
        .failing("QueryConfig", Some("agency-2"));

    let err = list_agencies(&api, &RecordingReporter::default())
        .await
        .unwrap_err();

    assert!(err.downcast_ref::<RemoteError>().is_some_and(RemoteError::is_fault));
    assert_eq!(
        api.calls(),
        ["QueryAgency", "QueryConfig(agency-1)", "QueryConfig(agency-2)"]
    );
}

#[tokio::test]
async fn test_list_agencies_enumeration_fault_propagates() {
    let api = FakeEam::new()
        .with_agency("agency-1", "A", "a")
        .failing("QueryAgency", None);
    let err = list_agencies(&api, &RecordingReporter::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "ServerFaultCode: QueryAgency failed");
}

#[tokio::test]
async fn test_list_agencies_reports_progress() {
    let api = FakeEam::new().with_agency("agency-1", "A", "a");
    let reporter = RecordingReporter::default();
    list_agencies(&api, &reporter).await.unwrap();
    let steps = reporter.steps.lock().unwrap();
    assert_eq!(steps.len(), 2);
    assert!(steps[1].contains("agency-1"));
}
