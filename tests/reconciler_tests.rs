use std::sync::Arc;
use std::time::Duration;

use sentinel::application::{CycleOutcome, Reconciler};
use sentinel::domain::{Action, DesiredWorkload, ObservedState};
use sentinel::port::{Event, NotifierRegistry};
use sentinel::testkit::cluster::FakeCluster;
use sentinel::testkit::domain::{
    forbidden, not_found, recording_reconciler, server_error, unreachable,
};
use sentinel::testkit::notifier::RecordingNotifier;

fn desired() -> DesiredWorkload {
    DesiredWorkload::default()
}

#[tokio::test]
async fn present_workload_is_observed_without_creating() {
    let cluster = Arc::new(FakeCluster::new().with_workload(desired().to_object()));
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    for _ in 0..10 {
        let report = reconciler.run_cycle().await;
        assert_eq!(report.observed, ObservedState::Present);
        assert_eq!(report.outcome, CycleOutcome::Healthy);
    }

    assert_eq!(cluster.get_calls(), 10);
    assert_eq!(cluster.create_calls(), 0);
    assert_eq!(events.kinds(), vec!["healthy"; 10]);
}

#[tokio::test]
async fn absent_workload_is_created_once_and_then_present() {
    let cluster = Arc::new(FakeCluster::new());
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    let first = reconciler.run_cycle().await;
    assert_eq!(first.observed, ObservedState::Absent);
    assert_eq!(first.action, Action::Heal);
    assert_eq!(first.outcome, CycleOutcome::Healed);
    assert_eq!(cluster.create_calls(), 1);

    let second = reconciler.run_cycle().await;
    assert_eq!(second.observed, ObservedState::Present);
    assert_eq!(cluster.create_calls(), 1);

    assert_eq!(events.kinds(), vec!["missing", "healed", "healthy"]);
}

#[tokio::test]
async fn query_failures_never_create() {
    let cluster = Arc::new(FakeCluster::new());
    cluster.fail_all_gets(server_error());
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    for _ in 0..25 {
        let report = reconciler.run_cycle().await;
        assert_eq!(report.action, Action::None);
        assert_eq!(report.outcome, CycleOutcome::QueryFailed(server_error()));
    }

    assert_eq!(cluster.create_calls(), 0);
    assert!(events.kinds().iter().all(|kind| *kind == "query_failed"));
}

#[tokio::test]
async fn every_non_not_found_error_fails_open() {
    for err in [server_error(), forbidden(), unreachable()] {
        let cluster = Arc::new(FakeCluster::new());
        cluster.fail_next_get(err.clone());
        let (reconciler, _events) = recording_reconciler(Arc::clone(&cluster), desired());

        let report = reconciler.run_cycle().await;

        assert_eq!(report.observed, ObservedState::QueryFailed(err));
        assert_eq!(cluster.create_calls(), 0);
    }
}

#[tokio::test]
async fn create_requests_always_match_descriptor() {
    let desired = DesiredWorkload::new("data", "orders-db", "pg", "postgres:16")
        .with_env("POSTGRES_PASSWORD", "hunter2");
    let cluster = Arc::new(FakeCluster::new());
    let (reconciler, _events) = recording_reconciler(Arc::clone(&cluster), desired.clone());

    for _ in 0..5 {
        reconciler.run_cycle().await;
        reconciler.run_cycle().await;
        assert!(cluster.delete("data", "orders-db"));
    }

    let requests = cluster.create_requests();
    assert_eq!(requests.len(), 5);
    for request in requests {
        assert_eq!(request, desired.to_object());
        assert_eq!(request.namespace, "data");
        assert_eq!(request.name, "orders-db");
        assert_eq!(request.containers.len(), 1);
        assert_eq!(request.containers[0].image, "postgres:16");
        assert_eq!(request.containers[0].env.len(), 1);
        assert_eq!(request.containers[0].env[0].name, "POSTGRES_PASSWORD");
    }
}

#[tokio::test]
async fn cycle_outcome_depends_only_on_current_observation() {
    // One reconciler with a long history of failures, one fresh.
    let seasoned_cluster = Arc::new(FakeCluster::new());
    let (seasoned, _) = recording_reconciler(Arc::clone(&seasoned_cluster), desired());
    for _ in 0..3 {
        seasoned_cluster.fail_next_get(unreachable());
        seasoned.run_cycle().await;
    }
    for _ in 0..3 {
        seasoned_cluster.fail_next_create(server_error());
        seasoned.run_cycle().await;
    }
    assert_eq!(seasoned_cluster.create_calls(), 3);

    let fresh_cluster = Arc::new(FakeCluster::new());
    let (fresh, _) = recording_reconciler(Arc::clone(&fresh_cluster), desired());

    let seasoned_report = seasoned.run_cycle().await;
    let fresh_report = fresh.run_cycle().await;

    assert_eq!(seasoned_report.observed, fresh_report.observed);
    assert_eq!(seasoned_report.action, fresh_report.action);
    assert_eq!(seasoned_report.outcome, fresh_report.outcome);
    assert_eq!(seasoned_report.outcome, CycleOutcome::Healed);
    assert_eq!(seasoned_cluster.create_calls(), 4);
    assert_eq!(fresh_cluster.create_calls(), 1);
}

#[tokio::test]
async fn failed_heal_is_retried_by_the_next_cycle() {
    let cluster = Arc::new(FakeCluster::new());
    cluster.fail_next_create(forbidden());
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    let first = reconciler.run_cycle().await;
    assert_eq!(first.outcome, CycleOutcome::HealFailed(forbidden()));
    assert!(!cluster.contains("default", "my-postgres"));

    let second = reconciler.run_cycle().await;
    assert_eq!(second.outcome, CycleOutcome::Healed);

    assert_eq!(
        events.kinds(),
        vec!["missing", "heal_failed", "missing", "healed"]
    );
}

#[tokio::test]
async fn duplicate_create_during_propagation_surfaces_conflict() {
    let cluster = Arc::new(FakeCluster::new().with_propagation_lag(1));
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    let first = reconciler.run_cycle().await;
    assert_eq!(first.outcome, CycleOutcome::Healed);

    // The new object is not visible yet, so the cycle tries again.
    let second = reconciler.run_cycle().await;
    assert_eq!(second.observed, ObservedState::Absent);
    match second.outcome {
        CycleOutcome::HealFailed(err) => assert!(err.is_conflict()),
        other => panic!("Expected conflict, got {other:?}"),
    }

    let third = reconciler.run_cycle().await;
    assert_eq!(third.outcome, CycleOutcome::Healthy);
    assert_eq!(cluster.create_calls(), 2);
    assert_eq!(
        events.kinds(),
        vec!["missing", "healed", "missing", "heal_failed", "healthy"]
    );
}

#[tokio::test]
async fn missing_namespace_heals_and_reports_the_create_failure() {
    let cluster = Arc::new(FakeCluster::new());
    cluster.fail_next_create(not_found("default", "default"));
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    let report = reconciler.run_cycle().await;

    assert_eq!(report.action, Action::Heal);
    assert!(matches!(report.outcome, CycleOutcome::HealFailed(ref e) if e.is_not_found()));
    assert_eq!(events.kinds(), vec!["missing", "heal_failed"]);
}

#[tokio::test]
async fn example_scenario() {
    let cluster = Arc::new(FakeCluster::new());
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    // Cycle 1: not found, create succeeds.
    let one = reconciler.run_cycle().await;
    assert_eq!(one.outcome, CycleOutcome::Healed);
    assert_eq!(cluster.create_requests(), vec![desired().to_object()]);

    // Cycle 2: present.
    let two = reconciler.run_cycle().await;
    assert_eq!(two.outcome, CycleOutcome::Healthy);

    // Cycle 3: server error, no create.
    cluster.fail_next_get(server_error());
    let three = reconciler.run_cycle().await;
    assert_eq!(three.outcome, CycleOutcome::QueryFailed(server_error()));
    assert_eq!(cluster.create_calls(), 1);

    let recorded = events.events();
    assert_eq!(recorded.len(), 4);
    match &recorded[3] {
        Event::QueryFailed(failure) => {
            assert_eq!(failure.namespace, "default");
            assert_eq!(failure.name, "my-postgres");
            assert_eq!(failure.error, server_error());
        }
        other => panic!("Expected query failure event, got {other:?}"),
    }
}

#[tokio::test]
async fn observe_reports_without_events_or_healing() {
    let cluster = Arc::new(FakeCluster::new());
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    assert_eq!(reconciler.observe().await, ObservedState::Absent);
    assert_eq!(cluster.create_calls(), 0);
    assert!(events.is_empty());
}

#[tokio::test(start_paused = true)]
async fn run_forever_sleeps_one_period_between_cycles() {
    let cluster = Arc::new(FakeCluster::new().with_workload(desired().to_object()));
    let (reconciler, events) = recording_reconciler(Arc::clone(&cluster), desired());

    // Cycles start at t=0s, 5s and 10s; the timeout fires at 12s.
    let result = tokio::time::timeout(Duration::from_secs(12), reconciler.run_forever()).await;

    assert!(result.is_err(), "run_forever must not return");
    assert_eq!(cluster.get_calls(), 3);
    assert_eq!(events.kinds(), vec!["healthy"; 3]);
}

#[tokio::test(start_paused = true)]
async fn run_forever_heals_a_workload_deleted_mid_run() {
    let cluster = Arc::new(FakeCluster::new().with_workload(desired().to_object()));
    let recorder = RecordingNotifier::new();
    let mut notifiers = NotifierRegistry::new();
    notifiers.register(Box::new(recorder.clone()));
    let reconciler = Reconciler::new(
        cluster.clone(),
        desired(),
        Duration::from_secs(1),
    )
    .expect("reconciler")
    .with_notifiers(notifiers);

    let loop_cluster = Arc::clone(&cluster);
    let deleter = async move {
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(loop_cluster.delete("default", "my-postgres"));
    };

    let _ = tokio::time::timeout(Duration::from_millis(3500), async {
        tokio::join!(reconciler.run_forever(), deleter);
    })
    .await;

    // t=0 healthy, t=1 healthy, deleted at 1.5, t=2 missing+healed, t=3 healthy.
    assert_eq!(
        recorder.kinds(),
        vec!["healthy", "healthy", "missing", "healed", "healthy"]
    );
    assert_eq!(cluster.create_calls(), 1);
    assert!(cluster.contains("default", "my-postgres"));
}
