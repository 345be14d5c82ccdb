use chrono::TimeZone;
use chrono::Utc;

use kq_cache::ClusterCache;
use kq_query::{parse_conditions, Condition, Field, Query};
use kq_resources::bridge::ResourceHandler;
use kq_resources::legacy::LegacyRegistry;
use kq_resources::workloads::count_abnormal_workloads;
use kq_resources::Error;
use kq_types::batch::cron_job::CronJobSpec;
use kq_types::batch::job::{JobCondition, JobSpec, JobStatus};
use kq_types::core::secret::SecretSpec;
use kq_types::{Object, ObjectMeta, Resource, ResourceKind};

fn day(d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 7, d, 0, 0, 0).unwrap()
}

/// three jobs in ns1: running, failed and completed, with update times
/// driven by condition probe/transition timestamps
fn seeded_cache() -> ClusterCache {
    let cache = ClusterCache::new();

    let jobs = [
        ("job-active", (1, 0, 0), day(1), None),
        ("job-failed", (0, 1, 0), day(2), Some((day(8), day(4)))),
        ("job-done", (0, 0, 1), day(3), Some((day(5), day(6)))),
    ];
    for (name, (active, failed, succeeded), created, times) in jobs {
        let conditions = match times {
            Some((probe, transition)) => vec![JobCondition {
                last_probe_time: Some(probe),
                last_transition_time: Some(transition),
                ..Default::default()
            }],
            None => vec![],
        };
        let job = Object::with_metadata(
            ObjectMeta::new(name, "ns1").created_at(created),
            JobSpec::default(),
        )
        .set_status(JobStatus {
            active,
            failed,
            succeeded,
            conditions,
            ..Default::default()
        });
        cache.jobs.apply(job).expect("apply job");
    }

    cache
}

fn names(items: &[Resource]) -> Vec<&str> {
    items.iter().map(|item| item.name()).collect()
}

#[test]
fn test_status_condition_selects_single_job() {
    let cache = seeded_cache();
    let registry = LegacyRegistry::new(&cache);

    let conditions = parse_conditions("status=failed").expect("parse");
    let response = registry
        .list("ns1", ResourceKind::Jobs, &conditions, &Field::CreateTime, false, -1, 0)
        .expect("list");

    assert_eq!(response.total_count, 1);
    assert_eq!(names(&response.items), vec!["job-failed"]);
}

#[test]
fn test_order_by_update_time_follows_latest_condition() {
    let cache = seeded_cache();
    let registry = LegacyRegistry::new(&cache);

    // update times: job-active = day 1 (creation only),
    // job-done = day 6 (transition), job-failed = day 8 (probe)
    let response = registry
        .list(
            "ns1",
            ResourceKind::Jobs,
            &Condition::default(),
            &Field::UpdateTime,
            false,
            -1,
            0,
        )
        .expect("list");
    assert_eq!(
        names(&response.items),
        vec!["job-active", "job-done", "job-failed"]
    );

    let reversed = registry
        .list(
            "ns1",
            ResourceKind::Jobs,
            &Condition::default(),
            &Field::UpdateTime,
            true,
            -1,
            0,
        )
        .expect("list");
    assert_eq!(
        names(&reversed.items),
        vec!["job-failed", "job-done", "job-active"]
    );
}

#[test]
fn test_total_count_is_pagination_independent() {
    let cache = seeded_cache();
    let registry = LegacyRegistry::new(&cache);

    for (limit, offset, expected_len) in [(10, 0, 3), (2, 0, 2), (2, 2, 1), (3, 10, 0)] {
        let response = registry
            .list(
                "ns1",
                ResourceKind::Jobs,
                &Condition::default(),
                &Field::CreateTime,
                false,
                limit,
                offset,
            )
            .expect("list");
        assert_eq!(response.total_count, 3);
        assert_eq!(response.items.len(), expected_len);
    }
}

#[test]
fn test_search_is_idempotent_over_a_still_cache() {
    let cache = seeded_cache();
    let registry = LegacyRegistry::new(&cache);

    let first = registry
        .list("ns1", ResourceKind::Jobs, &Condition::default(), &Field::CreateTime, false, -1, 0)
        .expect("list");
    let second = registry
        .list("ns1", ResourceKind::Jobs, &Condition::default(), &Field::CreateTime, false, -1, 0)
        .expect("list");
    assert_eq!(names(&first.items), names(&second.items));
}

#[test]
fn test_creation_ties_break_by_name_and_reverse_with_descending() {
    let cache = ClusterCache::new();
    for name in ["b", "a", "c"] {
        cache
            .jobs
            .apply(Object::with_metadata(
                ObjectMeta::new(name, "ns1").created_at(day(1)),
                JobSpec::default(),
            ))
            .expect("apply");
    }
    let registry = LegacyRegistry::new(&cache);

    let ascending = registry
        .list("ns1", ResourceKind::Jobs, &Condition::default(), &Field::CreateTime, false, -1, 0)
        .expect("list");
    assert_eq!(names(&ascending.items), vec!["a", "b", "c"]);

    // descending swaps the comparator operands, tie-breaks reverse with it
    let descending = registry
        .list("ns1", ResourceKind::Jobs, &Condition::default(), &Field::CreateTime, true, -1, 0)
        .expect("list");
    assert_eq!(names(&descending.items), vec!["c", "b", "a"]);
}

#[test]
fn test_cluster_scoped_kind_rejects_namespace() {
    let cache = ClusterCache::new();
    let registry = LegacyRegistry::new(&cache);

    let err = registry
        .list("ns1", ResourceKind::Nodes, &Condition::default(), &Field::CreateTime, false, -1, 0)
        .expect_err("must reject");
    assert!(err.is_not_supported());

    let err = registry
        .get("ns1", ResourceKind::Nodes, "worker-0")
        .expect_err("must reject");
    assert!(err.is_not_supported());
}

#[test]
fn test_get_not_found() {
    let cache = ClusterCache::new();
    let registry = LegacyRegistry::new(&cache);

    let err = registry
        .get("ns1", ResourceKind::Jobs, "missing")
        .expect_err("absent");
    assert!(err.is_not_found());
}

#[test]
fn test_bridge_lists_legacy_only_kind_through_structured_entrypoint() {
    let cache = seeded_cache();
    for (name, suspended) in [("report", false), ("cleanup", true)] {
        let mut cron = Object::with_metadata(
            ObjectMeta::new(name, "ns1").created_at(day(1)),
            CronJobSpec::default(),
        );
        cron.spec.suspend = Some(suspended);
        cache.cron_jobs.apply(cron).expect("apply");
    }
    let handler = ResourceHandler::new(&cache);

    // cronjobs only exist in the legacy registry
    let query = Query::new().with_filter(Field::Status, "paused");
    let result = handler.list("cronjobs", "ns1", &query).expect("list");
    assert_eq!(result.total_items, 1);
    assert_eq!(names(&result.items), vec!["cleanup"]);

    let all = handler.list("cronjobs", "ns1", &Query::new()).expect("list");
    assert_eq!(all.total_items, 2);
}

#[test]
fn test_bridge_translates_name_filter_to_substring() {
    let cache = seeded_cache();
    cache
        .secrets
        .apply(Object::with_metadata(
            ObjectMeta::new("registry-auth", "ns1").created_at(day(1)),
            SecretSpec::opaque(),
        ))
        .expect("apply");
    cache
        .secrets
        .apply(Object::with_metadata(
            ObjectMeta::new("tls-cert", "ns1").created_at(day(2)),
            SecretSpec::default(),
        ))
        .expect("apply");
    let handler = ResourceHandler::new(&cache);

    let query = Query::new().with_filter(Field::Name, "auth");
    let result = handler.list("secrets", "ns1", &query).expect("list");
    assert_eq!(result.total_items, 1);
    assert_eq!(names(&result.items), vec!["registry-auth"]);
}

#[test]
fn test_bridge_get_falls_back_for_legacy_only_kind() {
    let cache = seeded_cache();
    cache
        .secrets
        .apply(Object::with_metadata(
            ObjectMeta::new("registry-auth", "ns1"),
            SecretSpec::opaque(),
        ))
        .expect("apply");
    let handler = ResourceHandler::new(&cache);

    let secret = handler.get("secrets", "ns1", "registry-auth").expect("get");
    assert_eq!(secret.kind(), ResourceKind::Secrets);

    let job = handler.get("jobs", "ns1", "job-failed").expect("get");
    assert_eq!(job.kind(), ResourceKind::Jobs);

    match handler.get("widgets", "ns1", "x") {
        Err(Error::NotSupported(resource)) => assert_eq!(resource, "widgets"),
        other => panic!("expected NotSupported, got {:?}", other.map(|r| r.kind())),
    }
}

#[test]
fn test_structured_list_pushes_label_selector_down() {
    let cache = seeded_cache();
    let mut labeled = Object::with_metadata(
        ObjectMeta::new("job-labeled", "ns1")
            .set_labels(vec![("app", "etl")])
            .created_at(day(9)),
        JobSpec::default(),
    );
    labeled.status.active = 1;
    cache.jobs.apply(labeled).expect("apply");
    let handler = ResourceHandler::new(&cache);

    let query = Query::from_pairs(vec![("label:app", "etl")]);
    let result = handler.list("jobs", "ns1", &query).expect("list");
    assert_eq!(result.total_items, 1);
    assert_eq!(names(&result.items), vec!["job-labeled"]);
}

#[test]
fn test_legacy_entrypoint_parses_wire_strings() {
    let cache = seeded_cache();
    let handler = ResourceHandler::new(&cache);

    let response = handler
        .list_legacy("jobs", "ns1", "status=failed", "limit=10,page=1", "", false)
        .expect("list");
    assert_eq!(response.total_count, 1);
    assert_eq!(names(&response.items), vec!["job-failed"]);

    // a malformed paging string silently falls back to limit=10, offset=0
    let response = handler
        .list_legacy("jobs", "ns1", "", "bogus", "", false)
        .expect("list");
    assert_eq!(response.total_count, 3);
    assert_eq!(response.items.len(), 3);

    // a malformed condition string is a client error
    let err = handler
        .list_legacy("jobs", "ns1", "bad key=1", "", "", false)
        .expect_err("must fail");
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_abnormal_workload_counts() {
    let cache = seeded_cache();
    let registry = LegacyRegistry::new(&cache);

    let counts = count_abnormal_workloads(&registry, "ns1");
    assert_eq!(counts.count.get("jobs"), Some(&1));
    assert_eq!(counts.count.get("deployments"), Some(&0));
    assert_eq!(counts.count.get("statefulsets"), Some(&0));
    assert_eq!(counts.count.get("daemonsets"), Some(&0));
}
