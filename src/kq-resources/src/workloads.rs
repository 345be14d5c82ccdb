//! Aggregate counting of not-ready workloads across several kinds. A kind
//! whose listing fails is logged and excluded, the other kinds still count.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::error;

use kq_query::{Condition, Field};
use kq_types::ResourceKind;

use crate::legacy::{LegacyRegistry, STATUS};
use crate::status::DerivedStatus;

const NOT_READY: [(ResourceKind, DerivedStatus); 4] = [
    (ResourceKind::Deployments, DerivedStatus::Updating),
    (ResourceKind::StatefulSets, DerivedStatus::Updating),
    (ResourceKind::DaemonSets, DerivedStatus::Updating),
    (ResourceKind::Jobs, DerivedStatus::Failed),
];

#[derive(Debug, Serialize)]
pub struct WorkloadCounts {
    pub namespace: String,
    #[serde(rename = "data")]
    pub count: BTreeMap<&'static str, usize>,
}

pub fn count_abnormal_workloads(registry: &LegacyRegistry, namespace: &str) -> WorkloadCounts {
    let mut count = BTreeMap::new();

    for (kind, not_ready) in NOT_READY {
        let conditions = Condition::default().with_match(STATUS, not_ready.as_str());
        match registry.list(
            namespace,
            kind,
            &conditions,
            &Field::CreateTime,
            false,
            -1,
            0,
        ) {
            Ok(response) => {
                count.insert(kind.as_str(), response.total_count);
            }
            Err(err) => {
                error!(kind = kind.as_str(), %err, "workload count skipped");
            }
        }
    }

    WorkloadCounts {
        namespace: namespace.to_owned(),
        count,
    }
}
