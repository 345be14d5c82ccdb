use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::batch::job::JobSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{
    controlled_by, filter_and_sort, meta_compare, meta_exact_match, meta_fuzzy_match, Accessor,
    STATUS,
};
use crate::error::Error;
use crate::status::{job_status, job_update_time};

const INCLUDE_CRON_JOB: &str = "includeCronJob";
const INCLUDE_S2I_RUN: &str = "includeS2iRun";
const CRON_JOB_KIND: &str = "CronJob";
const S2I_RUN_KIND: &str = "S2iRun";

pub struct JobAccessor {
    store: Store<JobSpec>,
}

impl JobAccessor {
    pub fn new(store: Store<JobSpec>) -> Self {
        Self { store }
    }

    fn matches(key: &str, value: &str, item: &Object<JobSpec>) -> bool {
        match key {
            STATUS => job_status(item).as_str() == value,
            INCLUDE_CRON_JOB => {
                !(value == "false"
                    && controlled_by(&item.metadata.owner_references, CRON_JOB_KIND, ""))
            }
            INCLUDE_S2I_RUN => {
                !(value == "false"
                    && controlled_by(&item.metadata.owner_references, S2I_RUN_KIND, ""))
            }
            _ => meta_exact_match(key, value, &item.metadata),
        }
    }

    fn compare(left: &Object<JobSpec>, right: &Object<JobSpec>, order_by: &Field) -> Ordering {
        match order_by {
            Field::UpdateTime => job_update_time(left)
                .cmp(&job_update_time(right))
                .then_with(|| left.metadata.namespace.cmp(&right.metadata.namespace))
                .then_with(|| left.metadata.name.cmp(&right.metadata.name)),
            _ => meta_compare(&left.metadata, &right.metadata, order_by),
        }
    }
}

impl Accessor for JobAccessor {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::Job)
            .map_err(|err| Error::from_lookup(ResourceKind::Jobs, namespace, name, err))
    }

    fn search(
        &self,
        namespace: &str,
        conditions: &Condition,
        order_by: &Field,
        reverse: bool,
    ) -> Result<Vec<Resource>, Error> {
        let items = self.store.list(namespace, &LabelSelector::default())?;
        let result = filter_and_sort(
            items,
            conditions,
            Self::matches,
            |key, value, item: &Object<JobSpec>| meta_fuzzy_match(key, value, &item.metadata),
            Self::compare,
            order_by,
            reverse,
        );
        Ok(result.into_iter().map(Resource::Job).collect())
    }
}

#[cfg(test)]
mod test {

    use kq_types::batch::job::{JobSpec, JobStatus};
    use kq_types::{Object, ObjectMeta, OwnerReference};

    use super::JobAccessor;
    use super::{CRON_JOB_KIND, INCLUDE_CRON_JOB, STATUS};

    fn owned_job() -> Object<JobSpec> {
        Object::with_metadata(
            ObjectMeta::new("nightly-123", "ns1")
                .owned_by(OwnerReference::controlled(CRON_JOB_KIND, "nightly")),
            JobSpec::default(),
        )
    }

    #[test]
    fn test_owner_kind_exclusion() {
        let item = owned_job();
        assert!(!JobAccessor::matches(INCLUDE_CRON_JOB, "false", &item));
        assert!(JobAccessor::matches(INCLUDE_CRON_JOB, "true", &item));

        let standalone = Object::new("adhoc", JobSpec::default());
        assert!(JobAccessor::matches(INCLUDE_CRON_JOB, "false", &standalone));
    }

    #[test]
    fn test_status_intercept() {
        let item = owned_job().set_status(JobStatus {
            failed: 1,
            ..Default::default()
        });
        assert!(JobAccessor::matches(STATUS, "failed", &item));
        assert!(!JobAccessor::matches(STATUS, "running", &item));
    }
}
