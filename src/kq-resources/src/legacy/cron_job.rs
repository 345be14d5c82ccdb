use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::batch::cron_job::CronJobSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{
    filter_and_sort, meta_compare, meta_exact_match, meta_fuzzy_match, Accessor, STATUS,
};
use crate::error::Error;
use crate::status::cron_job_status;

pub struct CronJobAccessor {
    store: Store<CronJobSpec>,
}

impl CronJobAccessor {
    pub fn new(store: Store<CronJobSpec>) -> Self {
        Self { store }
    }

    fn matches(key: &str, value: &str, item: &Object<CronJobSpec>) -> bool {
        match key {
            STATUS => cron_job_status(item).as_str() == value,
            _ => meta_exact_match(key, value, &item.metadata),
        }
    }

    /// a cron job that never fired orders before every scheduled one
    fn compare(
        left: &Object<CronJobSpec>,
        right: &Object<CronJobSpec>,
        order_by: &Field,
    ) -> Ordering {
        match order_by {
            Field::LastScheduleTime => left
                .status
                .last_schedule_time
                .cmp(&right.status.last_schedule_time)
                .then_with(|| left.metadata.namespace.cmp(&right.metadata.namespace))
                .then_with(|| left.metadata.name.cmp(&right.metadata.name)),
            _ => meta_compare(&left.metadata, &right.metadata, order_by),
        }
    }
}

impl Accessor for CronJobAccessor {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::CronJob)
            .map_err(|err| Error::from_lookup(ResourceKind::CronJobs, namespace, name, err))
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
            |key, value, item: &Object<CronJobSpec>| meta_fuzzy_match(key, value, &item.metadata),
            Self::compare,
            order_by,
            reverse,
        );
        Ok(result.into_iter().map(Resource::CronJob).collect())
    }
}
