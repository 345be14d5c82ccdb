use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Field, Filter, Query};
use kq_types::batch::job::JobSpec;
use kq_types::{Object, Resource, ResourceKind};

use super::{default_list, default_meta_compare, default_meta_filter, Lister};
use crate::error::Error;
use crate::response::ListResult;
use crate::status::{job_status, job_update_time};

pub struct JobLister {
    store: Store<JobSpec>,
}

impl JobLister {
    pub fn new(store: Store<JobSpec>) -> Self {
        Self { store }
    }

    fn compare(left: &Object<JobSpec>, right: &Object<JobSpec>, field: &Field) -> Ordering {
        match field {
            Field::UpdateTime => job_update_time(left)
                .cmp(&job_update_time(right))
                .then_with(|| left.metadata.namespace.cmp(&right.metadata.namespace))
                .then_with(|| left.metadata.name.cmp(&right.metadata.name)),
            _ => default_meta_compare(&left.metadata, &right.metadata, field),
        }
    }

    fn filter(job: &Object<JobSpec>, filter: &Filter) -> bool {
        match &filter.field {
            Field::Status => job_status(job).as_str() == filter.value,
            _ => default_meta_filter(&job.metadata, filter),
        }
    }
}

impl Lister for JobLister {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::Job)
            .map_err(|err| Error::from_lookup(ResourceKind::Jobs, namespace, name, err))
    }

    fn list(&self, namespace: &str, query: &Query) -> Result<ListResult, Error> {
        let jobs = self.store.list(namespace, &query.label_selector())?;
        Ok(default_list(
            jobs,
            query,
            Self::compare,
            Self::filter,
            Resource::Job,
        ))
    }
}
