use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Field, Filter, Query};
use kq_types::app::daemon_set::DaemonSetSpec;
use kq_types::{Object, Resource, ResourceKind};

use super::{default_list, default_meta_compare, default_meta_filter, Lister};
use crate::error::Error;
use crate::response::ListResult;
use crate::status::daemon_set_status;

pub struct DaemonSetLister {
    store: Store<DaemonSetSpec>,
}

impl DaemonSetLister {
    pub fn new(store: Store<DaemonSetSpec>) -> Self {
        Self { store }
    }

    fn compare(
        left: &Object<DaemonSetSpec>,
        right: &Object<DaemonSetSpec>,
        field: &Field,
    ) -> Ordering {
        default_meta_compare(&left.metadata, &right.metadata, field)
    }

    fn filter(daemon_set: &Object<DaemonSetSpec>, filter: &Filter) -> bool {
        match &filter.field {
            Field::Status => daemon_set_status(daemon_set).as_str() == filter.value,
            _ => default_meta_filter(&daemon_set.metadata, filter),
        }
    }
}

impl Lister for DaemonSetLister {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::DaemonSet)
            .map_err(|err| Error::from_lookup(ResourceKind::DaemonSets, namespace, name, err))
    }

    fn list(&self, namespace: &str, query: &Query) -> Result<ListResult, Error> {
        let daemon_sets = self.store.list(namespace, &query.label_selector())?;
        Ok(default_list(
            daemon_sets,
            query,
            Self::compare,
            Self::filter,
            Resource::DaemonSet,
        ))
    }
}
