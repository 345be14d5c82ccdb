use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::app::daemon_set::DaemonSetSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{
    filter_and_sort, meta_compare, meta_exact_match, meta_fuzzy_match, Accessor, STATUS,
};
use crate::error::Error;
use crate::status::daemon_set_status;

pub struct DaemonSetAccessor {
    store: Store<DaemonSetSpec>,
}

impl DaemonSetAccessor {
    pub fn new(store: Store<DaemonSetSpec>) -> Self {
        Self { store }
    }

    fn matches(key: &str, value: &str, item: &Object<DaemonSetSpec>) -> bool {
        match key {
            STATUS => daemon_set_status(item).as_str() == value,
            _ => meta_exact_match(key, value, &item.metadata),
        }
    }
}

impl Accessor for DaemonSetAccessor {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::DaemonSet)
            .map_err(|err| Error::from_lookup(ResourceKind::DaemonSets, namespace, name, err))
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
            |key, value, item: &Object<DaemonSetSpec>| {
                meta_fuzzy_match(key, value, &item.metadata)
            },
            |left, right, field| meta_compare(&left.metadata, &right.metadata, field),
            order_by,
            reverse,
        );
        Ok(result.into_iter().map(Resource::DaemonSet).collect())
    }
}
