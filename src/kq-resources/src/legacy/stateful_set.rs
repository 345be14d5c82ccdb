use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::app::stateful_set::StatefulSetSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{
    filter_and_sort, meta_compare, meta_exact_match, meta_fuzzy_match, Accessor, STATUS,
};
use crate::error::Error;
use crate::status::stateful_set_status;

pub struct StatefulSetAccessor {
    store: Store<StatefulSetSpec>,
}

impl StatefulSetAccessor {
    pub fn new(store: Store<StatefulSetSpec>) -> Self {
        Self { store }
    }

    fn matches(key: &str, value: &str, item: &Object<StatefulSetSpec>) -> bool {
        match key {
            STATUS => stateful_set_status(item).as_str() == value,
            _ => meta_exact_match(key, value, &item.metadata),
        }
    }
}

impl Accessor for StatefulSetAccessor {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::StatefulSet)
            .map_err(|err| Error::from_lookup(ResourceKind::StatefulSets, namespace, name, err))
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
            |key, value, item: &Object<StatefulSetSpec>| {
                meta_fuzzy_match(key, value, &item.metadata)
            },
            |left, right, field| meta_compare(&left.metadata, &right.metadata, field),
            order_by,
            reverse,
        );
        Ok(result.into_iter().map(Resource::StatefulSet).collect())
    }
}
