use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::core::secret::SecretSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{filter_and_sort, meta_compare, meta_exact_match, meta_fuzzy_match, Accessor};
use crate::error::Error;

const TYPE: &str = "type";

pub struct SecretAccessor {
    store: Store<SecretSpec>,
}

impl SecretAccessor {
    pub fn new(store: Store<SecretSpec>) -> Self {
        Self { store }
    }

    fn matches(key: &str, value: &str, item: &Object<SecretSpec>) -> bool {
        match key {
            TYPE => item.spec.ty == value,
            _ => meta_exact_match(key, value, &item.metadata),
        }
    }
}

impl Accessor for SecretAccessor {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::Secret)
            .map_err(|err| Error::from_lookup(ResourceKind::Secrets, namespace, name, err))
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
            |key, value, item: &Object<SecretSpec>| meta_fuzzy_match(key, value, &item.metadata),
            |left, right, field| meta_compare(&left.metadata, &right.metadata, field),
            order_by,
            reverse,
        );
        Ok(result.into_iter().map(Resource::Secret).collect())
    }
}
