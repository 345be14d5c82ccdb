use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::app::deployment::DeploymentSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{
    filter_and_sort, meta_compare, meta_exact_match, meta_fuzzy_match, Accessor, STATUS,
};
use crate::error::Error;
use crate::status::{deployment_status, deployment_update_time};

pub struct DeploymentAccessor {
    store: Store<DeploymentSpec>,
}

impl DeploymentAccessor {
    pub fn new(store: Store<DeploymentSpec>) -> Self {
        Self { store }
    }

    fn matches(key: &str, value: &str, item: &Object<DeploymentSpec>) -> bool {
        match key {
            STATUS => deployment_status(item).as_str() == value,
            _ => meta_exact_match(key, value, &item.metadata),
        }
    }

    fn compare(
        left: &Object<DeploymentSpec>,
        right: &Object<DeploymentSpec>,
        order_by: &Field,
    ) -> Ordering {
        match order_by {
            Field::UpdateTime => deployment_update_time(left)
                .cmp(&deployment_update_time(right))
                .then_with(|| left.metadata.namespace.cmp(&right.metadata.namespace))
                .then_with(|| left.metadata.name.cmp(&right.metadata.name)),
            _ => meta_compare(&left.metadata, &right.metadata, order_by),
        }
    }
}

impl Accessor for DeploymentAccessor {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::Deployment)
            .map_err(|err| Error::from_lookup(ResourceKind::Deployments, namespace, name, err))
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
            |key, value, item: &Object<DeploymentSpec>| {
                meta_fuzzy_match(key, value, &item.metadata)
            },
            Self::compare,
            order_by,
            reverse,
        );
        Ok(result.into_iter().map(Resource::Deployment).collect())
    }
}
