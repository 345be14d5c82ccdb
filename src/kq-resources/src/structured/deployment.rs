use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Field, Filter, Query};
use kq_types::app::deployment::DeploymentSpec;
use kq_types::{Object, Resource, ResourceKind};

use super::{default_list, default_meta_compare, default_meta_filter, Lister};
use crate::error::Error;
use crate::response::ListResult;
use crate::status::{deployment_status, deployment_update_time};

pub struct DeploymentLister {
    store: Store<DeploymentSpec>,
}

impl DeploymentLister {
    pub fn new(store: Store<DeploymentSpec>) -> Self {
        Self { store }
    }

    fn compare(
        left: &Object<DeploymentSpec>,
        right: &Object<DeploymentSpec>,
        field: &Field,
    ) -> Ordering {
        match field {
            Field::UpdateTime => deployment_update_time(left)
                .cmp(&deployment_update_time(right))
                .then_with(|| left.metadata.namespace.cmp(&right.metadata.namespace))
                .then_with(|| left.metadata.name.cmp(&right.metadata.name)),
            _ => default_meta_compare(&left.metadata, &right.metadata, field),
        }
    }

    fn filter(deployment: &Object<DeploymentSpec>, filter: &Filter) -> bool {
        match &filter.field {
            Field::Status => deployment_status(deployment).as_str() == filter.value,
            _ => default_meta_filter(&deployment.metadata, filter),
        }
    }
}

impl Lister for DeploymentLister {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::Deployment)
            .map_err(|err| Error::from_lookup(ResourceKind::Deployments, namespace, name, err))
    }

    fn list(&self, namespace: &str, query: &Query) -> Result<ListResult, Error> {
        let deployments = self.store.list(namespace, &query.label_selector())?;
        Ok(default_list(
            deployments,
            query,
            Self::compare,
            Self::filter,
            Resource::Deployment,
        ))
    }
}
