use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Field, Filter, Query};
use kq_types::core::pod::PodSpec;
use kq_types::core::service::ServiceSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{default_list, default_meta_compare, default_meta_filter, Lister};
use crate::error::Error;
use crate::response::ListResult;

const FIELD_NODE_NAME: &str = "nodeName";
const FIELD_PVC_NAME: &str = "pvcName";
const FIELD_SERVICE_NAME: &str = "serviceName";

pub struct PodLister {
    pods: Store<PodSpec>,
    services: Store<ServiceSpec>,
}

impl PodLister {
    pub fn new(pods: Store<PodSpec>, services: Store<ServiceSpec>) -> Self {
        Self { pods, services }
    }

    fn compare(left: &Object<PodSpec>, right: &Object<PodSpec>, field: &Field) -> Ordering {
        default_meta_compare(&left.metadata, &right.metadata, field)
    }

    fn filter(&self, pod: &Object<PodSpec>, filter: &Filter) -> bool {
        match &filter.field {
            Field::Custom(field) if field == FIELD_NODE_NAME => {
                pod.spec.node_name.as_deref() == Some(filter.value.as_str())
            }
            Field::Custom(field) if field == FIELD_PVC_NAME => {
                pod_binds_claim(pod, &filter.value)
            }
            Field::Custom(field) if field == FIELD_SERVICE_NAME => {
                self.pod_in_service(pod, &filter.value)
            }
            _ => default_meta_filter(&pod.metadata, filter),
        }
    }

    /// membership in a named service, resolved by fetching the service and
    /// testing its selector, an empty selector matches nothing
    fn pod_in_service(&self, pod: &Object<PodSpec>, service_name: &str) -> bool {
        let service = match self.services.get(&pod.metadata.namespace, service_name) {
            Ok(service) => service,
            Err(_) => return false,
        };
        let selector = LabelSelector {
            match_labels: service.spec.selector.clone(),
        };
        if selector.is_empty() {
            return false;
        }
        selector.matches(&pod.metadata.labels)
    }
}

fn pod_binds_claim(pod: &Object<PodSpec>, claim_name: &str) -> bool {
    pod.spec.volumes.iter().any(|volume| {
        volume
            .persistent_volume_claim
            .as_ref()
            .map(|claim| claim.claim_name == claim_name)
            .unwrap_or(false)
    })
}

impl Lister for PodLister {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.pods
            .get(namespace, name)
            .map(Resource::Pod)
            .map_err(|err| Error::from_lookup(ResourceKind::Pods, namespace, name, err))
    }

    fn list(&self, namespace: &str, query: &Query) -> Result<ListResult, Error> {
        let pods = self.pods.list(namespace, &query.label_selector())?;
        Ok(default_list(
            pods,
            query,
            Self::compare,
            |pod, filter| self.filter(pod, filter),
            Resource::Pod,
        ))
    }
}
