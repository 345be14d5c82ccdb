use std::collections::BTreeMap;

use kq_cache::ClusterCache;
use kq_query::Query;
use kq_types::{Resource, ResourceKind};

use super::daemon_set::DaemonSetLister;
use super::deployment::DeploymentLister;
use super::job::JobLister;
use super::pod::PodLister;
use super::stateful_set::StatefulSetLister;
use super::{Lister, MetaLister};
use crate::error::Error;
use crate::response::ListResult;

/// immutable kind table of the structured generation
pub struct StructuredRegistry {
    listers: BTreeMap<ResourceKind, Box<dyn Lister>>,
}

impl StructuredRegistry {
    pub fn new(cache: &ClusterCache) -> Self {
        let mut listers: BTreeMap<ResourceKind, Box<dyn Lister>> = BTreeMap::new();

        listers.insert(
            ResourceKind::Deployments,
            Box::new(DeploymentLister::new(cache.deployments.clone())),
        );
        listers.insert(
            ResourceKind::DaemonSets,
            Box::new(DaemonSetLister::new(cache.daemon_sets.clone())),
        );
        listers.insert(
            ResourceKind::StatefulSets,
            Box::new(StatefulSetLister::new(cache.stateful_sets.clone())),
        );
        listers.insert(
            ResourceKind::Services,
            Box::new(MetaLister::new(
                cache.services.clone(),
                ResourceKind::Services,
                Resource::Service,
            )),
        );
        listers.insert(
            ResourceKind::Namespaces,
            Box::new(MetaLister::new(
                cache.namespaces.clone(),
                ResourceKind::Namespaces,
                Resource::Namespace,
            )),
        );
        listers.insert(
            ResourceKind::ConfigMaps,
            Box::new(MetaLister::new(
                cache.config_maps.clone(),
                ResourceKind::ConfigMaps,
                Resource::ConfigMap,
            )),
        );
        listers.insert(
            ResourceKind::Pods,
            Box::new(PodLister::new(cache.pods.clone(), cache.services.clone())),
        );
        listers.insert(
            ResourceKind::Nodes,
            Box::new(MetaLister::new(
                cache.nodes.clone(),
                ResourceKind::Nodes,
                Resource::Node,
            )),
        );
        listers.insert(
            ResourceKind::Ingresses,
            Box::new(MetaLister::new(
                cache.ingresses.clone(),
                ResourceKind::Ingresses,
                Resource::Ingress,
            )),
        );
        listers.insert(
            ResourceKind::NetworkPolicies,
            Box::new(MetaLister::new(
                cache.network_policies.clone(),
                ResourceKind::NetworkPolicies,
                Resource::NetworkPolicy,
            )),
        );
        listers.insert(
            ResourceKind::Jobs,
            Box::new(JobLister::new(cache.jobs.clone())),
        );

        Self { listers }
    }

    fn lister(&self, kind: ResourceKind) -> Result<&dyn Lister, Error> {
        self.listers
            .get(&kind)
            .map(|lister| &**lister)
            .ok_or_else(|| Error::not_supported(kind.as_str()))
    }

    pub fn get(&self, kind: ResourceKind, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.lister(kind)?.get(namespace, name)
    }

    pub fn list(
        &self,
        kind: ResourceKind,
        namespace: &str,
        query: &Query,
    ) -> Result<ListResult, Error> {
        self.lister(kind)?.list(namespace, query)
    }
}
