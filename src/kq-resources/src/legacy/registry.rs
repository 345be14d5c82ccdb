use std::collections::BTreeMap;

use tracing::{debug, error};

use kq_cache::ClusterCache;
use kq_query::{Condition, Field, Pagination};
use kq_types::{Resource, ResourceKind};

use super::cron_job::CronJobAccessor;
use super::daemon_set::DaemonSetAccessor;
use super::deployment::DeploymentAccessor;
use super::hpa::HpaAccessor;
use super::job::JobAccessor;
use super::secret::SecretAccessor;
use super::stateful_set::StatefulSetAccessor;
use super::{Accessor, MetaAccessor};
use crate::error::Error;
use crate::response::PageableResponse;

/// immutable kind table of the legacy generation, built once from the
/// cache and handed to request handlers
pub struct LegacyRegistry {
    accessors: BTreeMap<ResourceKind, Box<dyn Accessor>>,
}

impl LegacyRegistry {
    pub fn new(cache: &ClusterCache) -> Self {
        let mut accessors: BTreeMap<ResourceKind, Box<dyn Accessor>> = BTreeMap::new();

        accessors.insert(
            ResourceKind::ConfigMaps,
            Box::new(MetaAccessor::new(
                cache.config_maps.clone(),
                ResourceKind::ConfigMaps,
                Resource::ConfigMap,
            )),
        );
        accessors.insert(
            ResourceKind::Secrets,
            Box::new(SecretAccessor::new(cache.secrets.clone())),
        );
        accessors.insert(
            ResourceKind::Pods,
            Box::new(MetaAccessor::new(
                cache.pods.clone(),
                ResourceKind::Pods,
                Resource::Pod,
            )),
        );
        accessors.insert(
            ResourceKind::Jobs,
            Box::new(JobAccessor::new(cache.jobs.clone())),
        );
        accessors.insert(
            ResourceKind::CronJobs,
            Box::new(CronJobAccessor::new(cache.cron_jobs.clone())),
        );
        accessors.insert(
            ResourceKind::Deployments,
            Box::new(DeploymentAccessor::new(cache.deployments.clone())),
        );
        accessors.insert(
            ResourceKind::DaemonSets,
            Box::new(DaemonSetAccessor::new(cache.daemon_sets.clone())),
        );
        accessors.insert(
            ResourceKind::StatefulSets,
            Box::new(StatefulSetAccessor::new(cache.stateful_sets.clone())),
        );
        accessors.insert(
            ResourceKind::Services,
            Box::new(MetaAccessor::new(
                cache.services.clone(),
                ResourceKind::Services,
                Resource::Service,
            )),
        );
        accessors.insert(
            ResourceKind::Ingresses,
            Box::new(MetaAccessor::new(
                cache.ingresses.clone(),
                ResourceKind::Ingresses,
                Resource::Ingress,
            )),
        );
        accessors.insert(
            ResourceKind::Roles,
            Box::new(MetaAccessor::new(
                cache.roles.clone(),
                ResourceKind::Roles,
                Resource::Role,
            )),
        );
        accessors.insert(
            ResourceKind::HorizontalPodAutoscalers,
            Box::new(HpaAccessor::new(cache.horizontal_pod_autoscalers.clone())),
        );

        accessors.insert(
            ResourceKind::Nodes,
            Box::new(MetaAccessor::new(
                cache.nodes.clone(),
                ResourceKind::Nodes,
                Resource::Node,
            )),
        );
        accessors.insert(
            ResourceKind::Namespaces,
            Box::new(MetaAccessor::new(
                cache.namespaces.clone(),
                ResourceKind::Namespaces,
                Resource::Namespace,
            )),
        );
        accessors.insert(
            ResourceKind::ClusterRoles,
            Box::new(MetaAccessor::new(
                cache.cluster_roles.clone(),
                ResourceKind::ClusterRoles,
                Resource::ClusterRole,
            )),
        );

        Self { accessors }
    }

    fn accessor(&self, namespace: &str, kind: ResourceKind) -> Result<&dyn Accessor, Error> {
        if !namespace.is_empty() && kind.is_cluster_scoped() {
            return Err(Error::not_supported(kind.as_str()));
        }
        self.accessors
            .get(&kind)
            .map(|accessor| &**accessor)
            .ok_or_else(|| Error::not_supported(kind.as_str()))
    }

    pub fn get(&self, namespace: &str, kind: ResourceKind, name: &str) -> Result<Resource, Error> {
        self.accessor(namespace, kind)?
            .get(namespace, name)
            .map_err(|err| {
                error!(kind = kind.as_str(), namespace, name, %err, "resource lookup failed");
                err
            })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn list(
        &self,
        namespace: &str,
        kind: ResourceKind,
        conditions: &Condition,
        order_by: &Field,
        reverse: bool,
        limit: i64,
        offset: i64,
    ) -> Result<PageableResponse, Error> {
        let accessor = self.accessor(namespace, kind)?;
        let mut result = accessor.search(namespace, conditions, order_by, reverse)?;

        let total_count = result.len();
        let (start, end) = Pagination::new(limit, offset).bounds(total_count);
        debug!(
            kind = kind.as_str(),
            total_count,
            page_len = end - start,
            "listed resources"
        );

        Ok(PageableResponse {
            items: result.drain(start..end).collect(),
            total_count,
        })
    }
}
