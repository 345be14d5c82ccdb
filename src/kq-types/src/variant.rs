use serde::Serialize;

use crate::app::daemon_set::DaemonSetSpec;
use crate::app::deployment::DeploymentSpec;
use crate::app::stateful_set::StatefulSetSpec;
use crate::autoscale::hpa::HorizontalPodAutoscalerSpec;
use crate::batch::cron_job::CronJobSpec;
use crate::batch::job::JobSpec;
use crate::core::config_map::ConfigMapSpec;
use crate::core::namespace::NamespaceSpec;
use crate::core::node::NodeSpec;
use crate::core::pod::PodSpec;
use crate::core::secret::SecretSpec;
use crate::core::service::ServiceSpec;
use crate::net::ingress::IngressSpec;
use crate::net::network_policy::NetworkPolicySpec;
use crate::rbac::cluster_role::ClusterRoleSpec;
use crate::rbac::role::RoleSpec;
use crate::Object;
use crate::ObjectMeta;
use crate::ResourceKind;

/// closed sum over every kind the engine serves,
/// each variant already carries its api version and kind on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Resource {
    ConfigMap(Object<ConfigMapSpec>),
    Secret(Object<SecretSpec>),
    Pod(Object<PodSpec>),
    Job(Object<JobSpec>),
    CronJob(Object<CronJobSpec>),
    Deployment(Object<DeploymentSpec>),
    DaemonSet(Object<DaemonSetSpec>),
    StatefulSet(Object<StatefulSetSpec>),
    Service(Object<ServiceSpec>),
    Ingress(Object<IngressSpec>),
    Namespace(Object<NamespaceSpec>),
    Node(Object<NodeSpec>),
    ClusterRole(Object<ClusterRoleSpec>),
    Role(Object<RoleSpec>),
    HorizontalPodAutoscaler(Object<HorizontalPodAutoscalerSpec>),
    NetworkPolicy(Object<NetworkPolicySpec>),
}

impl Resource {
    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Self::ConfigMap(item) => &item.metadata,
            Self::Secret(item) => &item.metadata,
            Self::Pod(item) => &item.metadata,
            Self::Job(item) => &item.metadata,
            Self::CronJob(item) => &item.metadata,
            Self::Deployment(item) => &item.metadata,
            Self::DaemonSet(item) => &item.metadata,
            Self::StatefulSet(item) => &item.metadata,
            Self::Service(item) => &item.metadata,
            Self::Ingress(item) => &item.metadata,
            Self::Namespace(item) => &item.metadata,
            Self::Node(item) => &item.metadata,
            Self::ClusterRole(item) => &item.metadata,
            Self::Role(item) => &item.metadata,
            Self::HorizontalPodAutoscaler(item) => &item.metadata,
            Self::NetworkPolicy(item) => &item.metadata,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::ConfigMap(_) => ResourceKind::ConfigMaps,
            Self::Secret(_) => ResourceKind::Secrets,
            Self::Pod(_) => ResourceKind::Pods,
            Self::Job(_) => ResourceKind::Jobs,
            Self::CronJob(_) => ResourceKind::CronJobs,
            Self::Deployment(_) => ResourceKind::Deployments,
            Self::DaemonSet(_) => ResourceKind::DaemonSets,
            Self::StatefulSet(_) => ResourceKind::StatefulSets,
            Self::Service(_) => ResourceKind::Services,
            Self::Ingress(_) => ResourceKind::Ingresses,
            Self::Namespace(_) => ResourceKind::Namespaces,
            Self::Node(_) => ResourceKind::Nodes,
            Self::ClusterRole(_) => ResourceKind::ClusterRoles,
            Self::Role(_) => ResourceKind::Roles,
            Self::HorizontalPodAutoscaler(_) => ResourceKind::HorizontalPodAutoscalers,
            Self::NetworkPolicy(_) => ResourceKind::NetworkPolicies,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata().namespace
    }
}

#[cfg(test)]
mod test {

    use crate::batch::job::JobSpec;
    use crate::core::node::NodeSpec;
    use crate::Object;
    use crate::ResourceKind;

    use super::Resource;

    #[test]
    fn test_variant_accessors() {
        let job = Resource::Job(Object::new("compact", JobSpec::default()));
        assert_eq!(job.kind(), ResourceKind::Jobs);
        assert_eq!(job.name(), "compact");
        assert_eq!(job.namespace(), "");

        let node = Resource::Node(Object::new("worker-0", NodeSpec::default()));
        assert_eq!(node.kind(), ResourceKind::Nodes);
        assert!(node.kind().is_cluster_scoped());
    }

    #[test]
    fn test_variant_serialize_wire_kind() {
        let job = Resource::Job(Object::new("compact", JobSpec::default()));
        let value = serde_json::to_value(&job).expect("serialize");
        assert_eq!(value["kind"], "Job");
        assert_eq!(value["apiVersion"], "batch/v1");
        assert_eq!(value["metadata"]["name"], "compact");
    }
}
