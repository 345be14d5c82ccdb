use kq_types::app::daemon_set::DaemonSetSpec;
use kq_types::app::deployment::DeploymentSpec;
use kq_types::app::stateful_set::StatefulSetSpec;
use kq_types::autoscale::hpa::HorizontalPodAutoscalerSpec;
use kq_types::batch::cron_job::CronJobSpec;
use kq_types::batch::job::JobSpec;
use kq_types::core::config_map::ConfigMapSpec;
use kq_types::core::namespace::NamespaceSpec;
use kq_types::core::node::NodeSpec;
use kq_types::core::pod::PodSpec;
use kq_types::core::secret::SecretSpec;
use kq_types::core::service::ServiceSpec;
use kq_types::net::ingress::IngressSpec;
use kq_types::net::network_policy::NetworkPolicySpec;
use kq_types::rbac::cluster_role::ClusterRoleSpec;
use kq_types::rbac::role::RoleSpec;

use crate::Store;

/// one store per kind, built once and shared with every accessor,
/// stores clone cheaply
#[derive(Debug, Default, Clone)]
pub struct ClusterCache {
    pub config_maps: Store<ConfigMapSpec>,
    pub secrets: Store<SecretSpec>,
    pub pods: Store<PodSpec>,
    pub jobs: Store<JobSpec>,
    pub cron_jobs: Store<CronJobSpec>,
    pub deployments: Store<DeploymentSpec>,
    pub daemon_sets: Store<DaemonSetSpec>,
    pub stateful_sets: Store<StatefulSetSpec>,
    pub services: Store<ServiceSpec>,
    pub ingresses: Store<IngressSpec>,
    pub namespaces: Store<NamespaceSpec>,
    pub nodes: Store<NodeSpec>,
    pub cluster_roles: Store<ClusterRoleSpec>,
    pub roles: Store<RoleSpec>,
    pub horizontal_pod_autoscalers: Store<HorizontalPodAutoscalerSpec>,
    pub network_policies: Store<NetworkPolicySpec>,
}

impl ClusterCache {
    pub fn new() -> Self {
        Self::default()
    }
}
