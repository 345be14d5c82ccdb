use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// api group/version/name metadata of a kind
#[derive(Debug, PartialEq, Eq)]
pub struct Kind {
    pub group: &'static str,
    pub version: &'static str,
    pub names: KindNames,
}

#[derive(Debug, PartialEq, Eq)]
pub struct KindNames {
    pub kind: &'static str,
    pub plural: &'static str,
    pub singular: &'static str,
}

/// closed set of kinds served by the query engine, keyed by plural name
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    ConfigMaps,
    Secrets,
    Pods,
    Jobs,
    CronJobs,
    Deployments,
    DaemonSets,
    StatefulSets,
    Services,
    Ingresses,
    Namespaces,
    Nodes,
    ClusterRoles,
    Roles,
    HorizontalPodAutoscalers,
    NetworkPolicies,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 16] = [
        Self::ConfigMaps,
        Self::Secrets,
        Self::Pods,
        Self::Jobs,
        Self::CronJobs,
        Self::Deployments,
        Self::DaemonSets,
        Self::StatefulSets,
        Self::Services,
        Self::Ingresses,
        Self::Namespaces,
        Self::Nodes,
        Self::ClusterRoles,
        Self::Roles,
        Self::HorizontalPodAutoscalers,
        Self::NetworkPolicies,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigMaps => "configmaps",
            Self::Secrets => "secrets",
            Self::Pods => "pods",
            Self::Jobs => "jobs",
            Self::CronJobs => "cronjobs",
            Self::Deployments => "deployments",
            Self::DaemonSets => "daemonsets",
            Self::StatefulSets => "statefulsets",
            Self::Services => "services",
            Self::Ingresses => "ingresses",
            Self::Namespaces => "namespaces",
            Self::Nodes => "nodes",
            Self::ClusterRoles => "clusterroles",
            Self::Roles => "roles",
            Self::HorizontalPodAutoscalers => "horizontalpodautoscalers",
            Self::NetworkPolicies => "networkpolicies",
        }
    }

    pub fn parse(resource: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == resource)
    }

    pub const fn is_cluster_scoped(&self) -> bool {
        matches!(self, Self::Nodes | Self::Namespaces | Self::ClusterRoles)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
