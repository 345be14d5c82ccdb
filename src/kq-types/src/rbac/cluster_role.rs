use serde::Deserialize;
use serde::Serialize;

use super::PolicyRule;
use crate::{EmptyStatus, Kind, KindNames, Spec};

const CLUSTER_ROLE_API: Kind = Kind {
    group: "rbac.authorization.k8s.io",
    version: "v1",
    names: KindNames {
        kind: "ClusterRole",
        plural: "clusterroles",
        singular: "clusterrole",
    },
};

impl Spec for ClusterRoleSpec {
    type Status = EmptyStatus;
    const NAMESPACED: bool = false;

    fn metadata() -> &'static Kind {
        &CLUSTER_ROLE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterRoleSpec {
    pub rules: Vec<PolicyRule>,
}
