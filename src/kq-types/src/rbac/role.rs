use serde::Deserialize;
use serde::Serialize;

use super::PolicyRule;
use crate::{EmptyStatus, Kind, KindNames, Spec};

const ROLE_API: Kind = Kind {
    group: "rbac.authorization.k8s.io",
    version: "v1",
    names: KindNames {
        kind: "Role",
        plural: "roles",
        singular: "role",
    },
};

impl Spec for RoleSpec {
    type Status = EmptyStatus;

    fn metadata() -> &'static Kind {
        &ROLE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleSpec {
    pub rules: Vec<PolicyRule>,
}
