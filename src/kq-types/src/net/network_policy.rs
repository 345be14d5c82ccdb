use serde::Deserialize;
use serde::Serialize;

use crate::{EmptyStatus, Kind, KindNames, LabelSelector, Spec};

const NETWORK_POLICY_API: Kind = Kind {
    group: "networking.k8s.io",
    version: "v1",
    names: KindNames {
        kind: "NetworkPolicy",
        plural: "networkpolicies",
        singular: "networkpolicy",
    },
};

impl Spec for NetworkPolicySpec {
    type Status = EmptyStatus;

    fn metadata() -> &'static Kind {
        &NETWORK_POLICY_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkPolicySpec {
    pub pod_selector: LabelSelector,
    pub policy_types: Vec<String>,
}
