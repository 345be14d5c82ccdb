use serde::Deserialize;
use serde::Serialize;

use crate::Kind;
use crate::KindNames;
use crate::Spec;
use crate::Status;

const NODE_API: Kind = Kind {
    group: "core",
    version: "v1",
    names: KindNames {
        kind: "Node",
        plural: "nodes",
        singular: "node",
    },
};

impl Spec for NodeSpec {
    type Status = NodeStatus;
    const NAMESPACED: bool = false;

    fn metadata() -> &'static Kind {
        &NODE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeSpec {
    #[serde(rename = "providerID")]
    pub provider_id: String,
    pub unschedulable: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeStatus {
    pub addresses: Vec<NodeAddress>,
}

impl Status for NodeStatus {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeAddress {
    pub address: String,
    pub r#type: String,
}
