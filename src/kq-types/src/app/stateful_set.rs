use serde::Deserialize;
use serde::Serialize;

use crate::{Kind, KindNames, LabelSelector, Spec, Status};

const STATEFUL_SET_API: Kind = Kind {
    group: "apps",
    version: "v1",
    names: KindNames {
        kind: "StatefulSet",
        plural: "statefulsets",
        singular: "statefulset",
    },
};

impl Spec for StatefulSetSpec {
    type Status = StatefulSetStatus;

    fn metadata() -> &'static Kind {
        &STATEFUL_SET_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatefulSetSpec {
    pub replicas: Option<i32>,
    pub service_name: String,
    pub selector: LabelSelector,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatefulSetStatus {
    pub replicas: i32,
    pub ready_replicas: i32,
    pub current_replicas: i32,
}

impl Status for StatefulSetStatus {}
