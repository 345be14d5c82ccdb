use serde::Deserialize;
use serde::Serialize;

use crate::{Kind, KindNames, LabelSelector, Spec, Status};

const DAEMON_SET_API: Kind = Kind {
    group: "apps",
    version: "v1",
    names: KindNames {
        kind: "DaemonSet",
        plural: "daemonsets",
        singular: "daemonset",
    },
};

impl Spec for DaemonSetSpec {
    type Status = DaemonSetStatus;

    fn metadata() -> &'static Kind {
        &DAEMON_SET_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DaemonSetSpec {
    pub selector: LabelSelector,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DaemonSetStatus {
    pub desired_number_scheduled: i32,
    pub current_number_scheduled: i32,
    pub number_ready: i32,
    pub number_available: i32,
}

impl Status for DaemonSetStatus {}
