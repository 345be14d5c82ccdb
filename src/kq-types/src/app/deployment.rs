use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::{Kind, KindNames, LabelSelector, Spec, Status};

const DEPLOYMENT_API: Kind = Kind {
    group: "apps",
    version: "v1",
    names: KindNames {
        kind: "Deployment",
        plural: "deployments",
        singular: "deployment",
    },
};

impl Spec for DeploymentSpec {
    type Status = DeploymentStatus;

    fn metadata() -> &'static Kind {
        &DEPLOYMENT_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentSpec {
    pub replicas: Option<i32>,
    pub paused: Option<bool>,
    pub selector: LabelSelector,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStatus {
    pub replicas: i32,
    pub ready_replicas: i32,
    pub updated_replicas: i32,
    pub available_replicas: i32,
    pub conditions: Vec<DeploymentCondition>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentCondition {
    pub last_update_time: Option<DateTime<Utc>>,
    pub last_transition_time: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub reason: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Status for DeploymentStatus {}
