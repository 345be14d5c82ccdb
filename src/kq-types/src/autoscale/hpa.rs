use serde::Deserialize;
use serde::Serialize;

use crate::{Kind, KindNames, Spec, Status};

const HPA_API: Kind = Kind {
    group: "autoscaling",
    version: "v2beta2",
    names: KindNames {
        kind: "HorizontalPodAutoscaler",
        plural: "horizontalpodautoscalers",
        singular: "horizontalpodautoscaler",
    },
};

impl Spec for HorizontalPodAutoscalerSpec {
    type Status = HorizontalPodAutoscalerStatus;

    fn metadata() -> &'static Kind {
        &HPA_API
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HorizontalPodAutoscalerSpec {
    pub scale_target_ref: ScaleTargetRef,
    pub min_replicas: Option<i32>,
    pub max_replicas: i32,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleTargetRef {
    pub api_version: Option<String>,
    pub kind: String,
    pub name: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HorizontalPodAutoscalerStatus {
    pub current_replicas: i32,
    pub desired_replicas: i32,
}

impl Status for HorizontalPodAutoscalerStatus {}
