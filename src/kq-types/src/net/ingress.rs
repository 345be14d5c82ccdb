use serde::Deserialize;
use serde::Serialize;

use crate::{EmptyStatus, Kind, KindNames, Spec};

const INGRESS_API: Kind = Kind {
    group: "extensions",
    version: "v1beta1",
    names: KindNames {
        kind: "Ingress",
        plural: "ingresses",
        singular: "ingress",
    },
};

impl Spec for IngressSpec {
    type Status = EmptyStatus;

    fn metadata() -> &'static Kind {
        &INGRESS_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressSpec {
    pub rules: Vec<IngressRule>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressRule {
    pub host: String,
}
