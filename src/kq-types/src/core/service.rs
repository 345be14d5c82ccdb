use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::EmptyStatus;
use crate::Kind;
use crate::KindNames;
use crate::Spec;

const SERVICE_API: Kind = Kind {
    group: "core",
    version: "v1",
    names: KindNames {
        kind: "Service",
        plural: "services",
        singular: "service",
    },
};

impl Spec for ServiceSpec {
    type Status = EmptyStatus;

    fn metadata() -> &'static Kind {
        &SERVICE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceSpec {
    pub cluster_ip: String,
    pub ports: Vec<ServicePort>,
    pub selector: HashMap<String, String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    pub name: Option<String>,
    pub port: u16,
    pub target_port: Option<u16>,
}
