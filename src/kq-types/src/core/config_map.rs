use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::EmptyStatus;
use crate::Kind;
use crate::KindNames;
use crate::Spec;

const CONFIG_MAP_API: Kind = Kind {
    group: "core",
    version: "v1",
    names: KindNames {
        kind: "ConfigMap",
        plural: "configmaps",
        singular: "configmap",
    },
};

impl Spec for ConfigMapSpec {
    type Status = EmptyStatus;

    fn metadata() -> &'static Kind {
        &CONFIG_MAP_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigMapSpec {
    pub data: BTreeMap<String, String>,
}
