use serde::Deserialize;
use serde::Serialize;

use crate::Kind;
use crate::KindNames;
use crate::Spec;
use crate::Status;

const NAMESPACE_API: Kind = Kind {
    group: "core",
    version: "v1",
    names: KindNames {
        kind: "Namespace",
        plural: "namespaces",
        singular: "namespace",
    },
};

impl Spec for NamespaceSpec {
    type Status = NamespaceStatus;
    const NAMESPACED: bool = false;

    fn metadata() -> &'static Kind {
        &NAMESPACE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceSpec {
    pub finalizers: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceStatus {
    pub phase: String,
}

impl Status for NamespaceStatus {}
