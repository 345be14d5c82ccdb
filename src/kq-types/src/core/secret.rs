use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::EmptyStatus;
use crate::Kind;
use crate::KindNames;
use crate::Spec;

pub const TYPE_OPAQUE: &str = "Opaque";

const SECRET_API: Kind = Kind {
    group: "core",
    version: "v1",
    names: KindNames {
        kind: "Secret",
        plural: "secrets",
        singular: "secret",
    },
};

impl Spec for SecretSpec {
    type Status = EmptyStatus;

    fn metadata() -> &'static Kind {
        &SECRET_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretSpec {
    #[serde(rename = "type")]
    pub ty: String,
    pub data: BTreeMap<String, String>,
}

impl SecretSpec {
    pub fn opaque() -> Self {
        Self {
            ty: TYPE_OPAQUE.to_owned(),
            ..Default::default()
        }
    }
}
