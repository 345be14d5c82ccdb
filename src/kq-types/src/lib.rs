mod kind;
mod metadata;
mod variant;
pub mod core;
pub mod app;
pub mod batch;
pub mod rbac;
pub mod autoscale;
pub mod net;

pub use self::kind::*;
pub use self::metadata::*;
pub use self::variant::*;
pub use self::spec_def::*;

mod spec_def {

    use std::fmt::Debug;

    use serde::de::DeserializeOwned;
    use serde::Deserialize;
    use serde::Serialize;

    use super::Kind;

    pub trait Status:
        Sized + Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync
    {
    }

    /// Spec of a cluster object kind
    pub trait Spec:
        Sized + Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync
    {
        type Status: Status;

        /// if true, spec is namespaced
        const NAMESPACED: bool = true;

        fn metadata() -> &'static Kind;

        fn label() -> &'static str {
            Self::metadata().names.kind
        }

        fn api_version() -> String {
            let metadata = Self::metadata();
            if metadata.group == "core" {
                return metadata.version.to_owned();
            }
            format!("{}/{}", metadata.group, metadata.version)
        }

        fn kind() -> String {
            Self::metadata().names.kind.to_owned()
        }
    }

    /// Status for kinds which carry none
    #[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
    pub struct EmptyStatus {}

    impl Status for EmptyStatus {}
}
