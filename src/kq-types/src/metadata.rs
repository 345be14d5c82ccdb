use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::Spec;

pub const DEFAULT_NS: &str = "default";

/// metadata common to every cached object
/// name and namespace must be populated for namespaced kinds,
/// cluster-scoped kinds leave namespace empty
#[derive(Deserialize, Serialize, PartialEq, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub labels: HashMap<String, String>,
    pub annotations: HashMap<String, String>,
    pub owner_references: Vec<OwnerReference>,
}

impl ObjectMeta {
    pub fn new<S>(name: S, namespace: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// create with name and no namespace
    pub fn named<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// provide builder pattern setter
    pub fn set_labels<T: Into<String>>(mut self, labels: Vec<(T, T)>) -> Self {
        let mut label_map = HashMap::new();
        for (key, value) in labels {
            label_map.insert(key.into(), value.into());
        }
        self.labels = label_map;
        self
    }

    pub fn set_annotations<T: Into<String>>(mut self, annotations: Vec<(T, T)>) -> Self {
        let mut map = HashMap::new();
        for (key, value) in annotations {
            map.insert(key.into(), value.into());
        }
        self.annotations = map;
        self
    }

    pub fn created_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.creation_timestamp = Some(timestamp);
        self
    }

    pub fn owned_by(mut self, reference: OwnerReference) -> Self {
        self.owner_references.push(reference);
        self
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub controller: Option<bool>,
}

impl Default for OwnerReference {
    fn default() -> Self {
        Self {
            api_version: "v1".to_owned(),
            kind: "".to_owned(),
            name: "".to_owned(),
            controller: None,
        }
    }
}

impl OwnerReference {
    pub fn controlled<T: Into<String>>(kind: T, name: T) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            controller: Some(true),
            ..Default::default()
        }
    }
}

/// label equality predicate, pushed down to the cache listing
#[derive(Deserialize, Serialize, Default, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    pub match_labels: HashMap<String, String>,
}

impl LabelSelector {
    pub fn new_labels<T: Into<String>>(labels: Vec<(T, T)>) -> Self {
        let mut match_labels = HashMap::new();
        for (key, value) in labels {
            match_labels.insert(key.into(), value.into());
        }
        LabelSelector { match_labels }
    }

    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty()
    }

    /// true when every selector pair is present in the label set,
    /// the empty selector selects everything
    pub fn matches(&self, labels: &HashMap<String, String>) -> bool {
        self.match_labels
            .iter()
            .all(|(key, value)| labels.get(key) == Some(value))
    }
}

/// a cached cluster object: metadata plus kind-specific spec and status
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "S: Serialize"))]
#[serde(bound(deserialize = "S: DeserializeOwned"))]
pub struct Object<S>
where
    S: Spec,
{
    #[serde(default = "S::api_version")]
    pub api_version: String,
    #[serde(default = "S::kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: S,
    #[serde(default)]
    pub status: S::Status,
}

impl<S> Object<S>
where
    S: Spec,
{
    pub fn new<N>(name: N, spec: S) -> Self
    where
        N: Into<String>,
    {
        Self {
            api_version: S::api_version(),
            kind: S::kind(),
            metadata: ObjectMeta::named(name),
            spec,
            ..Default::default()
        }
    }

    pub fn with_metadata(metadata: ObjectMeta, spec: S) -> Self {
        Self {
            api_version: S::api_version(),
            kind: S::kind(),
            metadata,
            spec,
            ..Default::default()
        }
    }

    pub fn set_status(mut self, status: S::Status) -> Self {
        self.status = status;
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }
}

#[cfg(test)]
mod test {

    use std::collections::HashMap;

    use super::LabelSelector;
    use super::ObjectMeta;

    #[test]
    fn test_metadata_label() {
        let metadata = ObjectMeta::default().set_labels(vec![("app", "test")]);

        let maps = metadata.labels;
        assert_eq!(maps.len(), 1);
        assert_eq!(maps.get("app").unwrap(), "test");
    }

    #[test]
    fn test_selector_match() {
        let selector = LabelSelector::new_labels(vec![("app", "store")]);

        let mut labels = HashMap::new();
        labels.insert("app".to_owned(), "store".to_owned());
        labels.insert("tier".to_owned(), "backend".to_owned());
        assert!(selector.matches(&labels));

        labels.insert("app".to_owned(), "web".to_owned());
        assert!(!selector.matches(&labels));

        assert!(LabelSelector::default().matches(&labels));
    }
}
