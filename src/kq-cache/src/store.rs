use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use kq_types::LabelSelector;
use kq_types::Object;
use kq_types::Spec;

#[derive(Debug)]
pub enum CacheError {
    NotFound,
    Poisoned,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Poisoned => write!(f, "lock poison error"),
        }
    }
}

impl std::error::Error for CacheError {}

impl CacheError {
    pub fn not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjectKey {
    pub namespace: String,
    pub name: String,
}

impl ObjectKey {
    pub fn new<T: Into<String>>(namespace: T, name: T) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

type ItemMap<S> = BTreeMap<ObjectKey, Object<S>>;

/// per-kind snapshot store, synchronized by an external watch process,
/// the engine only reads it
#[derive(Debug)]
pub struct Store<S>
where
    S: Spec,
{
    inner: Arc<RwLock<ItemMap<S>>>,
}

impl<S> Clone for Store<S>
where
    S: Spec,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> Default for Store<S>
where
    S: Spec,
{
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl<S> Store<S>
where
    S: Spec,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// retrieve a single item, cluster-scoped kinds use an empty namespace
    pub fn get(&self, namespace: &str, name: &str) -> Result<Object<S>, CacheError> {
        let store = self.inner.read().map_err(|_| CacheError::Poisoned)?;
        store
            .get(&ObjectKey::new(namespace, name))
            .cloned()
            .ok_or(CacheError::NotFound)
    }

    /// list items in a namespace, empty namespace lists every scope,
    /// the selector is applied before items leave the store
    pub fn list(
        &self,
        namespace: &str,
        selector: &LabelSelector,
    ) -> Result<Vec<Object<S>>, CacheError> {
        let store = self.inner.read().map_err(|_| CacheError::Poisoned)?;
        Ok(store
            .values()
            .filter(|item| namespace.is_empty() || item.metadata.namespace == namespace)
            .filter(|item| selector.matches(&item.metadata.labels))
            .cloned()
            .collect())
    }

    /// synchronization surface, driven by the watch process
    pub fn apply(&self, item: Object<S>) -> Result<(), CacheError> {
        let key = ObjectKey::new(
            item.metadata.namespace.clone(),
            item.metadata.name.clone(),
        );
        let mut store = self.inner.write().map_err(|_| CacheError::Poisoned)?;
        store.insert(key, item);
        Ok(())
    }

    pub fn delete(&self, namespace: &str, name: &str) -> Result<Object<S>, CacheError> {
        let mut store = self.inner.write().map_err(|_| CacheError::Poisoned)?;
        store
            .remove(&ObjectKey::new(namespace, name))
            .ok_or(CacheError::NotFound)
    }
}

#[cfg(test)]
mod test {

    use kq_types::core::config_map::ConfigMapSpec;
    use kq_types::{LabelSelector, Object, ObjectMeta};

    use super::CacheError;
    use super::Store;

    fn config_map(namespace: &str, name: &str, labels: Vec<(&str, &str)>) -> Object<ConfigMapSpec> {
        Object::with_metadata(
            ObjectMeta::new(name, namespace).set_labels(labels),
            ConfigMapSpec::default(),
        )
    }

    #[test]
    fn test_get_and_delete() {
        let store = Store::new();
        store
            .apply(config_map("ns1", "settings", vec![]))
            .expect("apply");

        let item = store.get("ns1", "settings").expect("get");
        assert_eq!(item.metadata.name, "settings");

        assert!(matches!(
            store.get("ns2", "settings"),
            Err(CacheError::NotFound)
        ));

        store.delete("ns1", "settings").expect("delete");
        assert!(store.get("ns1", "settings").is_err());
    }

    #[test]
    fn test_list_scope_and_selector() {
        let store = Store::new();
        store
            .apply(config_map("ns1", "a", vec![("app", "store")]))
            .expect("apply");
        store
            .apply(config_map("ns1", "b", vec![("app", "web")]))
            .expect("apply");
        store
            .apply(config_map("ns2", "c", vec![("app", "store")]))
            .expect("apply");

        let all = store.list("", &LabelSelector::default()).expect("list");
        assert_eq!(all.len(), 3);

        let ns1 = store.list("ns1", &LabelSelector::default()).expect("list");
        assert_eq!(ns1.len(), 2);

        let selector = LabelSelector::new_labels(vec![("app", "store")]);
        let selected = store.list("", &selector).expect("list");
        assert_eq!(selected.len(), 2);
        let ns1_selected = store.list("ns1", &selector).expect("list");
        assert_eq!(ns1_selected.len(), 1);
        assert_eq!(ns1_selected[0].metadata.name, "a");
    }
}
