//! Legacy generation accessors: condition-string matching against object
//! metadata with per-kind intercepts, one accessor per kind.

mod cron_job;
mod daemon_set;
mod deployment;
mod hpa;
mod job;
mod registry;
mod secret;
mod stateful_set;

pub use registry::LegacyRegistry;

use std::cmp::Ordering;
use std::collections::HashMap;

use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::{LabelSelector, Object, ObjectMeta, OwnerReference, Resource, ResourceKind, Spec};

use crate::error::Error;

pub const NAME: &str = "name";
pub const LABEL: &str = "label";
pub const ANNOTATION: &str = "annotation";
pub const KEYWORD: &str = "keyword";
pub const STATUS: &str = "status";
pub const CREATE_TIME: &str = "createTime";
pub const UPDATE_TIME: &str = "updateTime";

/// per-kind capability of the legacy generation
pub trait Accessor: Send + Sync {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error>;

    fn search(
        &self,
        namespace: &str,
        conditions: &Condition,
        order_by: &Field,
        reverse: bool,
    ) -> Result<Vec<Resource>, Error>;
}

/// exact predicate over object metadata
///
/// `name` takes a comma-delimited OR-list, `keyword` matches the name or
/// any label or annotation value as a substring, any other key must equal
/// the label value stored under it
pub fn meta_exact_match(key: &str, value: &str, meta: &ObjectMeta) -> bool {
    match key {
        NAME => value.split(',').any(|name| name == meta.name),
        KEYWORD => {
            meta.name.contains(value)
                || fuzzy_any_match(&meta.labels, value)
                || fuzzy_any_match(&meta.annotations, value)
        }
        _ => meta.labels.get(key).map(String::as_str) == Some(value),
    }
}

/// fuzzy predicate over object metadata
pub fn meta_fuzzy_match(key: &str, value: &str, meta: &ObjectMeta) -> bool {
    match key {
        NAME => meta.name.contains(value),
        LABEL => fuzzy_any_match(&meta.labels, value),
        ANNOTATION => fuzzy_any_match(&meta.annotations, value),
        _ => fuzzy_value_match(&meta.labels, key, value),
    }
}

/// an empty value matches "key absent or value empty"
pub fn fuzzy_value_match(map: &HashMap<String, String>, key: &str, value: &str) -> bool {
    match map.get(key) {
        Some(entry) => {
            if value.is_empty() {
                entry.is_empty()
            } else {
                entry.contains(value)
            }
        }
        None => value.is_empty(),
    }
}

/// an empty value matches "no entries, or an entry present but empty"
pub fn fuzzy_any_match(map: &HashMap<String, String>, value: &str) -> bool {
    if value.is_empty() {
        map.is_empty() || map.values().any(|entry| entry.is_empty())
    } else {
        map.values().any(|entry| entry.contains(value))
    }
}

/// default comparator: creation time with missing timestamps first,
/// ties broken by namespace then name; any other field orders by name
pub fn meta_compare(left: &ObjectMeta, right: &ObjectMeta, order_by: &Field) -> Ordering {
    match order_by {
        Field::CreateTime => left
            .creation_timestamp
            .cmp(&right.creation_timestamp)
            .then_with(|| left.namespace.cmp(&right.namespace))
            .then_with(|| left.name.cmp(&right.name)),
        _ => left.name.cmp(&right.name),
    }
}

pub fn controlled_by(references: &[OwnerReference], kind: &str, name: &str) -> bool {
    references
        .iter()
        .any(|reference| reference.kind == kind && (name.is_empty() || reference.name == name))
}

/// shared tail of every legacy search: AND of all match predicates and all
/// fuzzy predicates, then a stable sort. `reverse` swaps the operands fed
/// to the comparator, so tie-break order reverses with it.
pub(crate) fn filter_and_sort<S, M, F, C>(
    items: Vec<Object<S>>,
    conditions: &Condition,
    matches: M,
    fuzzy: F,
    compare: C,
    order_by: &Field,
    reverse: bool,
) -> Vec<Object<S>>
where
    S: Spec,
    M: Fn(&str, &str, &Object<S>) -> bool,
    F: Fn(&str, &str, &Object<S>) -> bool,
    C: Fn(&Object<S>, &Object<S>, &Field) -> Ordering,
{
    let mut result: Vec<Object<S>> = items
        .into_iter()
        .filter(|item| {
            conditions
                .matches
                .iter()
                .all(|(key, value)| matches(key, value, item))
                && conditions
                    .fuzzy
                    .iter()
                    .all(|(key, value)| fuzzy(key, value, item))
        })
        .collect();

    result.sort_by(|left, right| {
        if reverse {
            compare(right, left, order_by)
        } else {
            compare(left, right, order_by)
        }
    });
    result
}

/// accessor for kinds with no intercepts beyond the metadata predicates
pub struct MetaAccessor<S>
where
    S: Spec,
{
    store: Store<S>,
    kind: ResourceKind,
    wrap: fn(Object<S>) -> Resource,
}

impl<S> MetaAccessor<S>
where
    S: Spec,
{
    pub fn new(store: Store<S>, kind: ResourceKind, wrap: fn(Object<S>) -> Resource) -> Self {
        Self { store, kind, wrap }
    }
}

impl<S> Accessor for MetaAccessor<S>
where
    S: Spec,
{
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        let namespace = if S::NAMESPACED { namespace } else { "" };
        self.store
            .get(namespace, name)
            .map(self.wrap)
            .map_err(|err| Error::from_lookup(self.kind, namespace, name, err))
    }

    fn search(
        &self,
        namespace: &str,
        conditions: &Condition,
        order_by: &Field,
        reverse: bool,
    ) -> Result<Vec<Resource>, Error> {
        let namespace = if S::NAMESPACED { namespace } else { "" };
        let items = self.store.list(namespace, &LabelSelector::default())?;
        let result = filter_and_sort(
            items,
            conditions,
            |key, value, item: &Object<S>| meta_exact_match(key, value, &item.metadata),
            |key, value, item: &Object<S>| meta_fuzzy_match(key, value, &item.metadata),
            |left, right, field| meta_compare(&left.metadata, &right.metadata, field),
            order_by,
            reverse,
        );
        Ok(result.into_iter().map(self.wrap).collect())
    }
}

#[cfg(test)]
mod test {

    use kq_types::ObjectMeta;

    use super::*;

    fn meta() -> ObjectMeta {
        ObjectMeta::new("db-config", "ns1")
            .set_labels(vec![("app", "store"), ("blank", "")])
            .set_annotations(vec![("team", "infra")])
    }

    #[test]
    fn test_exact_match_name_or_list() {
        assert!(meta_exact_match(NAME, "db-config", &meta()));
        assert!(meta_exact_match(NAME, "other,db-config", &meta()));
        assert!(!meta_exact_match(NAME, "db", &meta()));
    }

    #[test]
    fn test_exact_match_keyword() {
        // name substring
        assert!(meta_exact_match(KEYWORD, "config", &meta()));
        // label value substring
        assert!(meta_exact_match(KEYWORD, "stor", &meta()));
        // annotation value substring
        assert!(meta_exact_match(KEYWORD, "infra", &meta()));
        assert!(!meta_exact_match(KEYWORD, "absent", &meta()));
    }

    #[test]
    fn test_exact_match_label_key() {
        assert!(meta_exact_match("app", "store", &meta()));
        assert!(!meta_exact_match("app", "stor", &meta()));
        assert!(!meta_exact_match("missing", "store", &meta()));
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(meta_fuzzy_match(NAME, "db", &meta()));
        assert!(meta_fuzzy_match(LABEL, "tor", &meta()));
        assert!(meta_fuzzy_match(ANNOTATION, "inf", &meta()));
        assert!(meta_fuzzy_match("app", "sto", &meta()));
        assert!(!meta_fuzzy_match("app", "web", &meta()));
        // empty value matches the empty label under that key
        assert!(meta_fuzzy_match("blank", "", &meta()));
        assert!(meta_fuzzy_match("missing", "", &meta()));
        assert!(!meta_fuzzy_match("app", "", &meta()));
    }

    #[test]
    fn test_fuzzy_any_match_empty_value() {
        let empty = ObjectMeta::named("a");
        assert!(fuzzy_any_match(&empty.labels, ""));
        assert!(fuzzy_any_match(&meta().labels, ""));

        let filled = ObjectMeta::named("b").set_labels(vec![("app", "store")]);
        assert!(!fuzzy_any_match(&filled.labels, ""));
    }
}
