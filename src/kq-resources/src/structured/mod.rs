//! Structured generation accessors: filters pushed down to the cache where
//! they are label equalities, everything else post-filtered by the kind.

mod daemon_set;
mod deployment;
mod job;
mod pod;
mod registry;
mod stateful_set;

pub use registry::StructuredRegistry;

use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Field, Filter, Query};
use kq_types::{Object, ObjectMeta, Resource, ResourceKind, Spec};

use crate::error::Error;
use crate::response::ListResult;

/// per-kind capability of the structured generation
pub trait Lister: Send + Sync {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error>;

    fn list(&self, namespace: &str, query: &Query) -> Result<ListResult, Error>;
}

/// shared filter, sort, paginate sequencing
///
/// `total_items` counts the filtered set before pagination, descending
/// order swaps the operands fed to the comparator
pub(crate) fn default_list<S, C, F>(
    objects: Vec<Object<S>>,
    query: &Query,
    compare: C,
    filter: F,
    wrap: fn(Object<S>) -> Resource,
) -> ListResult
where
    S: Spec,
    C: Fn(&Object<S>, &Object<S>, &Field) -> Ordering,
    F: Fn(&Object<S>, &Filter) -> bool,
{
    let post_filters = query.post_filters();
    let mut filtered: Vec<Object<S>> = objects
        .into_iter()
        .filter(|object| post_filters.iter().all(|f| filter(object, f)))
        .collect();

    filtered.sort_by(|left, right| {
        if query.ascending {
            compare(left, right, &query.sort_by)
        } else {
            compare(right, left, &query.sort_by)
        }
    });

    let total_items = filtered.len();
    let (start, end) = query.pagination.bounds(total_items);

    ListResult {
        items: filtered.drain(start..end).map(wrap).collect(),
        total_items,
    }
}

/// metadata predicate shared by every structured kind
pub fn default_meta_filter(meta: &ObjectMeta, filter: &Filter) -> bool {
    match &filter.field {
        Field::Names => filter.value.split(',').any(|name| name == meta.name),
        Field::Name => meta.name.contains(&filter.value),
        Field::Label => match filter.value.split_once(':') {
            Some((key, value)) => meta.labels.get(key).map(String::as_str) == Some(value),
            None => meta.labels.values().any(|entry| entry.contains(&filter.value)),
        },
        Field::Annotation => match filter.value.split_once(':') {
            Some((key, value)) => meta.annotations.get(key).map(String::as_str) == Some(value),
            None => meta
                .annotations
                .values()
                .any(|entry| entry.contains(&filter.value)),
        },
        Field::Keyword => {
            meta.name.contains(&filter.value)
                || meta.labels.values().any(|entry| entry.contains(&filter.value))
                || meta
                    .annotations
                    .values()
                    .any(|entry| entry.contains(&filter.value))
        }
        Field::OwnerKind => meta
            .owner_references
            .iter()
            .any(|reference| reference.kind == filter.value),
        _ => false,
    }
}

/// creation time with missing timestamps first, ties broken by namespace
/// then name; `name` orders lexicographically
pub fn default_meta_compare(left: &ObjectMeta, right: &ObjectMeta, sort_by: &Field) -> Ordering {
    match sort_by {
        Field::Name => left.name.cmp(&right.name),
        _ => left
            .creation_timestamp
            .cmp(&right.creation_timestamp)
            .then_with(|| left.namespace.cmp(&right.namespace))
            .then_with(|| left.name.cmp(&right.name)),
    }
}

/// lister for kinds with no hooks beyond the metadata predicates
pub struct MetaLister<S>
where
    S: Spec,
{
    store: Store<S>,
    kind: ResourceKind,
    wrap: fn(Object<S>) -> Resource,
}

impl<S> MetaLister<S>
where
    S: Spec,
{
    pub fn new(store: Store<S>, kind: ResourceKind, wrap: fn(Object<S>) -> Resource) -> Self {
        Self { store, kind, wrap }
    }
}

impl<S> Lister for MetaLister<S>
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

    fn list(&self, namespace: &str, query: &Query) -> Result<ListResult, Error> {
        let namespace = if S::NAMESPACED { namespace } else { "" };
        let objects = self.store.list(namespace, &query.label_selector())?;
        Ok(default_list(
            objects,
            query,
            |left, right, field| default_meta_compare(&left.metadata, &right.metadata, field),
            |object, filter| default_meta_filter(&object.metadata, filter),
            self.wrap,
        ))
    }
}

#[cfg(test)]
mod test {

    use chrono::TimeZone;
    use chrono::Utc;

    use kq_query::{Field, Filter, Pagination, Query};
    use kq_types::core::config_map::ConfigMapSpec;
    use kq_types::{Object, ObjectMeta, Resource};

    use super::{default_list, default_meta_compare, default_meta_filter};

    fn config_map(name: &str, day: u32) -> Object<ConfigMapSpec> {
        Object::with_metadata(
            ObjectMeta::new(name, "ns1")
                .created_at(Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap()),
            ConfigMapSpec::default(),
        )
    }

    fn run(query: &Query, objects: Vec<Object<ConfigMapSpec>>) -> (Vec<String>, usize) {
        let result = default_list(
            objects,
            query,
            |left, right, field| default_meta_compare(&left.metadata, &right.metadata, field),
            |object, filter| default_meta_filter(&object.metadata, filter),
            Resource::ConfigMap,
        );
        let names = result
            .items
            .iter()
            .map(|item| item.name().to_owned())
            .collect();
        (names, result.total_items)
    }

    #[test]
    fn test_total_independent_of_pagination() {
        let objects = vec![config_map("a", 1), config_map("b", 2), config_map("c", 3)];
        let query = Query::new().paginated(Pagination::new(1, 1));
        let (names, total) = run(&query, objects);
        assert_eq!(total, 3);
        assert_eq!(names, vec!["b"]);
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let objects = vec![config_map("old", 1), config_map("new", 3), config_map("mid", 2)];
        let (names, _) = run(&Query::new(), objects);
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_ascending_reverses_ties_too() {
        // everything created at the same instant, order falls to the name
        let objects = vec![config_map("b", 1), config_map("a", 1), config_map("c", 1)];
        let ascending = Query::new().sorted_by(Field::CreateTime, true);
        let (names, _) = run(&ascending, objects.clone());
        assert_eq!(names, vec!["a", "b", "c"]);

        let descending = Query::new().sorted_by(Field::CreateTime, false);
        let (names, _) = run(&descending, objects);
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_name_filter_is_substring() {
        let objects = vec![config_map("db-config", 1), config_map("web", 2)];
        let query = Query::new().with_filter(Field::Name, "config");
        let (names, total) = run(&query, objects);
        assert_eq!(total, 1);
        assert_eq!(names, vec!["db-config"]);
    }

    #[test]
    fn test_names_filter_is_exact_or_list() {
        let objects = vec![config_map("a", 1), config_map("b", 2), config_map("c", 3)];
        let query = Query::new().with_filter(Field::Names, "a,c");
        let (_, total) = run(&query, objects);
        assert_eq!(total, 2);
    }

    #[test]
    fn test_unknown_filter_matches_nothing() {
        let objects = vec![config_map("a", 1)];
        let query = Query::new().with_filter(Field::Custom("uid".to_owned()), "x");
        let (_, total) = run(&query, objects);
        assert_eq!(total, 0);
    }

    #[test]
    fn test_label_filter_forms() {
        let mut labeled = config_map("labeled", 1);
        labeled.metadata = labeled.metadata.set_labels(vec![("app", "store")]);
        let objects = vec![labeled, config_map("plain", 2)];

        let exact = Filter::new(Field::Label, "app:store");
        assert!(default_meta_filter(&objects[0].metadata, &exact));
        assert!(!default_meta_filter(&objects[1].metadata, &exact));

        let contains = Filter::new(Field::Label, "tor");
        assert!(default_meta_filter(&objects[0].metadata, &contains));
        assert!(!default_meta_filter(&objects[1].metadata, &contains));
    }
}
