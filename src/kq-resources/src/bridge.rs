//! Compatibility bridge between the two query generations: the structured
//! registry is tried first, kinds it does not serve fall back to the legacy
//! registry through a total query translation. One try, one fallback,
//! no retry.

use tracing::debug;

use kq_cache::ClusterCache;
use kq_query::{parse_conditions, parse_paging, Condition, Field, Query};
use kq_types::{Resource, ResourceKind};

use crate::error::Error;
use crate::legacy::{LegacyRegistry, ANNOTATION, CREATE_TIME, LABEL, NAME, STATUS, UPDATE_TIME};
use crate::response::{ListResult, PageableResponse};
use crate::structured::StructuredRegistry;

pub struct ResourceHandler {
    structured: StructuredRegistry,
    legacy: LegacyRegistry,
}

impl ResourceHandler {
    pub fn new(cache: &ClusterCache) -> Self {
        Self {
            structured: StructuredRegistry::new(cache),
            legacy: LegacyRegistry::new(cache),
        }
    }

    pub fn get(&self, resource: &str, namespace: &str, name: &str) -> Result<Resource, Error> {
        let kind = self.kind(resource)?;
        match self.structured.get(kind, namespace, name) {
            Err(err) if err.is_not_supported() => self.legacy.get(namespace, kind, name),
            other => other,
        }
    }

    pub fn list(
        &self,
        resource: &str,
        namespace: &str,
        query: &Query,
    ) -> Result<ListResult, Error> {
        let kind = self.kind(resource)?;
        match self.structured.list(kind, namespace, query) {
            Err(err) if err.is_not_supported() => self.fallback(kind, namespace, query),
            other => other,
        }
    }

    /// legacy entrypoint over the raw wire strings, ordering defaults to
    /// creation time
    pub fn list_legacy(
        &self,
        resource: &str,
        namespace: &str,
        conditions: &str,
        paging: &str,
        order_by: &str,
        reverse: bool,
    ) -> Result<PageableResponse, Error> {
        let kind = self.kind(resource)?;
        let conditions = parse_conditions(conditions)?;
        let (limit, offset) = parse_paging(paging);
        let order_by = if order_by.is_empty() {
            Field::CreateTime
        } else {
            Field::parse(order_by)
        };
        self.legacy
            .list(namespace, kind, &conditions, &order_by, reverse, limit, offset)
    }

    fn kind(&self, resource: &str) -> Result<ResourceKind, Error> {
        ResourceKind::parse(resource).ok_or_else(|| Error::not_supported(resource))
    }

    fn fallback(
        &self,
        kind: ResourceKind,
        namespace: &str,
        query: &Query,
    ) -> Result<ListResult, Error> {
        debug!(kind = kind.as_str(), "falling back to the legacy registry");
        let conditions = query_to_condition(query);
        let response = self.legacy.list(
            namespace,
            kind,
            &conditions,
            &query.sort_by,
            !query.ascending,
            query.pagination.limit,
            query.pagination.offset,
        )?;
        Ok(ListResult {
            items: response.items,
            total_items: response.total_count,
        })
    }
}

/// translate a structured query into a legacy condition
///
/// every field maps to an explicit entry; the key part of an annotation
/// filter is dropped because the legacy grammar has no per-key annotation
/// predicate
pub fn query_to_condition(query: &Query) -> Condition {
    let mut conditions = Condition::default();
    for (field, value) in &query.filters {
        match field {
            Field::Name => {
                conditions.fuzzy.insert(NAME.to_owned(), value.clone());
            }
            Field::Names => {
                conditions.matches.insert(NAME.to_owned(), value.clone());
            }
            Field::CreateTime => {
                conditions
                    .matches
                    .insert(CREATE_TIME.to_owned(), value.clone());
            }
            Field::UpdateTime => {
                conditions
                    .matches
                    .insert(UPDATE_TIME.to_owned(), value.clone());
            }
            Field::Label => match value.split_once(':') {
                Some((key, label_value)) => {
                    conditions
                        .matches
                        .insert(key.to_owned(), label_value.to_owned());
                }
                None => {
                    conditions.fuzzy.insert(LABEL.to_owned(), value.clone());
                }
            },
            Field::Annotation => {
                let annotation_value = match value.split_once(':') {
                    Some((_, annotation_value)) => annotation_value,
                    None => value.as_str(),
                };
                conditions
                    .fuzzy
                    .insert(ANNOTATION.to_owned(), annotation_value.to_owned());
            }
            Field::Status => {
                conditions.matches.insert(STATUS.to_owned(), value.clone());
            }
            other => {
                conditions
                    .matches
                    .insert(other.as_str().to_owned(), value.clone());
            }
        }
    }
    conditions
}

#[cfg(test)]
mod test {

    use kq_query::{Field, Query};

    use super::query_to_condition;

    #[test]
    fn test_translation_table() {
        let query = Query::new()
            .with_filter(Field::Name, "db")
            .with_filter(Field::Status, "failed")
            .with_filter(Field::Custom("targetKind".to_owned()), "Deployment");

        let conditions = query_to_condition(&query);
        assert_eq!(conditions.fuzzy.get("name").unwrap(), "db");
        assert_eq!(conditions.matches.get("status").unwrap(), "failed");
        assert_eq!(conditions.matches.get("targetKind").unwrap(), "Deployment");
    }

    #[test]
    fn test_name_list_is_exact() {
        let query = Query::new().with_filter(Field::Names, "a,b");
        let conditions = query_to_condition(&query);
        assert_eq!(conditions.matches.get("name").unwrap(), "a,b");
        assert!(conditions.fuzzy.is_empty());
    }

    #[test]
    fn test_label_translation_follows_operator_intent() {
        let equality = Query::new().with_filter(Field::Label, "app:store");
        let conditions = query_to_condition(&equality);
        assert_eq!(conditions.matches.get("app").unwrap(), "store");

        let substring = Query::new().with_filter(Field::Label, "store");
        let conditions = query_to_condition(&substring);
        assert_eq!(conditions.fuzzy.get("label").unwrap(), "store");
    }

    #[test]
    fn test_annotation_key_is_dropped() {
        let query = Query::new().with_filter(Field::Annotation, "team:infra");
        let conditions = query_to_condition(&query);
        assert_eq!(conditions.fuzzy.get("annotation").unwrap(), "infra");
    }

    #[test]
    fn test_timestamps_map_to_exact_keys() {
        let query = Query::new()
            .with_filter(Field::CreateTime, "2023-01-01")
            .with_filter(Field::UpdateTime, "2023-02-01");
        let conditions = query_to_condition(&query);
        assert_eq!(conditions.matches.get("createTime").unwrap(), "2023-01-01");
        assert_eq!(conditions.matches.get("updateTime").unwrap(), "2023-02-01");
    }
}
