use kq_cache::Store;
use kq_query::{Condition, Field};
use kq_types::autoscale::hpa::HorizontalPodAutoscalerSpec;
use kq_types::{LabelSelector, Object, Resource, ResourceKind};

use super::{filter_and_sort, meta_compare, meta_exact_match, meta_fuzzy_match, Accessor};
use crate::error::Error;

const TARGET_KIND: &str = "targetKind";
const TARGET_NAME: &str = "targetName";

pub struct HpaAccessor {
    store: Store<HorizontalPodAutoscalerSpec>,
}

impl HpaAccessor {
    pub fn new(store: Store<HorizontalPodAutoscalerSpec>) -> Self {
        Self { store }
    }

    /// `targetKind` and `targetName` are consulted together against the
    /// scale-target reference, whichever of the two triggered the check
    fn matches(
        conditions: &Condition,
        key: &str,
        value: &str,
        item: &Object<HorizontalPodAutoscalerSpec>,
    ) -> bool {
        match key {
            TARGET_KIND | TARGET_NAME => {
                let kind = conditions.matches.get(TARGET_KIND).map(String::as_str);
                let name = conditions.matches.get(TARGET_NAME).map(String::as_str);
                item.spec.scale_target_ref.kind == kind.unwrap_or_default()
                    && item.spec.scale_target_ref.name == name.unwrap_or_default()
            }
            _ => meta_exact_match(key, value, &item.metadata),
        }
    }
}

impl Accessor for HpaAccessor {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::HorizontalPodAutoscaler)
            .map_err(|err| {
                Error::from_lookup(
                    ResourceKind::HorizontalPodAutoscalers,
                    namespace,
                    name,
                    err,
                )
            })
    }

    fn search(
        &self,
        namespace: &str,
        conditions: &Condition,
        order_by: &Field,
        reverse: bool,
    ) -> Result<Vec<Resource>, Error> {
        let items = self.store.list(namespace, &LabelSelector::default())?;
        let result = filter_and_sort(
            items,
            conditions,
            |key, value, item: &Object<HorizontalPodAutoscalerSpec>| {
                Self::matches(conditions, key, value, item)
            },
            |key, value, item: &Object<HorizontalPodAutoscalerSpec>| {
                meta_fuzzy_match(key, value, &item.metadata)
            },
            |left, right, field| meta_compare(&left.metadata, &right.metadata, field),
            order_by,
            reverse,
        );
        Ok(result
            .into_iter()
            .map(Resource::HorizontalPodAutoscaler)
            .collect())
    }
}

#[cfg(test)]
mod test {

    use kq_query::Condition;
    use kq_types::autoscale::hpa::{HorizontalPodAutoscalerSpec, ScaleTargetRef};
    use kq_types::Object;

    use super::HpaAccessor;
    use super::{TARGET_KIND, TARGET_NAME};

    fn hpa() -> Object<HorizontalPodAutoscalerSpec> {
        Object::new(
            "web-hpa",
            HorizontalPodAutoscalerSpec {
                scale_target_ref: ScaleTargetRef {
                    kind: "Deployment".to_owned(),
                    name: "web".to_owned(),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_target_match_needs_both_keys() {
        let item = hpa();

        let both = Condition::default()
            .with_match(TARGET_KIND, "Deployment")
            .with_match(TARGET_NAME, "web");
        assert!(HpaAccessor::matches(&both, TARGET_KIND, "Deployment", &item));

        // a lone targetKind leaves the name empty and cannot match
        let kind_only = Condition::default().with_match(TARGET_KIND, "Deployment");
        assert!(!HpaAccessor::matches(
            &kind_only,
            TARGET_KIND,
            "Deployment",
            &item
        ));
    }
}
