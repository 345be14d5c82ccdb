use std::cmp::Ordering;

use kq_cache::Store;
use kq_query::{Field, Filter, Query};
use kq_types::app::stateful_set::StatefulSetSpec;
use kq_types::{Object, Resource, ResourceKind};

use super::{default_list, default_meta_compare, default_meta_filter, Lister};
use crate::error::Error;
use crate::response::ListResult;
use crate::status::stateful_set_status;

pub struct StatefulSetLister {
    store: Store<StatefulSetSpec>,
}

impl StatefulSetLister {
    pub fn new(store: Store<StatefulSetSpec>) -> Self {
        Self { store }
    }

    fn compare(
        left: &Object<StatefulSetSpec>,
        right: &Object<StatefulSetSpec>,
        field: &Field,
    ) -> Ordering {
        default_meta_compare(&left.metadata, &right.metadata, field)
    }

    fn filter(stateful_set: &Object<StatefulSetSpec>, filter: &Filter) -> bool {
        match &filter.field {
            Field::Status => stateful_set_status(stateful_set).as_str() == filter.value,
            _ => default_meta_filter(&stateful_set.metadata, filter),
        }
    }
}

impl Lister for StatefulSetLister {
    fn get(&self, namespace: &str, name: &str) -> Result<Resource, Error> {
        self.store
            .get(namespace, name)
            .map(Resource::StatefulSet)
            .map_err(|err| Error::from_lookup(ResourceKind::StatefulSets, namespace, name, err))
    }

    fn list(&self, namespace: &str, query: &Query) -> Result<ListResult, Error> {
        let stateful_sets = self.store.list(namespace, &query.label_selector())?;
        Ok(default_list(
            stateful_sets,
            query,
            Self::compare,
            Self::filter,
            Resource::StatefulSet,
        ))
    }
}
