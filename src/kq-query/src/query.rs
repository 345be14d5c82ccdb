use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;

use kq_types::LabelSelector;

use crate::paging::DEFAULT_LIMIT;
use crate::ParseError;

const PARAM_PAGE: &str = "page";
const PARAM_LIMIT: &str = "limit";
const PARAM_ASCENDING: &str = "ascending";
const PARAM_ORDER_BY: &str = "orderBy";
const LABEL_PREFIX: &str = "label:";
const ANNOTATION_PREFIX: &str = "annotation:";

/// field a filter or sort refers to, closed over the fields the engine
/// understands with an escape hatch for kind-specific keys
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Names,
    CreateTime,
    UpdateTime,
    LastScheduleTime,
    Label,
    Annotation,
    Status,
    Keyword,
    OwnerKind,
    Custom(String),
}

impl Field {
    pub fn parse(field: &str) -> Self {
        match field {
            "name" => Self::Name,
            "names" => Self::Names,
            "createTime" => Self::CreateTime,
            "updateTime" => Self::UpdateTime,
            "lastScheduleTime" => Self::LastScheduleTime,
            "label" => Self::Label,
            "annotation" => Self::Annotation,
            "status" => Self::Status,
            "keyword" => Self::Keyword,
            "ownerKind" => Self::OwnerKind,
            other => Self::Custom(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Names => "names",
            Self::CreateTime => "createTime",
            Self::UpdateTime => "updateTime",
            Self::LastScheduleTime => "lastScheduleTime",
            Self::Label => "label",
            Self::Annotation => "annotation",
            Self::Status => "status",
            Self::Keyword => "keyword",
            Self::OwnerKind => "ownerKind",
            Self::Custom(field) => field,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: Field,
    pub value: String,
}

impl Filter {
    pub fn new<T: Into<String>>(field: Field, value: T) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

pub const NO_PAGINATION: Pagination = Pagination {
    limit: -1,
    offset: 0,
};

/// limit/offset window, `limit = -1` is the unbounded sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// 1-based page
    pub fn for_page(limit: i64, page: i64) -> Self {
        Self {
            limit,
            offset: (page - 1) * limit,
        }
    }

    /// valid slice bounds for a result of `total` items,
    /// offset is clamped into `[0, total]` before the limit is applied,
    /// an out of range window yields an empty page rather than an error
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let total = total as i64;
        let start = self.offset.clamp(0, total);
        let end = if self.limit < 0 {
            total
        } else {
            (start + self.limit).min(total)
        };
        (start as usize, end as usize)
    }
}

/// structured filter/sort/paginate request
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub filters: BTreeMap<Field, String>,
    pub sort_by: Field,
    pub ascending: bool,
    pub pagination: Pagination,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            sort_by: Field::CreateTime,
            ascending: false,
            pagination: Pagination::default(),
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter<T: Into<String>>(mut self, field: Field, value: T) -> Self {
        self.filters.insert(field, value.into());
        self
    }

    pub fn sorted_by(mut self, field: Field, ascending: bool) -> Self {
        self.sort_by = field;
        self.ascending = ascending;
        self
    }

    pub fn paginated(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// build a query from decoded request parameters, filters AND-combine
    /// and the last write per field wins
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::new();
        let mut limit = DEFAULT_LIMIT;
        let mut page = 1;

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.into();
            match key {
                PARAM_PAGE => page = value.parse().unwrap_or(1),
                PARAM_LIMIT => limit = value.parse().unwrap_or(DEFAULT_LIMIT),
                PARAM_ASCENDING => query.ascending = value.parse().unwrap_or(false),
                PARAM_ORDER_BY => query.sort_by = Field::parse(&value),
                _ => {
                    if let Some(label_key) = key.strip_prefix(LABEL_PREFIX) {
                        query
                            .filters
                            .insert(Field::Label, format!("{}:{}", label_key, value));
                    } else if let Some(annotation_key) = key.strip_prefix(ANNOTATION_PREFIX) {
                        query
                            .filters
                            .insert(Field::Annotation, format!("{}:{}", annotation_key, value));
                    } else {
                        query.filters.insert(Field::parse(key), value);
                    }
                }
            }
        }

        query.pagination = Pagination::for_page(limit, page);
        query
    }

    /// parse a raw query string, `name=db&label:app=store&page=2&limit=5`
    pub fn from_query_str(raw: &str) -> Result<Self, ParseError> {
        let pairs: HashMap<String, String> =
            serde_qs::from_str(raw).map_err(|err| ParseError::InvalidQuery(err.to_string()))?;
        Ok(Self::from_pairs(pairs))
    }

    /// label equality filters are pushed down to the cache listing
    pub fn label_selector(&self) -> LabelSelector {
        match self.filters.get(&Field::Label) {
            Some(value) => match value.split_once(':') {
                Some((key, label_value)) => LabelSelector::new_labels(vec![(key, label_value)]),
                None => LabelSelector::default(),
            },
            None => LabelSelector::default(),
        }
    }

    /// every filter not already satisfied by the pushed-down selector
    pub fn post_filters(&self) -> Vec<Filter> {
        self.filters
            .iter()
            .filter(|(field, value)| !(**field == Field::Label && value.contains(':')))
            .map(|(field, value)| Filter::new(field.clone(), value.clone()))
            .collect()
    }
}
