use serde::Serialize;

use kq_types::Resource;

/// legacy list envelope
#[derive(Debug, Serialize)]
pub struct PageableResponse {
    pub items: Vec<Resource>,
    pub total_count: usize,
}

/// structured list envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult {
    pub items: Vec<Resource>,
    pub total_items: usize,
}
