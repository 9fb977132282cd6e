//! Wire models for execution responses and paged execution results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paging block of an execution result.
///
/// Every vector has one entry per result dimension (1 or 2). `count` and
/// `offset` describe the window currently held, `total` the full extent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub count: Vec<i64>,
    pub offset: Vec<i64>,
    pub total: Vec<i64>,
}

impl Paging {
    /// Number of result dimensions described by this paging block.
    pub fn dimensionality(&self) -> usize {
        self.total.len()
    }
}

/// A single cell of the result matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Null,
    Number(f64),
    Text(String),
}

/// Result data: flat for one dimension, row-major nested for two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Data {
    OneDim(Vec<DataValue>),
    TwoDim(Vec<Vec<DataValue>>),
}

/// An attribute value header (one label along an attribute header row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeHeaderItem {
    pub name: String,
    pub uri: String,
}

/// A measure header carrying the measure name and its ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureHeaderItem {
    pub name: String,
    pub order: i32,
}

/// A total header (grand/sub total row label).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalHeaderItem {
    pub name: String,
    #[serde(rename = "type")]
    pub total_type: String,
}

/// One item of a header row, externally tagged as on the wire
/// (`{"attributeHeaderItem": {...}}` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultHeaderItem {
    AttributeHeaderItem(AttributeHeaderItem),
    MeasureHeaderItem(MeasureHeaderItem),
    TotalHeaderItem(TotalHeaderItem),
}

impl ResultHeaderItem {
    pub fn attribute(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::AttributeHeaderItem(AttributeHeaderItem {
            name: name.into(),
            uri: uri.into(),
        })
    }

    pub fn measure(name: impl Into<String>, order: i32) -> Self {
        Self::MeasureHeaderItem(MeasureHeaderItem {
            name: name.into(),
            order,
        })
    }
}

/// Header rows per dimension: `header_items[dim][header_row][item]`. Grouped
/// attribute headers yield several header rows within one dimension.
pub type HeaderItems = Vec<Vec<Vec<ResultHeaderItem>>>;

/// One page (or an accumulated whole) of an execution result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_items: HeaderItems,
    pub data: Data,
    pub paging: Paging,
}

/// Wire envelope around [`ExecutionResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResultWrapper {
    pub execution_result: ExecutionResult,
}

/// Links block of an execution response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionLinks {
    /// Pollable URI of the (paged) execution result.
    pub execution_result: String,
}

/// Response to an execution submission: dimensionality metadata plus the
/// link to poll for results. Dimension header descriptors are vendor
/// metadata this client never interprets, so they stay schemaless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    #[serde(default)]
    pub dimensions: Vec<Value>,
    pub links: ExecutionLinks,
}

/// Wire envelope around [`ExecutionResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponseWrapper {
    pub execution_response: ExecutionResponse,
}

/// Outcome of a full execution: the response plus all fetched data, or
/// `None` when the service reported an empty result.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResponses {
    pub execution_response: ExecutionResponse,
    pub execution_result: Option<ExecutionResult>,
}
