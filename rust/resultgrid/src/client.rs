//! Execution client: submits executions and drives paged result retrieval.
//!
//! Pages are fetched strictly sequentially; each next window is computed
//! from the paging block the server actually returned, not from what was
//! requested, so short pages never skip data.

use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::merge::merge_page;
use crate::models::{
    ExecutionResponse, ExecutionResponseWrapper, ExecutionResponses, ExecutionResult,
    ExecutionResultWrapper,
};
use crate::paging::{has_next_page, next_limit, next_offset, DEFAULT_LIMIT};
use crate::transport::{HttpTransport, Transport};
use crate::uri::{dimensions_from_uri, replace_limit_and_offset};

pub struct ExecutionClient<T: Transport> {
    transport: T,
}

impl ExecutionClient<HttpTransport> {
    /// Client over the bundled `reqwest` transport.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ExecutionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submits an execution and fetches its complete result.
    ///
    /// A transport failure while fetching the result is wrapped together
    /// with the already-known execution response for diagnostics; validation
    /// failures propagate as-is.
    pub async fn execute(&self, project: &str, execution: &Value) -> Result<ExecutionResponses> {
        let execution_response = self.get_execution_response(project, execution).await?;

        match self
            .get_execution_result(&execution_response.links.execution_result)
            .await
        {
            Ok(execution_result) => Ok(ExecutionResponses {
                execution_response,
                execution_result,
            }),
            Err(source @ (Error::Api { .. } | Error::Http(_))) => Err(Error::ResultFetch {
                response: Box::new(execution_response),
                source: Box::new(source),
            }),
            Err(other) => Err(other),
        }
    }

    /// Submits an execution and returns the response describing result
    /// dimensionality and the URI to poll for data.
    ///
    /// The execution body must declare 1 or 2 result dimensions in
    /// `execution.resultSpec.dimensions`; anything else fails before the
    /// request is made.
    pub async fn get_execution_response(
        &self,
        project: &str,
        execution: &Value,
    ) -> Result<ExecutionResponse> {
        validate_execution_dimensions(execution)?;

        let uri = format!("/gdc/app/projects/{project}/executeAfm");
        let response = self.transport.post(&uri, execution).await?;
        let wrapper: ExecutionResponseWrapper = response.json()?;
        Ok(wrapper.execution_response)
    }

    /// Fetches the whole execution result, page by page, merging as it goes.
    ///
    /// Returns `Ok(None)` when the service reports an empty result (204).
    /// Dimensionality declared in the URI must be 1 or 2; anything else
    /// fails before a single request is made.
    pub async fn get_execution_result(
        &self,
        result_uri: &str,
    ) -> Result<Option<ExecutionResult>> {
        let dims = dimensions_from_uri(result_uri)?;

        let mut limit = vec![DEFAULT_LIMIT; dims];
        let mut offset = vec![0; dims];
        let mut acc: Option<ExecutionResult> = None;

        loop {
            let Some(page) = self.fetch_page(result_uri, &limit, &offset).await? else {
                return Ok(None);
            };
            let paging = page.paging.clone();

            acc = Some(match acc {
                Some(prev) => merge_page(prev, page),
                None => page,
            });

            let upcoming = next_offset(&paging.count, &paging.offset, &paging.total);
            if !has_next_page(&upcoming, &paging.total) {
                return Ok(acc);
            }
            // an empty page cannot advance the window; without this the
            // loop would re-request the same window forever
            if paging.count.iter().all(|&count| count <= 0) {
                return Err(Error::StalledPaging {
                    offset: paging.offset,
                    total: paging.total,
                });
            }
            limit = next_limit(&paging.count, &upcoming, &paging.total);
            offset = upcoming;
        }
    }

    /// Fetches a single page with the caller's window; never loops. Same
    /// dimensionality validation and empty-result handling as
    /// [`Self::get_execution_result`].
    pub async fn get_partial_execution_result(
        &self,
        result_uri: &str,
        limit: &[i64],
        offset: &[i64],
    ) -> Result<Option<ExecutionResult>> {
        dimensions_from_uri(result_uri)?;
        self.fetch_page(result_uri, limit, offset).await
    }

    async fn fetch_page(
        &self,
        result_uri: &str,
        limit: &[i64],
        offset: &[i64],
    ) -> Result<Option<ExecutionResult>> {
        let uri = replace_limit_and_offset(result_uri, limit, offset);
        debug!(uri = %uri, "fetching execution result page");

        let response = self.transport.get(&uri).await?;
        if response.is_no_content() {
            return Ok(None);
        }

        let wrapper: ExecutionResultWrapper = response.json()?;
        Ok(Some(wrapper.execution_result))
    }
}

/// Validates the dimensionality declared by an execution body. A missing
/// `resultSpec` counts as zero dimensions and is rejected too.
fn validate_execution_dimensions(execution: &Value) -> Result<()> {
    let dims = execution
        .pointer("/execution/resultSpec/dimensions")
        .and_then(Value::as_array)
        .map_or(0, Vec::len) as i64;

    match dims {
        1 | 2 => Ok(()),
        other => Err(Error::InvalidDimensions(other)),
    }
}
