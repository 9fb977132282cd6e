//! Client library for an analytics query service whose execution endpoint
//! returns large 1- or 2-dimensional result matrices in bounded pages.
//!
//! The pieces, bottom up: [`paging`] computes row-major page windows,
//! [`merge`] folds fetched pages into one accumulated result, and
//! [`client::ExecutionClient`] drives full retrieval behind an injected
//! [`transport::Transport`].

pub mod client;
pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod paging;
pub mod telemetry;
pub mod transport;
pub mod uri;

pub use client::ExecutionClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use transport::{ApiResponse, HttpTransport, Transport};
