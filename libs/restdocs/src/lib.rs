//! # REST Docs
//!
//! Verifies HTTP services in-process and documents the verified exchanges
//! as reference snippets.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  MockClient::perform(request)                                │
//! │    1. Send request to the tower::Service (no socket)         │
//! │    2. Buffer the response → Exchange                         │
//! │  ResultActions                                               │
//! │    3. expect_status(..)  → UnexpectedStatus on mismatch      │
//! │    4. and_do(hook)       → print(), docs.document("name")    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use restdocs::{print, request::get, MockClient, RestDocs, RestDocsConfig};
//!
//! let client = MockClient::new(router);
//! let docs = RestDocs::new(RestDocsConfig::from_env());
//!
//! client
//!     .perform(get("/hello")?)
//!     .await?
//!     .expect_ok()?
//!     .and_do(&print())
//!     .await?
//!     .and_do(&docs.document("hello"))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod exchange;
mod hook;

pub mod request;
pub mod snippets;

pub use client::{MockClient, ResultActions};
pub use config::{RestDocsConfig, SnippetFormat, DEFAULT_OUTPUT_DIR};
pub use error::{BoxError, RestDocsError};
pub use exchange::{CapturedRequest, CapturedResponse, Exchange};
pub use hook::{print, ExchangeHook, PrintHook};
pub use snippets::Snippet;

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Renders exchanges into snippet files
#[derive(Clone)]
pub struct RestDocs {
    config: Arc<RestDocsConfig>,
    snippets: Arc<Vec<Arc<dyn Snippet>>>,
}

impl RestDocs {
    /// Create a documenter writing the default snippet set
    pub fn new(config: RestDocsConfig) -> Self {
        Self::with_snippets(config, snippets::default_snippets())
    }

    /// Create a documenter writing only the given snippets
    pub fn with_snippets(config: RestDocsConfig, snippets: Vec<Arc<dyn Snippet>>) -> Self {
        Self {
            config: Arc::new(config),
            snippets: Arc::new(snippets),
        }
    }

    pub fn config(&self) -> &RestDocsConfig {
        &self.config
    }

    /// Hook that documents exchanges under `identifier`
    pub fn document(&self, identifier: &str) -> DocumentHook {
        DocumentHook {
            identifier: identifier.to_string(),
            docs: self.clone(),
        }
    }

    /// Directory receiving the snippets of `identifier`
    pub fn snippet_dir(&self, identifier: &str) -> Result<PathBuf, RestDocsError> {
        validate_identifier(identifier)?;
        Ok(self.config.output_dir.join(identifier))
    }

    /// Render every snippet for `exchange` and write them to disk
    ///
    /// Returns the written paths in snippet order.
    pub async fn write(&self, identifier: &str, exchange: &Exchange) -> Result<Vec<PathBuf>, RestDocsError> {
        let dir = self.snippet_dir(identifier)?;
        tokio::fs::create_dir_all(&dir).await?;

        let extension = self.config.format.extension();
        let mut written = Vec::with_capacity(self.snippets.len());

        for snippet in self.snippets.iter() {
            let content = snippet.render(exchange, &self.config)?;
            let path = dir.join(format!("{}.{}", snippet.name(), extension));
            tokio::fs::write(&path, content).await?;
            debug!(snippet = snippet.name(), path = %path.display(), "snippet written");
            written.push(path);
        }

        info!(
            identifier = %identifier,
            snippets = written.len(),
            dir = %dir.display(),
            "exchange documented"
        );

        Ok(written)
    }
}

/// Hook returned by [`RestDocs::document`]
#[derive(Clone)]
pub struct DocumentHook {
    identifier: String,
    docs: RestDocs,
}

impl DocumentHook {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[async_trait]
impl ExchangeHook for DocumentHook {
    async fn on_exchange(&self, exchange: &Exchange) -> Result<(), RestDocsError> {
        self.docs.write(&self.identifier, exchange).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "document"
    }
}

/// Identifiers become relative directories under the output dir
fn validate_identifier(identifier: &str) -> Result<(), RestDocsError> {
    if identifier.trim().is_empty() {
        return Err(RestDocsError::InvalidIdentifier(
            "identifier must not be empty".to_string(),
        ));
    }

    let escapes = Path::new(identifier)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if escapes {
        return Err(RestDocsError::InvalidIdentifier(format!(
            "'{identifier}' must be a relative path without '..'"
        )));
    }

    Ok(())
}
