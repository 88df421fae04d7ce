//! Message contract between the control surface and a page.
//!
//! Requests are JSON objects tagged by `"action"`:
//!
//! ```json
//! {"action": "toggle", "enabled": true, "boldCount": "auto"}
//! {"action": "getStatus"}
//! {"action": "updateSettings", "boldCount": 2}
//! ```
//!
//! Responses are `{"success": true}` or `{"enabled": <bool>}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bionic::{EmphasisMode, deserialize_lenient};
use crate::error::Result;
use crate::page::Page;

/// A request addressed to one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Enable (with a mode) or disable bionic reading.
    Toggle {
        enabled: bool,
        #[serde(
            rename = "boldCount",
            default,
            deserialize_with = "deserialize_lenient",
            skip_serializing_if = "Option::is_none"
        )]
        bold_count: Option<EmphasisMode>,
    },
    /// Ask whether the page is currently transformed.
    GetStatus,
    /// Change the mode; re-renders if currently applied.
    UpdateSettings {
        #[serde(
            rename = "boldCount",
            default,
            deserialize_with = "deserialize_lenient",
            skip_serializing_if = "Option::is_none"
        )]
        bold_count: Option<EmphasisMode>,
    },
}

/// A page's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Ack { success: bool },
    Status { enabled: bool },
}

impl Response {
    pub fn ok() -> Self {
        Response::Ack { success: true }
    }
}

/// Mode used by `toggle` when the request carries none.
const TOGGLE_DEFAULT_MODE: EmphasisMode = EmphasisMode::fixed_const(1);

impl Page {
    /// Handle one request from the control surface.
    pub fn handle(&mut self, request: Request) -> Response {
        tracing::debug!(?request, "page message");
        match request {
            Request::Toggle {
                enabled: true,
                bold_count,
            } => {
                self.set_mode(bold_count.unwrap_or(TOGGLE_DEFAULT_MODE));
                self.apply();
                Response::ok()
            }
            Request::Toggle { enabled: false, .. } => {
                self.revert();
                Response::ok()
            }
            Request::GetStatus => Response::Status {
                enabled: self.is_applied(),
            },
            Request::UpdateSettings { bold_count } => {
                let mode = bold_count.unwrap_or(self.mode());
                self.reapply_with(mode);
                Response::ok()
            }
        }
    }

    /// Decode a JSON request, handle it, and encode the response.
    pub fn handle_json(&mut self, request: &str) -> Result<String> {
        let request: Request = serde_json::from_str(request)?;
        let response = self.handle(request);
        Ok(serde_json::to_string(&response)?)
    }
}

/// Why a request did not reach a page.
#[derive(Error, Debug)]
pub enum TransportError {
    /// No page instance is listening (e.g. a restricted page).
    #[error("no page is listening")]
    Unreachable,

    /// The page could not make sense of the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("message encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Request/response channel to one page.
pub trait Transport {
    fn send(&mut self, request: &Request) -> std::result::Result<Response, TransportError>;
}

/// In-process transport delivering straight to a [`Page`].
pub struct PageTransport<'a> {
    page: Option<&'a mut Page>,
}

impl<'a> PageTransport<'a> {
    pub fn new(page: &'a mut Page) -> Self {
        Self { page: Some(page) }
    }

    /// A transport whose target never answers.
    pub fn unreachable() -> Self {
        Self { page: None }
    }
}

impl Transport for PageTransport<'_> {
    fn send(&mut self, request: &Request) -> std::result::Result<Response, TransportError> {
        let page = self.page.as_deref_mut().ok_or(TransportError::Unreachable)?;
        Ok(page.handle(request.clone()))
    }
}

/// Transport that carries requests as JSON text, the way a host bridge does.
pub struct JsonTransport<'a> {
    page: &'a mut Page,
}

impl<'a> JsonTransport<'a> {
    pub fn new(page: &'a mut Page) -> Self {
        Self { page }
    }
}

impl Transport for JsonTransport<'_> {
    fn send(&mut self, request: &Request) -> std::result::Result<Response, TransportError> {
        let encoded = serde_json::to_string(request)?;
        let reply = self
            .page
            .handle_json(&encoded)
            .map_err(|e| TransportError::Rejected(e.to_string()))?;
        Ok(serde_json::from_str(&reply)?)
    }
}
