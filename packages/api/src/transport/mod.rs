//! # Transport: how requests reach the backend
//!
//! [`Transport`] is the seam between [`NotesClient`](crate::NotesClient) and the
//! network. It takes a method, a full URL and an optional JSON body, and
//! resolves to the decoded JSON response body.
//!
//! | Implementation | Purpose |
//! |----------------|---------|
//! | [`HttpTransport`] | reqwest client, used by the web app |
//! | [`MockTransport`] | scripted in-memory responses and a request log, for tests |

use std::fmt;

use serde_json::Value;

use crate::error::TransportError;

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{MockTransport, RecordedRequest};

/// HTTP methods used by the notes API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Async interface for issuing one JSON request.
pub trait Transport {
    fn call(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> impl std::future::Future<Output = Result<Value, TransportError>>;
}
