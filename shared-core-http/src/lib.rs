//! JSON HTTP helpers: an async client bound to a base URL, and builders for
//! JSON and error responses.

mod client;
mod error;
mod response;

pub use client::{parse_json_response, Client, DEFAULT_TIMEOUT};
pub use error::{HttpError, Result};
pub use response::{error_response, json_response, ErrorBody, ErrorEnvelope};

pub use http::StatusCode;
