//! The invocation output returned to the API Gateway proxy integration.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain";
pub const CUSTOM_HEADER: &str = "x-custom-header";
pub const CUSTOM_HEADER_VALUE: &str = "My Header Value";

/// Proxy-integration response: `{"statusCode", "headers", "body"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers, name to value.
    pub headers: BTreeMap<String, String>,
    /// Plain-text body.
    pub body: String,
}

impl ProxyResponse {
    /// The fixed success response reporting `sdk_version`.
    pub fn sdk_version_report(sdk_version: &str) -> Self {
        let headers = BTreeMap::from([
            (CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_TEXT_PLAIN.to_string()),
            (CUSTOM_HEADER.to_string(), CUSTOM_HEADER_VALUE.to_string()),
        ]);

        ProxyResponse {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: format!("This lambda is using boto version {sdk_version}\n"),
        }
    }
}
