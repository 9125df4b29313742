use crate::config::Endpoints;
use crate::error::PickerError;
use crate::option::{SelectOption, decode_options};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request against one of the picker endpoints.
///
/// Query values are carried unencoded; the transport is responsible for
/// percent-encoding them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(method: Method, path: &str, key: &'static str, value: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: vec![(key, value.to_string())],
        }
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends picker requests to the server.
///
/// Runs on the browser event loop, so the returned futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Resolves with whatever the server answered, any status included.
    /// Errors only when no response was obtained.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, PickerError>;
}

impl Endpoints {
    pub fn country_options(&self, area: &str) -> ApiRequest {
        ApiRequest::new(Method::Get, &self.country_options, "areaOption", area)
    }

    pub fn node_options(&self, country: &str) -> ApiRequest {
        ApiRequest::new(Method::Get, &self.node_options, "countryOption", country)
    }

    pub fn change(&self, node_id: &str) -> ApiRequest {
        ApiRequest::new(Method::Post, &self.change, "id", node_id)
    }
}

/// Sends an option request and decodes the option list it returns.
pub async fn fetch_options<T: Transport>(
    transport: &T,
    request: &ApiRequest,
) -> Result<Vec<SelectOption>, PickerError> {
    tracing::debug!(path = %request.path, query = ?request.query, "fetching options");
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(PickerError::Status {
            status: response.status,
            body: response.body,
        });
    }
    decode_options(&response.body)
}
