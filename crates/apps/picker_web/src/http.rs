use gloo_net::http::{Request, RequestBuilder};
use picker::{ApiRequest, ApiResponse, Method, PickerError, Transport};

/// `fetch`-backed transport for same-origin picker endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

fn builder(request: &ApiRequest) -> RequestBuilder {
    let builder = match request.method {
        Method::Get => Request::get(&request.path),
        Method::Post => Request::post(&request.path),
    };
    builder.query(request.query.iter().map(|(k, v)| (*k, v.as_str())))
}

/// The URL `request` is fetched from, query included.
pub fn url_for(request: &ApiRequest) -> Result<String, PickerError> {
    builder(request)
        .build()
        .map(|req| req.url())
        .map_err(|e| PickerError::Config(e.to_string()))
}

impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, PickerError> {
        let resp = builder(request)
            .send()
            .await
            .map_err(|e| PickerError::Transport(e.to_string()))?;
        let status = resp.status();
        // Error bodies carry the server's message, so read them too.
        let body = resp
            .text()
            .await
            .map_err(|e| PickerError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
