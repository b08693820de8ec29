//! TinySRC API client implementation

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::api::{LinkApi, StatApi, UserApi};
use super::context::RequestContext;
use super::models::{
    CurrentUserResponse, ErrorResponse, LinkActivationRequest, LinkRequest, LinkResponse,
    LinkUserResponse, ListUrlsRequest, PaginatedLinkUserResponse, StatPaginatedResponse,
    StatRequest, UNAUTHORIZED,
};
use crate::error::{ConfigError, Error, Result};

/// TinySRC API host
pub const API_URL: &str = "https://tinysrc.me/api";

/// API version path segment
pub const VERSION: &str = "v1";

const API_KEY_HEADER: &str = "x-api-key";
const JSON: &str = "application/json";

/// True for any 2xx status.
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

pub fn is_unauthorized(status: u16) -> bool {
    status == 401
}

/// Status and, for 401, the [`UNAUTHORIZED`] marker.
fn base_error_response(status: u16) -> ErrorResponse {
    let mut error_response = ErrorResponse {
        status: Some(status),
        ..Default::default()
    };

    if is_unauthorized(status) {
        error_response.errors.push(UNAUTHORIZED.to_string());
    }

    error_response
}

/// Build the [`ErrorResponse`] for a non-2xx answer.
///
/// Never fails: a 401 always starts with [`UNAUTHORIZED`], and a body that
/// does not decode adds the decoder's message instead of discarding what was
/// already collected. The HTTP status wins over any `status` in the body.
pub fn error_response_from_body(status: u16, body: &[u8]) -> ErrorResponse {
    let mut error_response = base_error_response(status);

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(decoded) => {
            if decoded.status.is_some_and(|s| s != status) {
                log::debug!(
                    "Error body reports status {:?}, keeping HTTP status {}",
                    decoded.status,
                    status
                );
            }
            error_response.merge(decoded);
        }
        Err(e) => error_response.errors.push(e.to_string()),
    }

    error_response
}

/// Read the body of a failed response into an [`ErrorResponse`].
pub async fn parse_error_response(response: Response) -> ErrorResponse {
    let status = response.status().as_u16();
    match response.bytes().await {
        Ok(body) => error_response_from_body(status, &body),
        Err(e) => {
            let mut error_response = base_error_response(status);
            error_response.errors.push(e.to_string());
            error_response
        }
    }
}

/// TinySRC API client.
///
/// Immutable once built. Cloning is cheap and shares the connection pool;
/// use [`with_context`](Self::with_context) to scope a clone to a different
/// cancellation context.
#[derive(Clone)]
pub struct TinySrcClient {
    http: HttpClient,
    base_url: Url,
    api_key: String,
    context: RequestContext,
}

impl std::fmt::Debug for TinySrcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TinySrcClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TinySrcClient {
    /// Create a client for the production API.
    ///
    /// `http` defaults to a plain `reqwest::Client`; pass one to add a proxy
    /// or custom TLS settings. Timeouts belong on `context`.
    pub fn new(
        context: RequestContext,
        api_key: impl Into<String>,
        http: Option<HttpClient>,
    ) -> Result<Self> {
        Ok(Self {
            http: http.unwrap_or_default(),
            base_url: parse_base_url(&format!("{}/{}", API_URL, VERSION))?,
            api_key: api_key.into(),
            context,
        })
    }

    /// Replace the base address, including the version path
    /// (e.g. `http://127.0.0.1:1234/api/v1`).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Same client, bound to another cancellation context.
    pub fn with_context(&self, context: RequestContext) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Resolve an API path (optionally with a query string) against the base URL.
    ///
    /// The base path is kept, so `/create` becomes `.../api/v1/create`. A path
    /// starting with `//` is a network-path reference and leaves the base
    /// host; only pass API-defined paths here.
    pub fn compose_url(&self, path: &str) -> Result<Url> {
        let relative = format!("{}{}", self.base_url.path().trim_end_matches('/'), path);
        Ok(self.base_url.join(&relative)?)
    }

    /// Headers sent with every request.
    fn attach_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(ACCEPT, HeaderValue::from_static(JSON))
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON))
            .header(API_KEY_HEADER, self.api_key.as_str())
    }

    /// Send one request under the client's context.
    ///
    /// A terminated context is reported instead of the network error it
    /// caused.
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        let url = self.compose_url(path)?;
        log::debug!("{} {}", method, url);

        let mut request = self.attach_headers(self.http.request(method, url));
        if let Some(body) = body {
            request = request.body(body);
        }

        match self.within_context(request.send()).await? {
            Ok(response) => {
                log::debug!("Response status: {}", response.status());
                Ok(response)
            }
            Err(e) => Err(self.transport_error(e)),
        }
    }

    /// Run `future` until it completes or the context ends, whichever is first.
    async fn within_context<F: Future>(&self, future: F) -> Result<F::Output> {
        if let Some(reason) = self.context.err() {
            return Err(reason.into());
        }

        tokio::select! {
            reason = self.context.done() => Err(reason.into()),
            output = future => Ok(output),
        }
    }

    /// A transport failure, unless the context ended first and caused it.
    fn transport_error(&self, err: reqwest::Error) -> Error {
        match self.context.err() {
            Some(reason) => reason.into(),
            None => err.into(),
        }
    }

    /// Dispatch and decode: the shared body of every endpoint method.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let response = self.dispatch(method, path, body).await?;

        let status = response.status().as_u16();
        if !is_success(status) {
            let error_response = self.within_context(parse_error_response(response)).await?;
            return Err(Error::Api(error_response));
        }

        let bytes = self
            .within_context(response.bytes())
            .await?
            .map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Decode(e.to_string()))
    }

    fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(body)?)
    }
}

/// Percent-encode one path segment so it cannot change the request target.
///
/// `/`, `?` and `#` are escaped; `.` and `..` would still be read as dot
/// segments, so they and the empty segment are rejected.
pub fn path_segment(segment: &str) -> Result<String> {
    if matches!(segment, "" | "." | "..") {
        return Err(Error::InvalidInput(format!(
            "'{}' is not a valid path segment",
            segment
        )));
    }

    // Form encoding writes spaces as `+` and escapes a literal `+` as `%2B`.
    let encoded: String = url::form_urlencoded::byte_serialize(segment.as_bytes()).collect();
    Ok(encoded.replace('+', "%20"))
}

fn parse_base_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| {
        ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            source,
        }
        .into()
    })
}

#[async_trait]
impl LinkApi for TinySrcClient {
    async fn create_short_link(&self, request: &LinkRequest) -> Result<LinkResponse> {
        let body = Self::encode(request)?;
        self.execute(Method::POST, "/create", Some(body)).await
    }

    async fn list_links(&self, params: &ListUrlsRequest) -> Result<PaginatedLinkUserResponse> {
        let path = format!("/client/url?{}", params.to_query_string());
        self.execute(Method::GET, &path, None).await
    }

    async fn get_link(&self, hash: &str) -> Result<LinkUserResponse> {
        let path = format!("/client/url/{}", path_segment(hash)?);
        self.execute(Method::GET, &path, None).await
    }

    async fn set_active(&self, hash: &str, request: &LinkActivationRequest) -> Result<bool> {
        let body = Self::encode(request)?;
        let path = format!("/client/{}", path_segment(hash)?);
        let _: LinkUserResponse = self.execute(Method::PATCH, &path, Some(body)).await?;
        Ok(true)
    }
}

#[async_trait]
impl StatApi for TinySrcClient {
    async fn get_stats(&self, hash: &str, params: &StatRequest) -> Result<StatPaginatedResponse> {
        let path = format!(
            "/client/stat/{}?{}",
            path_segment(hash)?,
            params.to_query_string()
        );
        self.execute(Method::GET, &path, None).await
    }
}

#[async_trait]
impl UserApi for TinySrcClient {
    async fn get_current_user(&self) -> Result<CurrentUserResponse> {
        self.execute(Method::GET, "/client/user", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TinySrcClient {
        TinySrcClient::new(RequestContext::background(), "test", None).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.base_url().as_str(), "https://tinysrc.me/api/v1");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = TinySrcClient::new(RequestContext::background(), "secret-key", None).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_with_base_url_rejects_malformed() {
        let err = client().with_base_url("not a url").unwrap_err();
        match err {
            Error::Config(ConfigError::InvalidBaseUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("Expected ConfigError::InvalidBaseUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_url_keeps_version_path() {
        let url = client().compose_url("/create").unwrap();
        assert_eq!(url.as_str(), "https://tinysrc.me/api/v1/create");
    }

    #[test]
    fn test_compose_url_with_query() {
        let url = client()
            .compose_url("/client/url?limit=10&page=15&query=")
            .unwrap();
        assert_eq!(url.path(), "/api/v1/client/url");
        assert_eq!(url.query(), Some("limit=10&page=15&query="));
    }

    #[test]
    fn test_compose_url_root_base() {
        let client = client().with_base_url("http://127.0.0.1:8080").unwrap();
        let url = client.compose_url("/client/user").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/client/user");
    }

    #[test]
    fn test_compose_url_trailing_slash_base() {
        let client = client()
            .with_base_url("http://127.0.0.1:8080/api/v1/")
            .unwrap();
        let url = client.compose_url("/create").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/create");
    }

    #[test]
    fn test_compose_url_network_path_escapes_host() {
        let client = client().with_base_url("http://127.0.0.1:8080").unwrap();
        let url = client.compose_url("//evil.example/x").unwrap();
        assert_eq!(url.host_str(), Some("evil.example"));
    }

    #[test]
    fn test_compose_url_malformed_path() {
        let client = client().with_base_url("http://127.0.0.1:8080").unwrap();
        let err = client.compose_url("//[::1/client/user").unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn test_attach_headers() {
        let client = client();
        let request = client
            .attach_headers(client.http.get("https://tinysrc.me/api/v1/client/user"))
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[API_KEY_HEADER], "test");
    }

    #[test]
    fn test_is_success_range() {
        for status in 100..600u16 {
            assert_eq!(is_success(status), (200..=299).contains(&status), "{status}");
        }
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(300));
        assert!(!is_success(199));
    }

    #[test]
    fn test_is_unauthorized_only_401() {
        for status in 100..600u16 {
            assert_eq!(is_unauthorized(status), status == 401, "{status}");
        }
    }

    #[test]
    fn test_error_response_from_body_sets_status() {
        let body = br#"{"validations":{"url":["url is not valid"]},"status":404}"#;
        let response = error_response_from_body(404, body);

        assert_eq!(response.status, Some(404));
        assert_eq!(response.validations["url"], vec!["url is not valid"]);
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_error_response_unauthorized_first() {
        let body = br#"{"errors":["API key revoked"]}"#;
        let response = error_response_from_body(401, body);

        assert_eq!(response.errors, vec![UNAUTHORIZED, "API key revoked"]);
        assert_eq!(response.status, Some(401));
    }

    #[test]
    fn test_error_response_unauthorized_empty_body() {
        let response = error_response_from_body(401, b"");

        assert_eq!(response.status, Some(401));
        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.errors[0], UNAUTHORIZED);
        assert!(response.errors[1].contains("EOF"));
    }

    #[test]
    fn test_error_response_unparseable_body() {
        let response = error_response_from_body(404, b"test 404");

        assert_eq!(response.status, Some(404));
        assert_eq!(response.errors.len(), 1);
        assert!(!response.errors[0].is_empty());
        assert!(response.validations.is_empty());
    }

    #[test]
    fn test_error_response_http_status_wins() {
        let response = error_response_from_body(500, br#"{"status":200}"#);
        assert_eq!(response.status, Some(500));
    }

    #[test]
    fn test_with_context_rebinds() {
        let client = client();
        let ctx = RequestContext::background();
        let scoped = client.with_context(ctx.clone());

        ctx.cancel();

        assert!(scoped.context().is_done());
        assert!(!client.context().is_done());
    }

    #[test]
    fn test_encode_failure_is_serialization_error() {
        // JSON object keys must be strings
        let mut body = std::collections::HashMap::new();
        body.insert((1, 2), 3);

        let err = TinySrcClient::encode(&body).unwrap_err();

        assert!(matches!(err, Error::Serialization(_)));
        assert_eq!(err.into_error_response().status, None);
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("abc123").unwrap(), "abc123");
        assert_eq!(path_segment("../user").unwrap(), "..%2Fuser");
        assert_eq!(path_segment("a?b#c").unwrap(), "a%3Fb%23c");
        assert_eq!(path_segment("a b+c").unwrap(), "a%20b%2Bc");
        assert_eq!(path_segment("%2e%2e").unwrap(), "%252e%252e");
    }

    #[test]
    fn test_path_segment_rejects_dot_segments() {
        for segment in ["", ".", ".."] {
            assert!(matches!(
                path_segment(segment),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_escaped_segment_stays_under_link_path() {
        let client = client();
        let path = format!("/client/url/{}", path_segment("../user").unwrap());

        let url = client.compose_url(&path).unwrap();

        assert_eq!(url.path(), "/api/v1/client/url/..%2Fuser");
    }

    #[test]
    fn test_error_body_with_bogus_status_keeps_messages() {
        let response = error_response_from_body(
            422,
            br#"{"errors":["Validation Error Happened"],"status":-1}"#,
        );

        assert_eq!(response.status, Some(422));
        assert_eq!(response.errors, vec!["Validation Error Happened"]);
    }
}
