//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    ApiErrors, AppToken, DeliveryResponse, GlanceUpdate, Notification, Receipt, ReceiptDetails,
    RecipientDetails, SendGlance, SendNotification, SendNotificationResponse, Status, UserKey,
    ValidationError, redact,
};
use crate::transport::{self, ATTACHMENT_FIELD, EncodeError, QuotaHeaderError, WireBody};

const DEFAULT_ENDPOINT: &str = "https://api.pushover.net/1";

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    body: Option<WireBody>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
        };
        let builder = match request.body {
            None => builder,
            Some(WireBody::Form(params)) => builder.form(&params),
            Some(WireBody::Multipart { fields, attachment }) => {
                let mut form = reqwest::blocking::multipart::Form::new();
                for (key, value) in fields {
                    form = form.text(key, value);
                }
                let part = reqwest::blocking::multipart::Part::bytes(attachment)
                    .file_name(ATTACHMENT_FIELD);
                builder.multipart(form.part(ATTACHMENT_FIELD, part))
            }
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text()?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PushoverClient`].
///
/// Local validation failures are always reported before any network I/O.
pub enum PushoverError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a 5xx status; the body is not decoded.
    #[error("http error: server returned status {status}")]
    HttpStatus { status: u16 },

    /// The service rejected the request (`status != 1`).
    #[error("API error: {0}")]
    Api(ApiErrors),

    /// The user or group key is not valid for this application.
    #[error("invalid recipient: {0}")]
    InvalidRecipient(ApiErrors),

    /// Response body could not be decoded into the expected shape.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// Quota headers of a send response were missing or malformed.
    #[error("invalid headers in server response: {0}")]
    InvalidHeaders(#[from] QuotaHeaderError),

    /// The attachment file could not be read.
    #[error("attachment error: {path}: {source}")]
    Attachment {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configured endpoint cannot be used as a base URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<EncodeError> for PushoverError {
    fn from(value: EncodeError) -> Self {
        match value {
            EncodeError::ReadAttachment { path, source } => Self::Attachment { path, source },
            EncodeError::Validation(err) => Self::Validation(err),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`PushoverClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct PushoverClientBuilder {
    token: AppToken,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PushoverClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(token: AppToken) -> Self {
        Self {
            token,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://api.pushover.net/1`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PushoverClient`].
    pub fn build(self) -> Result<PushoverClient, PushoverError> {
        let endpoint = parse_endpoint(&self.endpoint)?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PushoverError::Transport(Box::new(err)))?;

        Ok(PushoverClient {
            token: self.token,
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, PushoverError> {
    let url = Url::parse(endpoint)
        .map_err(|err| PushoverError::InvalidEndpoint(format!("{endpoint}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(PushoverError::InvalidEndpoint(endpoint.to_owned()));
    }
    Ok(url)
}

#[derive(Clone)]
/// Blocking Pushover client.
///
/// Each call validates its input, performs a single HTTP exchange and decodes
/// the response; nothing is retried. The application token and endpoint are
/// fixed at construction, so a client can be shared between threads.
pub struct PushoverClient {
    token: AppToken,
    endpoint: Url,
    http: Arc<dyn HttpTransport>,
}

impl PushoverClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`PushoverClient::builder`].
    pub fn new(token: AppToken) -> Result<Self, PushoverError> {
        PushoverClientBuilder::new(token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: AppToken) -> PushoverClientBuilder {
        PushoverClientBuilder::new(token)
    }

    /// Send a notification to a user or group (`messages.json`).
    ///
    /// The response carries the application's quota, read from the
    /// `X-Limit-App-*` headers; if any of them is missing or malformed the call fails.
    ///
    /// Errors:
    /// - [`PushoverError::Validation`] for invalid tokens or payloads (no request is sent),
    /// - [`PushoverError::Attachment`] when the attachment file cannot be read,
    /// - [`PushoverError::HttpStatus`] for 5xx responses,
    /// - [`PushoverError::Api`] when the service rejects the message,
    /// - [`PushoverError::InvalidHeaders`] when the quota headers are unusable.
    pub fn send_notification(
        &self,
        recipient: &UserKey,
        notification: Notification,
    ) -> Result<SendNotificationResponse, PushoverError> {
        let request = SendNotification::new(self.token.as_str(), recipient.as_str(), notification)?;
        let body = transport::encode_notification(&request)?;

        let url = self.endpoint_url(&["messages.json"])?;
        let response = self.execute(HttpRequest {
            method: HttpMethod::Post,
            url,
            body: Some(body),
        })?;

        let delivery = transport::decode_delivery_json_response(&response.body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;
        let delivery = check_delivery(delivery)?;
        let limit = transport::decode_quota_headers(&response.headers)?;

        debug!(
            request_id = %delivery.request,
            remaining = limit.remaining,
            total = limit.total,
            "notification accepted"
        );
        Ok(SendNotificationResponse { delivery, limit })
    }

    /// Update a Glances widget (`glances.json`).
    pub fn send_glance(
        &self,
        recipient: &UserKey,
        update: GlanceUpdate,
    ) -> Result<DeliveryResponse, PushoverError> {
        let request = SendGlance::new(self.token.as_str(), recipient.as_str(), update)?;
        let params = transport::encode_glance_form(&request);

        let url = self.endpoint_url(&["glances.json"])?;
        let response = self.execute(HttpRequest {
            method: HttpMethod::Post,
            url,
            body: Some(WireBody::Form(params)),
        })?;

        let delivery = transport::decode_delivery_json_response(&response.body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;
        check_delivery(delivery)
    }

    /// Poll the acknowledgment state of an emergency notification.
    pub fn receipt_details(&self, receipt: &Receipt) -> Result<ReceiptDetails, PushoverError> {
        let mut url = self.endpoint_url(&["receipts", &format!("{}.json", receipt.as_str())])?;
        url.query_pairs_mut()
            .append_pair(AppToken::FIELD, self.token.as_str());

        let response = self.execute(HttpRequest {
            method: HttpMethod::Get,
            url,
            body: None,
        })?;

        let (details, errors) = transport::decode_receipt_details_json_response(&response.body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;
        if details.status != Status::Ok {
            return Err(PushoverError::Api(errors));
        }
        Ok(details)
    }

    /// Stop retrying an emergency notification before it expires.
    pub fn cancel_emergency(&self, receipt: &Receipt) -> Result<DeliveryResponse, PushoverError> {
        let url = self.endpoint_url(&["receipts", receipt.as_str(), "cancel.json"])?;
        let response = self.execute(HttpRequest {
            method: HttpMethod::Post,
            url,
            body: Some(WireBody::Form(transport::encode_cancel_form(&self.token))),
        })?;

        let delivery = transport::decode_delivery_json_response(&response.body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;
        check_delivery(delivery)
    }

    /// Check that a user or group key exists and list its devices.
    ///
    /// Errors:
    /// - [`PushoverError::InvalidRecipient`] when the service does not know the key.
    pub fn recipient_details(
        &self,
        recipient: &UserKey,
    ) -> Result<RecipientDetails, PushoverError> {
        let url = self.endpoint_url(&["users", "validate.json"])?;
        let params = transport::encode_validate_user_form(&self.token, recipient);
        let response = self.execute(HttpRequest {
            method: HttpMethod::Post,
            url,
            body: Some(WireBody::Form(params)),
        })?;

        let details = transport::decode_recipient_details_json_response(&response.body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;
        if details.status != Status::Ok {
            debug!(user = %redact(recipient.as_str()), "recipient rejected");
            return Err(PushoverError::InvalidRecipient(details.errors));
        }
        Ok(details)
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, PushoverError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| PushoverError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, PushoverError> {
        let method = request.method;
        let path = request.url.path().to_owned();
        debug!(?method, path = %path, "sending request");

        let response = self.http.execute(request).map_err(|err| {
            warn!(error = %err, path = %path, "request failed (transport error)");
            PushoverError::Transport(err)
        })?;

        // 5xx bodies are not guaranteed to be JSON.
        if response.status >= 500 {
            warn!(status = response.status, path = %path, "server error");
            return Err(PushoverError::HttpStatus {
                status: response.status,
            });
        }

        debug!(status = response.status, path = %path, "received response");
        Ok(response)
    }
}

fn check_delivery(delivery: DeliveryResponse) -> Result<DeliveryResponse, PushoverError> {
    if delivery.status != Status::Ok {
        warn!(
            request_id = %delivery.request,
            errors = ?delivery.errors.as_slice(),
            "request rejected by the service"
        );
        return Err(PushoverError::Api(delivery.errors));
    }
    Ok(delivery)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use chrono::DateTime;
    use reqwest::header::HeaderValue;

    use crate::domain::Priority;

    use super::*;

    const TOKEN: &str = "uQiRzpo4DXghDmr9QzzfQu27cmVRsG";
    const USER: &str = "gznej3rKEVAvPUxu9vvNnqpmZpokzF";
    const OK_BODY: &str = r#"{"status":1,"request":"e460545a8b333d0da2f3602aff3133d6"}"#;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        response_status: u16,
        response_headers: HeaderMap,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_headers: HeaderMap::new(),
                    response_body: response_body.into(),
                })),
            }
        }

        fn with_quota_headers(self) -> Self {
            {
                let mut state = self.state.lock().unwrap();
                let headers = &mut state.response_headers;
                headers.insert("x-limit-app-limit", HeaderValue::from_static("7500"));
                headers.insert("x-limit-app-remaining", HeaderValue::from_static("6000"));
                headers.insert("x-limit-app-reset", HeaderValue::from_static("1393653600"));
            }
            self
        }

        fn without_header(self, name: &'static str) -> Self {
            self.state.lock().unwrap().response_headers.remove(name);
            self
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        fn last_request(&self) -> HttpRequest {
            self.requests().pop().expect("no request was sent")
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            Ok(HttpResponse {
                status: state.response_status,
                headers: state.response_headers.clone(),
                body: state.response_body.clone(),
            })
        }
    }

    struct FailingTransport;

    impl HttpTransport for FailingTransport {
        fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, BoxError> {
            Err("connection refused".into())
        }
    }

    fn make_client(http: impl HttpTransport + 'static) -> PushoverClient {
        PushoverClient {
            token: AppToken::new(TOKEN).unwrap(),
            endpoint: Url::parse("https://example.invalid/1").unwrap(),
            http: Arc::new(http),
        }
    }

    fn user() -> UserKey {
        UserKey::new(USER).unwrap()
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    #[test]
    fn send_notification_posts_form_and_reads_quota() {
        let transport = FakeTransport::new(200, OK_BODY).with_quota_headers();
        let client = make_client(transport.clone());

        let response = client
            .send_notification(&user(), Notification::with_title("hello", "greeting"))
            .unwrap();
        assert_eq!(response.delivery.status, Status::Ok);
        assert_eq!(
            response.delivery.request,
            "e460545a8b333d0da2f3602aff3133d6"
        );
        assert_eq!(response.delivery.receipt, None);
        assert_eq!(response.limit.total, 7500);
        assert_eq!(response.limit.remaining, 6000);
        assert_eq!(
            Some(response.limit.next_reset),
            DateTime::from_timestamp(1_393_653_600, 0)
        );

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/1/messages.json"
        );
        match request.body {
            Some(WireBody::Form(params)) => {
                assert_param(&params, "token", TOKEN);
                assert_param(&params, "user", USER);
                assert_param(&params, "message", "hello");
                assert_param(&params, "title", "greeting");
                assert_param(&params, "priority", "0");
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn send_notification_with_attachment_uses_multipart() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"image").unwrap();

        let transport = FakeTransport::new(200, OK_BODY).with_quota_headers();
        let client = make_client(transport.clone());
        client
            .send_notification(&user(), Notification::new("hello").attach_file(file.path()))
            .unwrap();

        match transport.last_request().body {
            Some(WireBody::Multipart { fields, attachment }) => {
                assert_param(&fields, "message", "hello");
                assert_eq!(attachment, b"image");
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn send_notification_returns_receipt_for_emergency() {
        let body = r#"{"status":1,"request":"abc","receipt":"rLqVuqTRh62UzxtmqiaLzQmVcPgiCy"}"#;
        let transport = FakeTransport::new(200, body).with_quota_headers();
        let client = make_client(transport);

        let notification = Notification {
            message: "hi".to_owned(),
            priority: Priority::EMERGENCY,
            retry: Some(Duration::from_secs(60)),
            expire: Some(Duration::from_secs(3600)),
            ..Default::default()
        };
        let response = client.send_notification(&user(), notification).unwrap();
        assert_eq!(
            response.delivery.receipt.as_ref().map(Receipt::as_str),
            Some("rLqVuqTRh62UzxtmqiaLzQmVcPgiCy")
        );
    }

    #[test]
    fn validation_failure_sends_nothing() {
        let transport = FakeTransport::new(200, OK_BODY).with_quota_headers();
        let client = make_client(transport.clone());

        let err = client
            .send_notification(&user(), Notification::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PushoverError::Validation(ValidationError::MessageEmpty)
        ));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn missing_attachment_file_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let transport = FakeTransport::new(200, OK_BODY).with_quota_headers();
        let client = make_client(transport.clone());

        let notification = Notification::new("hello").attach_file(dir.path().join("gone.png"));
        let err = client.send_notification(&user(), notification).unwrap_err();
        assert!(matches!(
            err,
            PushoverError::Validation(ValidationError::InvalidAttachmentPath { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn rejected_notification_carries_service_errors() {
        let body = r#"{"status":0,"request":"abc","errors":["error1","error2"]}"#;
        let client = make_client(FakeTransport::new(400, body).with_quota_headers());

        let err = client
            .send_notification(&user(), Notification::new("hello"))
            .unwrap_err();
        match err {
            PushoverError::Api(errors) => {
                assert_eq!(errors.as_slice(), ["error1".to_owned(), "error2".to_owned()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejected_notification_without_error_list_is_still_api_error() {
        let client = make_client(FakeTransport::new(200, r#"{"status":0,"request":"abc"}"#));
        let err = client
            .send_notification(&user(), Notification::new("hello"))
            .unwrap_err();
        match err {
            PushoverError::Api(errors) => assert!(errors.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_quota_header_fails_accepted_send() {
        for name in ["x-limit-app-limit", "x-limit-app-remaining", "x-limit-app-reset"] {
            let transport = FakeTransport::new(200, OK_BODY)
                .with_quota_headers()
                .without_header(name);
            let client = make_client(transport);

            let err = client
                .send_notification(&user(), Notification::new("hello"))
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    PushoverError::InvalidHeaders(QuotaHeaderError::Missing(_))
                ),
                "unexpected error for {name}: {err:?}"
            );
        }
    }

    #[test]
    fn server_error_is_not_decoded() {
        let client = make_client(FakeTransport::new(503, "<html>oops</html>"));
        let err = client
            .send_notification(&user(), Notification::new("hello"))
            .unwrap_err();
        assert!(matches!(err, PushoverError::HttpStatus { status: 503 }));
    }

    #[test]
    fn invalid_json_maps_to_parse_error() {
        let client = make_client(FakeTransport::new(200, "{ not json }").with_quota_headers());
        let err = client
            .send_notification(&user(), Notification::new("hello"))
            .unwrap_err();
        assert!(matches!(err, PushoverError::Parse(_)));
    }

    #[test]
    fn network_failure_maps_to_transport_error() {
        let client = make_client(FailingTransport);
        let err = client
            .send_notification(&user(), Notification::new("hello"))
            .unwrap_err();
        assert!(matches!(err, PushoverError::Transport(_)));
    }

    #[test]
    fn glance_is_posted_without_quota_headers() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(transport.clone());

        let update = GlanceUpdate {
            title: "Widgets".to_owned(),
            percent: Some(50),
            ..Default::default()
        };
        let response = client.send_glance(&user(), update).unwrap();
        assert_eq!(response.status, Status::Ok);

        let request = transport.last_request();
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/1/glances.json"
        );
        let body = request.body.expect("glance has a body");
        assert_param(body.fields(), "title", "Widgets");
        assert_param(body.fields(), "percent", "50");
    }

    #[test]
    fn empty_glance_is_rejected_locally() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(transport.clone());
        let err = client
            .send_glance(&user(), GlanceUpdate::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PushoverError::Validation(ValidationError::GlanceEmpty)
        ));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn receipt_details_uses_get_with_token_query() {
        let body = r#"
        {
          "status": 1,
          "acknowledged": 1,
          "acknowledged_at": 1424305421,
          "acknowledged_by": "uYWtrQ4scpDU38cz5X5pvxNvu7b15",
          "last_delivered_at": 1424305379,
          "expired": 0,
          "expires_at": 1424308979,
          "called_back": 0,
          "called_back_at": 0,
          "request": "e95f35c2d75a100a3719b3764f0c8e47"
        }
        "#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let receipt = Receipt::new("rLqVuqTRh62UzxtmqiaLzQmVcPgiCy").unwrap();
        let details = client.receipt_details(&receipt).unwrap();
        assert!(details.acknowledged);
        assert_eq!(
            details.acknowledged_at,
            DateTime::from_timestamp(1_424_305_421, 0)
        );
        assert!(!details.expired);
        assert_eq!(details.called_back_at, None);

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert_eq!(
            request.url.as_str(),
            format!(
                "https://example.invalid/1/receipts/rLqVuqTRh62UzxtmqiaLzQmVcPgiCy.json?token={TOKEN}"
            )
        );
    }

    #[test]
    fn receipt_details_with_bad_flag_is_parse_error() {
        let body = r#"{"status":1,"acknowledged":7,"request":"abc"}"#;
        let client = make_client(FakeTransport::new(200, body));
        let receipt = Receipt::new("abc").unwrap();
        let err = client.receipt_details(&receipt).unwrap_err();
        assert!(matches!(err, PushoverError::Parse(_)));
    }

    #[test]
    fn receipt_details_rejection_is_api_error() {
        let body = r#"{"status":0,"request":"abc","errors":["receipt not found"]}"#;
        let client = make_client(FakeTransport::new(404, body));
        let receipt = Receipt::new("abc").unwrap();
        let err = client.receipt_details(&receipt).unwrap_err();
        assert!(matches!(err, PushoverError::Api(errors) if errors.as_slice() == ["receipt not found".to_owned()]));
    }

    #[test]
    fn cancel_emergency_posts_token_without_quota() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(transport.clone());

        let receipt = Receipt::new("rLqVuqTRh62UzxtmqiaLzQmVcPgiCy").unwrap();
        let response = client.cancel_emergency(&receipt).unwrap();
        assert_eq!(response.request, "e460545a8b333d0da2f3602aff3133d6");

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/1/receipts/rLqVuqTRh62UzxtmqiaLzQmVcPgiCy/cancel.json"
        );
        assert_eq!(
            request.body,
            Some(WireBody::Form(vec![("token".to_owned(), TOKEN.to_owned())]))
        );
    }

    #[test]
    fn recipient_details_returns_devices() {
        let body = r#"{"status":1,"group":0,"devices":["iphone"],"request":"abc"}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let details = client.recipient_details(&user()).unwrap();
        assert!(!details.group);
        assert_eq!(details.devices, vec!["iphone"]);

        let request = transport.last_request();
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/1/users/validate.json"
        );
        let body = request.body.expect("validate has a body");
        assert_param(body.fields(), "token", TOKEN);
        assert_param(body.fields(), "user", USER);
    }

    #[test]
    fn recipient_details_rejection_is_invalid_recipient() {
        let body = r#"{"status":0,"request":"abc","errors":["user key is invalid"]}"#;
        let client = make_client(FakeTransport::new(400, body));
        let err = client.recipient_details(&user()).unwrap_err();
        match err {
            PushoverError::InvalidRecipient(errors) => {
                assert_eq!(errors.to_string(), "Errors:\nuser key is invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let mut client = make_client(FakeTransport::new(200, OK_BODY));
        client.endpoint = Url::parse("https://example.invalid/1/").unwrap();
        let url = client.endpoint_url(&["messages.json"]).unwrap();
        assert_eq!(url.as_str(), "https://example.invalid/1/messages.json");
    }

    #[test]
    fn builder_rejects_unusable_endpoint() {
        let token = AppToken::new(TOKEN).unwrap();
        let err = PushoverClient::builder(token.clone())
            .endpoint("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, PushoverError::InvalidEndpoint(_)));

        let err = PushoverClient::builder(token)
            .endpoint("mailto:someone@example.com")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, PushoverError::InvalidEndpoint(_)));
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let client = PushoverClient::builder(AppToken::new(TOKEN).unwrap())
            .endpoint("https://example.invalid/api")
            .timeout(Duration::from_secs(5))
            .user_agent("pushover-tests")
            .build()
            .unwrap();
        assert_eq!(client.endpoint.as_str(), "https://example.invalid/api");
    }
}
