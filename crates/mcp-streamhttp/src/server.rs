//! The streamable HTTP server transport.
//!
//! One endpoint, three verbs. POST carries a single JSON-RPC message and is
//! answered with plain JSON, an upgraded event stream, or an empty 202; GET
//! opens a long-lived listening stream; DELETE terminates a session.
//!
//! A POST response body has two producers (the engine's final reply and any
//! notifications emitted while the handler runs). Both are funneled through
//! a single bounded channel whose sole consumer is the response body
//! stream, so frames can never interleave and the final reply is always
//! written last.

use std::{
    collections::HashMap, convert::Infallible, io, net::SocketAddr, sync::Arc, time::Duration,
};

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header, request::Parts},
    response::{
        IntoResponse, Response,
        sse::{Event, Sse},
    },
    routing::any,
};
use futures::{Stream, StreamExt};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::{
    engine::{HttpContextFn, McpEngine, RequestContext},
    http_header::{EVENT_STREAM_MIME_TYPE, HEADER_SESSION_ID, JSON_MIME_TYPE},
    model::{ErrorCode, JsonRpcError, JsonRpcNotification, JsonRpcRequest, ServerJsonRpcMessage},
    policy::{InsecureStatefulSessionIdPolicy, SessionIdPolicy, StatelessSessionIdPolicy},
    session::{
        SessionId, SessionLogStore, SessionRequestIdStore, SessionToolStore, StreamableHttpSession,
    },
};

pub const DEFAULT_ENDPOINT_PATH: &str = "/mcp";

/// Bound of the forwarder-to-writer hop on listening streams.
const WRITE_CHANNEL_CAPACITY: usize = 16;

/// Serves an [`McpEngine`] over streamable HTTP.
///
/// The server can run its own listener via [`serve`](Self::serve) or be
/// embedded into an existing axum application via [`router`](Self::router).
///
/// ```ignore
/// let server = StreamableHttpServer::new(engine)
///     .with_heartbeat_interval(Duration::from_secs(15));
/// let addr = server.serve("127.0.0.1:8080".parse()?).await?;
/// ```
pub struct StreamableHttpServer<E> {
    engine: Arc<E>,
    policy: Arc<dyn SessionIdPolicy>,
    endpoint_path: String,
    heartbeat_interval: Option<Duration>,
    context_fn: Option<HttpContextFn>,
    session_tools: Arc<SessionToolStore>,
    session_log_levels: Arc<SessionLogStore>,
    session_request_ids: Arc<SessionRequestIdStore>,
    ct: CancellationToken,
}

impl<E: McpEngine> StreamableHttpServer<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
            policy: Arc::new(InsecureStatefulSessionIdPolicy),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_owned(),
            heartbeat_interval: None,
            context_fn: None,
            session_tools: Arc::default(),
            session_log_levels: Arc::default(),
            session_request_ids: Arc::default(),
            ct: CancellationToken::new(),
        }
    }

    /// Sets the endpoint path, normalized to exactly one leading slash and
    /// no trailing slash. The default is `/mcp`.
    pub fn with_endpoint_path(mut self, path: &str) -> Self {
        self.endpoint_path = normalize_endpoint_path(path);
        self
    }

    /// Disables session tracking: no IDs are minted or validated and no
    /// `Mcp-Session-Id` header is returned. Shorthand for installing
    /// [`StatelessSessionIdPolicy`].
    pub fn stateless(mut self) -> Self {
        self.policy = Arc::new(StatelessSessionIdPolicy);
        self
    }

    pub fn with_session_id_policy(mut self, policy: impl SessionIdPolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Enables `ping` heartbeats on listening streams. Without a heartbeat,
    /// idle GET connections are liable to be closed by intermediaries.
    pub fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval = Some(interval);
        self
    }

    /// Installs a hook that can enrich the [`RequestContext`] from the raw
    /// HTTP request before the engine sees it.
    pub fn with_http_context_fn(
        mut self,
        context_fn: impl Fn(&mut RequestContext, &Parts) + Send + Sync + 'static,
    ) -> Self {
        self.context_fn = Some(Arc::new(context_fn));
        self
    }

    pub fn endpoint_path(&self) -> &str {
        &self.endpoint_path
    }

    /// Builds the axum router for embedding into an externally owned
    /// server. Methods other than POST, GET and DELETE on the endpoint get
    /// a 404.
    pub fn router(&self) -> Router {
        let app = Arc::new(App {
            engine: self.engine.clone(),
            policy: self.policy.clone(),
            session_tools: self.session_tools.clone(),
            session_log_levels: self.session_log_levels.clone(),
            session_request_ids: self.session_request_ids.clone(),
            context_fn: self.context_fn.clone(),
            heartbeat_interval: self.heartbeat_interval,
        });
        Router::new()
            .route(&self.endpoint_path, any(dispatch::<E>))
            .with_state(app)
    }

    /// Binds `addr` and serves the endpoint until [`shutdown`](Self::shutdown)
    /// is called. Returns the bound address (useful with port 0).
    pub async fn serve(&self, addr: SocketAddr) -> io::Result<SocketAddr> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let ct = self.ct.child_token();
        let server = axum::serve(listener, self.router()).with_graceful_shutdown(async move {
            ct.cancelled().await;
        });
        tokio::spawn(
            async move {
                if let Err(e) = server.await {
                    tracing::error!(error = %e, "streamable http server shut down with error");
                }
            }
            .instrument(tracing::info_span!("streamable-http-server", bind_address = %local_addr)),
        );
        Ok(local_addr)
    }

    /// Stops an owned server started with [`serve`](Self::serve). A no-op
    /// when the transport is only embedded via [`router`](Self::router).
    pub fn shutdown(&self) {
        self.ct.cancel();
    }
}

struct App<E> {
    engine: Arc<E>,
    policy: Arc<dyn SessionIdPolicy>,
    session_tools: Arc<SessionToolStore>,
    session_log_levels: Arc<SessionLogStore>,
    session_request_ids: Arc<SessionRequestIdStore>,
    context_fn: Option<HttpContextFn>,
    heartbeat_interval: Option<Duration>,
}

async fn dispatch<E: McpEngine>(State(app): State<Arc<App<E>>>, request: Request) -> Response {
    let method = request.method().clone();
    if method == Method::POST {
        handle_post(app, request).await
    } else if method == Method::GET {
        handle_get(app, request).await
    } else if method == Method::DELETE {
        handle_delete(app, request).await
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Request and notification intake.
async fn handle_post<E: McpEngine>(app: Arc<App<E>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let media_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok());
    if media_type.as_ref().map(mime::Mime::essence_str) != Some(JSON_MIME_TYPE) {
        return (
            StatusCode::BAD_REQUEST,
            "Invalid content type: must be 'application/json'",
        )
            .into_response();
    }

    let raw = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(raw) => raw,
        Err(e) => return parse_error_response(format!("read request body error: {e}")),
    };

    // Shallow parse: only the method matters for routing, the engine gets
    // the raw bytes.
    #[derive(serde::Deserialize)]
    struct BaseMessage {
        #[serde(default)]
        method: String,
    }
    let Ok(base) = serde_json::from_slice::<BaseMessage>(&raw) else {
        return parse_error_response("request body is not valid json".to_owned());
    };
    let is_initialize = base.method == "initialize";

    // Only an initialize request may mint a session ID; everything else
    // must present one acceptable to the policy.
    let session_id: SessionId = if is_initialize {
        app.policy.generate()
    } else {
        let session_id = header_value(&parts.headers, HEADER_SESSION_ID);
        match app.policy.validate(&session_id) {
            Err(e) => {
                tracing::debug!(session_id = %session_id, error = %e, "rejected post message");
                return (StatusCode::BAD_REQUEST, "Invalid session ID").into_response();
            }
            Ok(true) => {
                return (StatusCode::NOT_FOUND, "Session terminated").into_response();
            }
            Ok(false) => session_id.into(),
        }
    };

    // The session is ephemeral: it exists only for this request, purely as
    // the engine's view of the interaction.
    let (session, mut notifications) = StreamableHttpSession::new(
        session_id.clone(),
        query_params(parts.uri.query()),
        app.session_tools.clone(),
        app.session_log_levels.clone(),
    );
    let session = Arc::new(session);

    let ct = CancellationToken::new();
    let mut ctx = RequestContext::new(session.clone(), parts.headers.clone(), ct.clone());
    if let Some(context_fn) = &app.context_fn {
        context_fn(&mut ctx, &parts);
    }
    // Cancels the engine-side token when the request is torn down, whether
    // the reply path is JSON or a stream.
    let cancel_guard = ct.drop_guard();

    let engine = app.engine.clone();
    let mut engine_fut = Box::pin(async move { engine.handle_message(ctx, raw).await });

    enum PostTurn {
        Engine(Option<ServerJsonRpcMessage>),
        Notification(JsonRpcNotification),
    }

    let first = tokio::select! {
        response = &mut engine_fut => PostTurn::Engine(response),
        notification = notifications.recv() => match notification {
            Some(notification) => PostTurn::Notification(notification),
            None => PostTurn::Engine((&mut engine_fut).await),
        },
    };

    match first {
        // Pure notification: no body, just an ack.
        PostTurn::Engine(None) => StatusCode::ACCEPTED.into_response(),

        PostTurn::Engine(Some(response)) => {
            let mut queued = Vec::new();
            while let Ok(notification) = notifications.try_recv() {
                queued.push(notification);
            }
            if queued.is_empty() && !session.upgrade_requested() {
                let mut http_response = (StatusCode::OK, Json(response)).into_response();
                if is_initialize && !session_id.is_empty() {
                    if let Ok(value) = HeaderValue::from_str(&session_id) {
                        http_response.headers_mut().insert(HEADER_SESSION_ID, value);
                    }
                }
                return http_response;
            }
            // Notifications were emitted (or the upgrade was requested):
            // stream them in producer order with the response last.
            let mut events: Vec<Result<Event, Infallible>> = Vec::new();
            for notification in &queued {
                if let Some(event) = message_event(notification) {
                    events.push(Ok(event));
                }
            }
            if let Some(event) = message_event(&response) {
                events.push(Ok(event));
            }
            sse_response(futures::stream::iter(events))
        }

        // A notification arrived while the engine was still running:
        // commit to event-stream framing and keep pumping.
        PostTurn::Notification(first_notification) => {
            let (write_tx, write_rx) = mpsc::channel::<Event>(WRITE_CHANNEL_CAPACITY);
            tokio::spawn(async move {
                let _cancel_guard = cancel_guard;
                if !forward_message(&write_tx, &first_notification).await {
                    return;
                }
                loop {
                    tokio::select! {
                        response = &mut engine_fut => {
                            while let Ok(notification) = notifications.try_recv() {
                                if !forward_message(&write_tx, &notification).await {
                                    return;
                                }
                            }
                            if let Some(response) = response {
                                forward_message(&write_tx, &response).await;
                            }
                            return;
                        }
                        notification = notifications.recv() => {
                            let Some(notification) = notification else {
                                // All producers gone; only the reply is left.
                                if let Some(response) = engine_fut.await {
                                    forward_message(&write_tx, &response).await;
                                }
                                return;
                            };
                            if !forward_message(&write_tx, &notification).await {
                                return;
                            }
                        }
                    }
                }
            });
            sse_response(ReceiverStream::new(write_rx).map(Ok::<_, Infallible>))
        }
    }
}

/// Listening stream for server-initiated notifications and heartbeats.
async fn handle_get<E: McpEngine>(app: Arc<App<E>>, request: Request) -> Response {
    let (parts, _body) = request.into_parts();

    let header_id = header_value(&parts.headers, HEADER_SESSION_ID);
    let session_id: SessionId = if header_id.is_empty() {
        // The engine needs a unique ID to register under; this one is
        // internal and never echoed to the client.
        uuid::Uuid::new_v4().to_string().into()
    } else {
        header_id.into()
    };

    let (session, mut notifications) = StreamableHttpSession::new(
        session_id.clone(),
        query_params(parts.uri.query()),
        app.session_tools.clone(),
        app.session_log_levels.clone(),
    );
    let session = Arc::new(session);

    if let Err(e) = app.engine.register_session(session.clone()).await {
        return (
            StatusCode::BAD_REQUEST,
            format!("Session registration failed: {e}"),
        )
            .into_response();
    }
    tracing::debug!(session_id = %session_id, "listening stream opened");

    let (write_tx, write_rx) = mpsc::channel::<Event>(WRITE_CHANNEL_CAPACITY);
    let ct = CancellationToken::new();

    // Forwarder: session channel -> write channel. Holding the session
    // keeps the producer side open for the engine.
    let forward_ct = ct.clone();
    let forward_tx = write_tx.clone();
    let forward_session = session.clone();
    tokio::spawn(async move {
        let _session = forward_session;
        loop {
            tokio::select! {
                _ = forward_ct.cancelled() => return,
                notification = notifications.recv() => {
                    let Some(notification) = notification else { return };
                    let Some(event) = message_event(&notification) else { continue };
                    if forward_tx.send(event).await.is_err() {
                        return;
                    }
                }
            }
        }
    });

    // Pinger: periodic ping requests with per-session monotonic ids.
    // Enqueue is cancellation-aware so the task never outlives the stream.
    if let Some(interval) = app.heartbeat_interval.filter(|i| !i.is_zero()) {
        let ping_ct = ct.clone();
        let ping_tx = write_tx.clone();
        let request_ids = app.session_request_ids.clone();
        let ping_session_id = session_id.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; skip it so the first
            // ping goes out one full interval after the stream opens.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ping_ct.cancelled() => return,
                    _ = ticker.tick() => {
                        let ping = JsonRpcRequest::new(
                            request_ids.next(&ping_session_id),
                            "ping",
                            None,
                        );
                        let Some(event) = message_event(&ping) else { continue };
                        tokio::select! {
                            _ = ping_ct.cancelled() => return,
                            sent = ping_tx.send(event) => {
                                if sent.is_err() {
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        });
    }

    // Watcher: when the response body is dropped (client disconnect or
    // server shutdown) stop the workers and undo the registration.
    let engine = app.engine.clone();
    let watch_ct = ct.clone();
    let watch_tx = write_tx.clone();
    let watch_session_id = session_id.clone();
    tokio::spawn(async move {
        watch_tx.closed().await;
        watch_ct.cancel();
        engine.unregister_session(&watch_session_id).await;
        tracing::debug!(session_id = %watch_session_id, "listening stream closed");
    });

    sse_response(ReceiverStream::new(write_rx).map(Ok::<_, Infallible>))
}

/// Client-initiated session termination.
async fn handle_delete<E: McpEngine>(app: Arc<App<E>>, request: Request) -> Response {
    let session_id = header_value(request.headers(), HEADER_SESSION_ID);
    match app.policy.terminate(&session_id) {
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Session termination failed: {e}"),
        )
            .into_response(),
        Ok(true) => (
            StatusCode::METHOD_NOT_ALLOWED,
            "Session termination not allowed",
        )
            .into_response(),
        Ok(false) => {
            app.session_tools.remove(&session_id);
            app.session_log_levels.remove(&session_id);
            app.session_request_ids.remove(&session_id);
            tracing::debug!(session_id = %session_id, "session terminated");
            StatusCode::OK.into_response()
        }
    }
}

fn normalize_endpoint_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Query parameters as single values; the first occurrence of a name wins.
fn query_params(query: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if let Some(query) = query {
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(name.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }
    params
}

/// Renders one `event: message` frame. A marshal failure is logged and the
/// frame dropped; the stream itself stays up.
fn message_event<T: Serialize>(message: &T) -> Option<Event> {
    match serde_json::to_string(message) {
        Ok(data) => Some(Event::default().event("message").data(data)),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode sse event");
            None
        }
    }
}

/// Returns `false` once the consumer is gone and the caller should stop.
async fn forward_message<T: Serialize>(write_tx: &mpsc::Sender<Event>, message: &T) -> bool {
    match message_event(message) {
        Some(event) => write_tx.send(event).await.is_ok(),
        None => true,
    }
}

fn sse_response<S>(stream: S) -> Response
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    let mut response = Sse::new(stream).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(EVENT_STREAM_MIME_TYPE),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    response
}

fn parse_error_response(message: String) -> Response {
    let envelope = JsonRpcError::new(None, ErrorCode::PARSE_ERROR, message);
    (StatusCode::BAD_REQUEST, Json(envelope)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, Bytes};
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::{
        model::{LoggingLevel, Tool},
        policy::SessionIdError,
    };

    struct NoopEngine;

    impl McpEngine for NoopEngine {
        type Error = io::Error;

        async fn handle_message(
            &self,
            _ctx: RequestContext,
            _raw: Bytes,
        ) -> Option<ServerJsonRpcMessage> {
            None
        }

        async fn register_session(
            &self,
            _session: Arc<StreamableHttpSession>,
        ) -> Result<(), io::Error> {
            Ok(())
        }

        async fn unregister_session(&self, _session_id: &str) {}
    }

    fn test_app(policy: impl SessionIdPolicy + 'static) -> Arc<App<NoopEngine>> {
        Arc::new(App {
            engine: Arc::new(NoopEngine),
            policy: Arc::new(policy),
            session_tools: Arc::default(),
            session_log_levels: Arc::default(),
            session_request_ids: Arc::default(),
            context_fn: None,
            heartbeat_interval: None,
        })
    }

    fn request(method: Method, session_id: Option<&str>, body: Body) -> Request {
        let mut builder = http::Request::builder().method(method).uri("/mcp");
        if let Some(session_id) = session_id {
            builder = builder.header(HEADER_SESSION_ID, session_id);
        }
        builder.body(body).unwrap()
    }

    fn delete_request(session_id: &str) -> Request {
        request(Method::DELETE, Some(session_id), Body::empty())
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn endpoint_path_is_normalized() {
        assert_eq!(normalize_endpoint_path("/mcp"), "/mcp");
        assert_eq!(normalize_endpoint_path("mcp"), "/mcp");
        assert_eq!(normalize_endpoint_path("//rpc/mcp/"), "/rpc/mcp");
        assert_eq!(normalize_endpoint_path("rpc/mcp"), "/rpc/mcp");
    }

    #[test]
    fn query_params_keep_the_first_value() {
        let params = query_params(Some("a=1&b=2&a=3"));
        assert_eq!(params.get("a").map(String::as_str), Some("1"));
        assert_eq!(params.get("b").map(String::as_str), Some("2"));
        assert!(query_params(None).is_empty());
    }

    #[tokio::test]
    async fn unknown_method_on_endpoint_is_not_found() {
        let app = test_app(InsecureStatefulSessionIdPolicy);
        let put = request(Method::PUT, None, Body::empty());
        let response = dispatch(State(app), put).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_rejects_non_json_content_type() {
        let app = test_app(InsecureStatefulSessionIdPolicy);
        let post = http::Request::builder()
            .method(Method::POST)
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("{}"))
            .unwrap();
        let response = handle_post(app, post).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn post_answers_malformed_json_with_parse_error() {
        let app = test_app(InsecureStatefulSessionIdPolicy);
        let post = http::Request::builder()
            .method(Method::POST)
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(Body::from("this is not json"))
            .unwrap();
        let response = handle_post(app, post).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], json!(-32700));
        assert_eq!(body["id"], Value::Null);
    }

    #[tokio::test]
    async fn delete_purges_per_session_state() {
        let app = test_app(InsecureStatefulSessionIdPolicy);
        let session_id = "mcp-session-4fcd0b45-5537-4e08-960f-81a4a0dcf5b5";

        let mut tools = HashMap::new();
        tools.insert("echo".to_owned(), Tool::new("echo", "echo", Map::new()));
        app.session_tools.set(session_id, tools);
        app.session_log_levels.set(session_id, LoggingLevel::Debug);
        assert_eq!(app.session_request_ids.next(session_id), 1);

        let response = handle_delete(app.clone(), delete_request(session_id)).await;
        assert_eq!(response.status(), StatusCode::OK);

        assert!(app.session_tools.get(session_id).is_none());
        assert_eq!(app.session_log_levels.get(session_id), LoggingLevel::Error);
        assert_eq!(app.session_request_ids.next(session_id), 1);

        // A second delete of the same session is still a 200.
        let response = handle_delete(app, delete_request(session_id)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_maps_policy_refusal_to_405() {
        struct NoClientTermination;
        impl SessionIdPolicy for NoClientTermination {
            fn generate(&self) -> SessionId {
                "".into()
            }
            fn validate(&self, _session_id: &str) -> Result<bool, SessionIdError> {
                Ok(false)
            }
            fn terminate(&self, _session_id: &str) -> Result<bool, SessionIdError> {
                Ok(true)
            }
        }

        let app = test_app(NoClientTermination);
        let response = handle_delete(app, delete_request("any")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn delete_maps_policy_failure_to_500() {
        struct FailingTermination;
        impl SessionIdPolicy for FailingTermination {
            fn generate(&self) -> SessionId {
                "".into()
            }
            fn validate(&self, _session_id: &str) -> Result<bool, SessionIdError> {
                Ok(false)
            }
            fn terminate(&self, session_id: &str) -> Result<bool, SessionIdError> {
                Err(SessionIdError::Policy(format!("lookup failed: {session_id}")))
            }
        }

        let app = test_app(FailingTermination);
        let response = handle_delete(app, delete_request("any")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
