//! The engine-facing contract.
//!
//! The transport does not dispatch JSON-RPC itself; it hands raw messages
//! to an in-process engine and frames whatever comes back. Implement
//! [`McpEngine`] to plug a dispatcher in.

use std::sync::Arc;

use bytes::Bytes;
use http::{Extensions, HeaderMap, request::Parts};
use tokio_util::sync::CancellationToken;

use crate::{model::ServerJsonRpcMessage, session::StreamableHttpSession};

/// Per-request context handed to [`McpEngine::handle_message`].
///
/// Carries the session binding, the complete headers of the triggering
/// HTTP request, and a cancellation token that fires when the client
/// disconnects or the request is otherwise torn down. `extensions` is free
/// space for a configured [`HttpContextFn`] to stash values handlers can
/// read later.
pub struct RequestContext {
    pub session: Arc<StreamableHttpSession>,
    pub headers: HeaderMap,
    pub cancellation: CancellationToken,
    pub extensions: Extensions,
}

impl RequestContext {
    pub(crate) fn new(
        session: Arc<StreamableHttpSession>,
        headers: HeaderMap,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            session,
            headers,
            cancellation,
            extensions: Extensions::new(),
        }
    }
}

/// Hook for enriching the request context from the raw HTTP request, e.g.
/// copying auth headers into `extensions`.
pub type HttpContextFn = Arc<dyn Fn(&mut RequestContext, &Parts) + Send + Sync>;

/// An in-process MCP message dispatcher.
pub trait McpEngine: Send + Sync + 'static {
    type Error: std::error::Error + Send + 'static;

    /// Dispatch one raw JSON-RPC message. Returns `None` for notifications
    /// (messages without an id), which the transport answers with an empty
    /// 202. Mid-flight notifications go through the session's notification
    /// sender, never through the return value.
    fn handle_message(
        &self,
        ctx: RequestContext,
        raw: Bytes,
    ) -> impl Future<Output = Option<ServerJsonRpcMessage>> + Send;

    /// Register a long-lived listening session. Called for GET streams
    /// only; POST sessions stay anonymous to the engine.
    fn register_session(
        &self,
        session: Arc<StreamableHttpSession>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Drop a previously registered session. Paired with
    /// [`register_session`](McpEngine::register_session) around the
    /// lifetime of each listening stream.
    fn unregister_session(&self, session_id: &str) -> impl Future<Output = ()> + Send;
}

impl<E: McpEngine> McpEngine for Arc<E> {
    type Error = E::Error;

    fn handle_message(
        &self,
        ctx: RequestContext,
        raw: Bytes,
    ) -> impl Future<Output = Option<ServerJsonRpcMessage>> + Send {
        (**self).handle_message(ctx, raw)
    }

    fn register_session(
        &self,
        session: Arc<StreamableHttpSession>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).register_session(session)
    }

    fn unregister_session(&self, session_id: &str) -> impl Future<Output = ()> + Send {
        (**self).unregister_session(session_id)
    }
}
