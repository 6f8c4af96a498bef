use std::{
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use bytes::Bytes;
use mcp_streamhttp::{
    McpEngine, RequestContext, StreamableHttpSession,
    model::{
        ErrorCode, JsonRpcError, JsonRpcNotification, JsonRpcResponse, RequestId,
        ServerJsonRpcMessage,
    },
};
use serde_json::{Value, json};

/// A value a context hook can stash for handlers to read back.
#[derive(Clone)]
pub struct ContextTag(pub String);

/// Scriptable engine: the tool name selects the behavior under test.
#[derive(Default)]
pub struct TestEngine {
    pub reject_registration: bool,
    pub handled: AtomicUsize,
    pub cancelled: Arc<AtomicUsize>,
    pub registered: Mutex<Vec<String>>,
    pub unregistered: Mutex<Vec<String>>,
    /// Gate for the `progress-gated` tool: it holds its reply back until
    /// the test calls `release.notify_one()`.
    pub release: Arc<tokio::sync::Notify>,
}

fn respond(id: RequestId, result: Value) -> Option<ServerJsonRpcMessage> {
    Some(ServerJsonRpcMessage::Response(JsonRpcResponse::new(
        id, result,
    )))
}

impl TestEngine {
    async fn handle_tool_call(
        &self,
        name: &str,
        id: RequestId,
        ctx: RequestContext,
    ) -> Option<ServerJsonRpcMessage> {
        match name {
            "noop" => respond(id, json!({ "ok": true })),
            "progress" => {
                let sender = ctx.session.notification_sender();
                for step in 1..=2i64 {
                    let notification = JsonRpcNotification::new(
                        "notifications/progress",
                        Some(json!({ "progress": step, "total": 2 })),
                    );
                    sender.send(notification).await.ok()?;
                    // A send into a channel with spare capacity resolves on
                    // its first poll; suspend so each notification can be
                    // observed while this handler is still running.
                    tokio::task::yield_now().await;
                }
                respond(id, json!({ "ok": true }))
            }
            "progress-gated" => {
                let sender = ctx.session.notification_sender();
                for step in 1..=2i64 {
                    let notification = JsonRpcNotification::new(
                        "notifications/progress",
                        Some(json!({ "progress": step, "total": 2 })),
                    );
                    sender.send(notification).await.ok()?;
                    tokio::task::yield_now().await;
                }
                // Stay in flight until the test releases the reply.
                self.release.notified().await;
                respond(id, json!({ "ok": true }))
            }
            "upgrade" => {
                ctx.session.upgrade_to_sse_when_receive_notification();
                respond(id, json!({ "ok": true }))
            }
            "echo-headers" => {
                let probe = ctx
                    .headers
                    .get("x-probe")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                respond(id, json!({ "x-probe": probe }))
            }
            "echo-params" => {
                let params = ctx.session.params().clone();
                respond(id, json!({ "params": params }))
            }
            "echo-tag" => {
                let tag = ctx
                    .extensions
                    .get::<ContextTag>()
                    .map(|tag| tag.0.clone())
                    .unwrap_or_default();
                respond(id, json!({ "tag": tag }))
            }
            "block" => {
                // Hangs forever; the spawned watcher records whether the
                // transport cancelled the request context.
                let cancelled = self.cancelled.clone();
                let token = ctx.cancellation.clone();
                tokio::spawn(async move {
                    token.cancelled().await;
                    cancelled.fetch_add(1, Ordering::SeqCst);
                });
                std::future::pending::<Option<ServerJsonRpcMessage>>().await
            }
            other => Some(ServerJsonRpcMessage::Error(JsonRpcError::new(
                Some(id),
                ErrorCode::INVALID_PARAMS,
                format!("unknown tool: {other}"),
            ))),
        }
    }
}

impl McpEngine for TestEngine {
    type Error = io::Error;

    async fn handle_message(
        &self,
        ctx: RequestContext,
        raw: Bytes,
    ) -> Option<ServerJsonRpcMessage> {
        self.handled.fetch_add(1, Ordering::SeqCst);
        let message: Value = serde_json::from_slice(&raw).ok()?;
        let id: RequestId = serde_json::from_value(message.get("id")?.clone()).ok()?;
        let method = message
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or_default();
        match method {
            "initialize" => respond(id, json!({ "protocolVersion": "2025-03-26" })),
            "ping" => respond(id, json!({})),
            "tools/call" => {
                let name = message
                    .pointer("/params/name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                self.handle_tool_call(&name, id, ctx).await
            }
            _ => Some(ServerJsonRpcMessage::Error(JsonRpcError::new(
                Some(id),
                ErrorCode::METHOD_NOT_FOUND,
                "method not found",
            ))),
        }
    }

    async fn register_session(
        &self,
        session: Arc<StreamableHttpSession>,
    ) -> Result<(), io::Error> {
        if self.reject_registration {
            return Err(io::Error::other("engine refused the session"));
        }
        self.registered
            .lock()
            .unwrap()
            .push(session.session_id().to_owned());
        Ok(())
    }

    async fn unregister_session(&self, session_id: &str) {
        self.unregistered.lock().unwrap().push(session_id.to_owned());
    }
}
