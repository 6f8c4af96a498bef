//! Header names and media types shared across the transport.

pub const HEADER_SESSION_ID: &str = "Mcp-Session-Id";

pub const JSON_MIME_TYPE: &str = "application/json";
pub const EVENT_STREAM_MIME_TYPE: &str = "text/event-stream";
