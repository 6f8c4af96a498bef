#![doc = include_str!("../README.md")]

pub mod engine;
pub mod http_header;
pub mod model;
pub mod policy;
pub mod server;
pub mod session;

pub use engine::{HttpContextFn, McpEngine, RequestContext};
pub use policy::{
    InsecureStatefulSessionIdPolicy, SESSION_ID_PREFIX, SessionIdError, SessionIdPolicy,
    StatelessSessionIdPolicy,
};
pub use server::{DEFAULT_ENDPOINT_PATH, StreamableHttpServer};
pub use session::{
    NOTIFICATION_CHANNEL_CAPACITY, SessionId, SessionLogStore, SessionRequestIdStore,
    SessionToolStore, StreamableHttpSession,
};
