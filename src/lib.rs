//! HF Router Relay
//!
//! A single-purpose proxy between the portfolio frontend and the Hugging
//! Face router. The browser sends a plain prompt; the relay wraps it in a
//! fixed chat-completions request, authenticates upstream with a key the
//! frontend never sees, and answers in the legacy
//! `[{"generated_text": ...}]` shape.
//!
//! ## Module Structure
//!
//! - `config`: startup configuration and the fixed request constants
//! - `error`: error taxonomy and its HTTP mapping
//! - `router_client`: the outbound chat-completions call
//! - `server`: axum routes, handlers, and startup

/// Startup configuration and fixed request constants
pub mod config;

/// Error taxonomy and HTTP mapping
pub mod error;

/// Outbound HF router client
pub mod router_client;

/// Axum routes, handlers, and startup
pub mod server;

pub use config::{
    RelayConfig, DEFAULT_PORT, HF_ROUTER_URL, MAX_TOKENS, MODEL, SYSTEM_PROMPT, TEMPERATURE,
};
pub use error::{RelayError, BODY_SNIPPET_CHARS};
pub use router_client::{ChatMessage, RouterClient};
pub use server::{router, run_server, GeneratedText, HealthResponse, PromptRequest, RelayState};
