//! # Wardrobe Client
//!
//! Typed async client for the what-to-wear wardrobe API.
//!
//! The client wraps `reqwest`, attaches the stored bearer credential to
//! every request, unwraps the backend's uniform `{code, message, data}`
//! envelope, and surfaces every failure (transport, HTTP, or
//! application-level) as one displayable [`ClientError`].
//!
//! ```no_run
//! use wardrobe_client::{ClientConfig, WardrobeClient};
//! use wardrobe_types::LoginRequest;
//!
//! # async fn run() -> Result<(), wardrobe_client::ClientError> {
//! let client = WardrobeClient::new(ClientConfig::from_env())?
//!     .on_unauthorized(|event| {
//!         eprintln!("session expired on {}", event.path);
//!     });
//!
//! client.login(&LoginRequest::new("carol", "secret1")).await?;
//! let profile = client.get_profile().await?;
//! println!("hello, {}", profile.username);
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod error;
mod session;

pub use client::{RequestOptions, UnauthorizedEvent, WardrobeClient};
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use session::{
    FileSessionStore, MemorySessionStore, SessionStore, SharedSessionStore, StoredSession,
};

// Re-exported so `execute`/`call` callers need no direct reqwest dependency.
pub use reqwest::Method;
