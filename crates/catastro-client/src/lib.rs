//! Catastro Client - async client for the taxpayer-administration backend
//!
//! This crate provides the HTTP layer an administrative application uses to
//! talk to the Catastro REST backend: login and cookie-based sessions, user
//! accounts with roles, and Ecuadorian taxpayer ("citizen") records.
//!
//! # Main Components
//!
//! - **Transport**: one shared [`ApiClient`] every call funnels through,
//!   with per-request timing metadata and two independent observability
//!   gates (request/response logging, response metrics)
//! - **Error Taxonomy**: every failure is classified as exactly one of API
//!   (server responded non-2xx), network (no response received), or
//!   configuration (request never dispatched) using `thiserror`
//! - **Session Events**: a broadcast bus that fires when the backend
//!   answers 401, so the application can force re-login
//! - **Typed API**: auth, user, and taxpayer endpoints over the pipeline
//!
//! # Example
//!
//! ```no_run
//! use catastro_client::{ApiClient, AuthApi, Credentials, SessionEvents, TransportConfig};
//!
//! # async fn example() -> catastro_client::Result<()> {
//! let events = SessionEvents::default();
//! let mut expiry = events.subscribe();
//!
//! let client = ApiClient::new(TransportConfig::from_env(), events)?;
//! let auth = AuthApi::new(client);
//!
//! let user = auth
//!     .login(&Credentials {
//!         email: "admin@example.ec".into(),
//!         password: "secret".into(),
//!     })
//!     .await?;
//! println!("signed in as {}", user.name);
//!
//! // Elsewhere: expiry.recv().await fires when a 401 invalidates the session
//! # let _ = &mut expiry;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod events;
pub mod http;

// Re-export main types for convenience
pub use api::{
    ApiEnvelope, ApiStatus, AuthApi, Citizen, CitizenQuery, CitizenUpdate, CitizensApi,
    Credentials, NewCitizen, NewUser, Role, SessionUser, TaxpayerType, UserRecord, UserUpdate,
    UsersApi,
};
pub use error::{
    display_message, message_from_payload, Error, Result, CONNECTIVITY_MESSAGE, FALLBACK_MESSAGE,
};
pub use events::{SessionEvent, SessionEvents};
pub use http::{ApiClient, ApiResponse, Method, RequestMetrics, RequestOptions, TransportConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
