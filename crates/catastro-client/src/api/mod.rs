//! Typed API surface over the shared pipeline
//!
//! One small client per backend resource: authentication, user accounts,
//! and taxpayer records. Each method decodes the backend's response
//! envelope and returns the payload; failures arrive pre-classified from
//! the transport layer.

pub mod auth;
pub mod citizens;
pub mod envelope;
pub mod users;

pub use auth::{AuthApi, Credentials, SessionUser};
pub use citizens::{Citizen, CitizenQuery, CitizenUpdate, CitizensApi, NewCitizen, TaxpayerType};
pub use envelope::{ApiEnvelope, ApiStatus};
pub use users::{NewUser, Role, UserRecord, UserUpdate, UsersApi};
