//! AdIntel API client
//!
//! Platform-neutral wrapper around the backend's `/api/v1` REST surface.
//! The browser dashboard and native tooling plug in their own
//! [`Transport`] and [`TokenStore`]; everything else (endpoint catalog,
//! auth-token injection, list normalization, error taxonomy) lives here.

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod i18n;
pub mod models;
pub mod saved;
pub mod token;
pub mod transport;

pub use client::ApiClient;
pub use endpoints::{AdQuery, Endpoint};
pub use envelope::ListEnvelope;
pub use error::{ApiError, Result};
pub use i18n::{Locale, Message};
pub use saved::SavedItems;
pub use token::{MemoryTokenStore, TokenStore, TOKEN_STORAGE_KEY};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
