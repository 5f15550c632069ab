//! REST access to the backend: transport, errors, cached queries, CRUD helpers.

pub mod api_utils;
pub mod client;
pub mod crud;
pub mod error;
pub mod transport;

pub use client::ApiClient;
pub use error::{extract_error_message, ApiError};
pub use transport::{ApiTransport, HttpMethod, HttpTransport};
