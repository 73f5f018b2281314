//! Suite Common Library
//!
//! Shared error type, configuration and JSON HTTP client used by every
//! endpoint wrapper in the app suite.

pub mod config;
pub mod error;
pub mod http_client;
pub mod models;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http_client::{ApiClient, APP_ID_HEADER};
pub use models::{decode_body, ApiEnvelope, ApiReply, ResultExt};
