mod config;
mod error;
mod models;
mod retry_policy;

pub use config::{ApiEnvironment, ClientConfig, RequestOptions};
pub use error::{Error, Result};
pub use models::*;
pub use retry_policy::RetryPolicy;
