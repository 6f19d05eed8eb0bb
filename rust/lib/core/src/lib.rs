pub mod config;
pub mod envelope;
pub mod error;
pub mod normalize;

pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{error_code, ClientError};
pub use normalize::{body_message, normalize, Failure, UNKNOWN_ERROR};
