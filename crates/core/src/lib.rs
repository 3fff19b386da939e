pub mod client;
pub mod error;
pub mod protocol;
pub mod transport;

pub use client::{ClientConfig, RtspClient};
pub use error::{Result, RtspError};
pub use protocol::{Method, RtspRequest};
