mod client;
mod config;
mod error;
mod protocol_types;
pub use client::*;
pub use config::*;
pub use error::*;
pub use protocol_types::*;
