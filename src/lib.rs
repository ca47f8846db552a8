#![doc = include_str!("../README.md")]

/// Article headers and composition
pub mod article;
mod client;
/// NNTP command builders and response parsers
pub mod commands;
mod config;
mod error;
mod response;

pub use article::{Article, Headers};
pub use client::NntpClient;
pub use commands::GroupInfo;
pub use config::ServerConfig;
pub use error::{NntpError, Result};
pub use response::{NntpResponse, codes};
