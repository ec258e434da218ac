//! Infrastructure layer - adapters for HTTP, persistence, and configuration

pub mod config;
pub mod http;
pub mod persistence;
pub mod schema;
pub mod session;
pub mod state;
