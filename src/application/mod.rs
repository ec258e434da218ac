//! Application layer - use case services and ports

pub mod ports;
pub mod services;
