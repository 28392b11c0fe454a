//! MySQL source adapter

pub mod client;

pub use client::MySqlClient;
