//! MongoDB target adapter

pub mod client;

pub use client::MongoTarget;
