//! FruitDB - in-memory fruit catalogue served over HTTP

pub mod api;
pub mod config;
pub mod model;
pub mod server;
pub mod service;
pub mod store;
