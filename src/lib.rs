//! PayWise: a mock peer-to-peer payment app.
//!
//! The transfer wizard and the history filter pipeline are plain functions over
//! explicit state, backed by a static in-memory data set. The `paywise` binary
//! drives them from a line-oriented terminal front-end.

pub mod commands;
pub mod config;
pub mod data;
pub mod models;
pub mod services;
pub mod utils;
