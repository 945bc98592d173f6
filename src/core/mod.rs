//! Core infrastructure

pub mod logging;
