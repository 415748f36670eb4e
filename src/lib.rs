//! Mediacrawl - crawled media listing normalization
//!
//! This library crate exposes the application layer (config, page pipeline,
//! error reporting) for integration testing. The engine itself lives in
//! `mediacrawl-parser`.

pub mod config;
pub mod pipeline;
pub mod report;
