// ABOUTME: Library exports for mdocx CLI modules for testing and external use
// ABOUTME: Makes internal modules available to integration tests and benchmarks

pub mod browse;
pub mod cli;
pub mod cli_output;
pub mod completions;
pub mod config;
pub mod constants;
pub mod image_protocols;
pub mod inspect;
pub mod markdown;
pub mod opener;
pub mod validate;
pub mod version;
