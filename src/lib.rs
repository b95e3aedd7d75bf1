pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod report;
pub mod search;
