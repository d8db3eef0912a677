//! Test Module
//!
//! Cross-module test suite for the Chattomo backend.
//!
//! ## Test Categories
//! - `brain_tests`: Language resolution, classification, scoring, tags, analyzer
//! - `log_store_tests`: CSV analysis log layout and appends
//! - `server_tests`: HTTP endpoints driven in-process
//! - `config_tests`: Environment-driven configuration

pub mod brain_tests;
