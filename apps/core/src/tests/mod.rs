//! Test Module
//!
//! Cross-module suites for ContentPilot.
//!
//! ## Test Categories
//! - `engine_tests`: scoring properties that hold across the engine
//! - `service_tests`: services wired to HTTP mocks
//! - `integration_tests`: full workflows from topic to published post
