//! Server-side gateway implementation.
//!
//! This module contains the complete backend: the long-lived Discord session, the member
//! lookup logic built on top of it, and the HTTP API that exposes those lookups. The
//! backend uses Axum as the web framework and Serenity for the Discord bot connection.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Lookup logic and upstream error classification
//! - **Bot Layer** (`bot/`) - The single Discord session and its readiness state
//! - **Model Layer** (`model/`) - Domain models produced by the service layer
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (Discord session, avatar URLs)
//! - **Startup** (`startup`) - Logging, readiness gate, listener and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Input parsing and avatar URL construction
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** hands the raw path parameter to the service
//! 3. **Service** validates input, checks readiness, and queries the Discord session
//! 4. **Bot** resolves the guild from cache and fetches members over HTTP
//! 5. **Service** normalizes members or classifies the upstream failure
//! 6. **Controller** converts the result to a DTO or an error response

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
