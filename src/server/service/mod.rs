//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the Discord session. Services are responsible for:
//!
//! - **Validation**: Rejecting malformed input before Discord is contacted
//! - **Orchestration**: Checking readiness, resolving guilds and fetching members
//! - **Domain Models**: Producing domain models rather than DTOs or Serenity types
//! - **Error Classification**: Turning raw upstream failures into `LookupError` kinds

pub mod discord;
