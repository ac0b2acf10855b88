//! Wire types returned by the HTTP API.
//!
//! DTOs here are serialized straight into JSON responses and documented in the OpenAPI
//! schema. Domain models live in `server::model` and convert into these at the controller
//! boundary.

pub mod api;
pub mod discord;
pub mod health;
