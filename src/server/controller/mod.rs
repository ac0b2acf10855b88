//! HTTP request handlers.
//!
//! Controllers extract request data, call the service layer, and convert domain models to
//! DTOs. They hold no lookup logic of their own.

pub mod discord;
pub mod health;

#[cfg(test)]
mod test;
