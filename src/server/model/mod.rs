//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer. Domain models
//! are built from Serenity types at the bot boundary and transformed to DTOs at the
//! controller boundary, so neither Serenity nor the wire format leaks into lookup logic.

pub mod discord;
