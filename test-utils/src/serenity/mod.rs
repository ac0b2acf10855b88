//! Test factories for creating Serenity API objects.
//!
//! This module provides factories for creating mock Serenity structs for testing purposes.
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Overview
//!
//! When testing code that consumes Discord's API via Serenity, you often need to create
//! mock Serenity structs. These factories provide a consistent way to create these objects
//! with sensible defaults while allowing customization of key fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, member::MemberFactory};
//!
//! #[tokio::test]
//! async fn test_guild_users() {
//!     let plain = create_test_member(111111111, "plain");
//!     let bot = MemberFactory::new(222222222, "helper").bot(true).build();
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `member::MemberFactory` - Create Serenity Member objects with a fluent builder
//! - `member::create_test_member` - Create a Member with default values

pub mod member;

pub use member::create_test_member;
