//! Guild Gateway Test Utils
//!
//! Provides shared testing utilities for the guild gateway. Discord data reaches the gateway
//! as Serenity model types, so tests need realistic `Member` values without a live gateway
//! connection. This crate builds them by deserializing Discord-shaped JSON, the same way
//! Serenity does when it receives a response from the API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::member::MemberFactory;
//!
//! #[tokio::test]
//! async fn test_member_normalization() {
//!     let member = MemberFactory::new(123456789, "user")
//!         .nick("Display Name")
//!         .build();
//!
//!     // Feed the member through the code under test...
//! }
//! ```

pub mod serenity;
