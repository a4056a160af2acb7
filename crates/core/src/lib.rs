//! Shared domain types and logic for the chatbot content admin.
//!
//! Kept free of web- and database-framework dependencies so both the API
//! server and the admin client can depend on it.

pub mod display;
pub mod error;
pub mod types;
