//! Request handlers.
//!
//! Handlers delegate to the corresponding repository in `cbot_db` and map
//! errors via [`crate::error::AppError`].

pub mod chatbot_answer;
