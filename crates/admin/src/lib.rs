//! Admin client for the chatbot answer management panel.
//!
//! [`panel::AnswerPanel`] is a headless view-model: the host UI renders its
//! state and forwards user actions, while notifications and navigation are
//! injected capabilities rather than ambient context. [`client::AnswersClient`]
//! talks to the REST endpoints with credentialed requests.

pub mod client;
pub mod notify;
pub mod panel;
pub mod types;
