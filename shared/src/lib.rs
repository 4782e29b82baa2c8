//! Shared library for the reservation reminder Lambda.
//!
//! Looks up a reservation in Airtable, picks the LINE channel that owns the
//! user, and pushes a reminder message through the LINE Messaging API.

pub mod airtable;
pub mod config;
pub mod credentials;
pub mod error;
pub mod handler;
pub mod http;
pub mod line;
pub mod message;
pub mod models;
pub mod reminder;

#[cfg(test)]
mod test_support;

pub use airtable::AirtableClient;
pub use config::Config;
pub use credentials::{Credential, CredentialRegistry};
pub use error::{Error, Result};
pub use handler::handle;
pub use line::LineClient;
pub use models::{Reservation, SendRequest};
pub use reminder::ReminderService;
