//! REST gateway in front of a cloud text-translation provider.
//!
//! Every endpoint follows the same pattern: validate the declared required
//! fields, forward one request to the provider, reshape the response into a
//! simplified JSON contract, and answer 200 on success or 400 with an error
//! message on any failure.

pub mod config;
pub mod error;
pub mod provider;
pub mod routes;
pub mod state;
pub mod validate;
