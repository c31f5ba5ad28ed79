//! Test-only helpers shared by the backend's unit and integration tests:
//! one-time logging setup and assertions on the `{message, status}`
//! response envelope.

pub mod envelope;
pub mod logging;
