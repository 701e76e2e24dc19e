// Public contracts for the Calendar API
// This crate defines the wire DTOs shared by the HTTP layer and its clients

pub mod event;

pub use event::*;
