//! API route handlers

pub mod decks;
pub mod session;
