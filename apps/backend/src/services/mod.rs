//! Backend services

pub mod session;
