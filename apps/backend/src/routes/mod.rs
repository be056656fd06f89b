//! HTTP route handlers

pub mod catalog;
pub mod events;
pub mod session;
