//! Long-lived services shared by the route handlers.

pub mod game;
pub mod timer;
