//! TCP accept loop and connection task management.

pub mod listener;
