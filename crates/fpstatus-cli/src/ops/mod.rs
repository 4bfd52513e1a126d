//! Operations shared by the commands.

pub mod fetch;
