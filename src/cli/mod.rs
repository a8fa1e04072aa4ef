//! Command implementations behind the `galgo` binary.

pub mod commands;
