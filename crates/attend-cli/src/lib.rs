//! attend-cli
//!
//! Configuration and command implementations behind the `attend` binary.

pub mod commands;
pub mod config;
