//! attend-core
//!
//! Pure domain types for adult ADHD screening: questions, response scales,
//! answer snapshots and the structured result records produced by the
//! scorers. No scoring logic lives here — this is the shared vocabulary
//! between the scorers and whatever renders their output.

pub mod error;
pub mod models;
