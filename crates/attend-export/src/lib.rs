//! attend-export
//!
//! Presentation layer: English prose for the scorers' structured output and
//! a Tera-rendered text report.

pub mod error;
pub mod prose;
pub mod report;
