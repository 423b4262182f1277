//! Service plumbing around the signal engine.

pub mod http;
pub mod scanner;
