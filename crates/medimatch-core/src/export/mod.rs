//! Export of recommendation reports.

mod report;

pub use report::*;
