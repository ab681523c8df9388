//! Domain models for medication alternative recommendations.

mod constraint;
mod drug_class;
mod medication;
mod recommendation;

pub use constraint::*;
pub use drug_class::*;
pub use medication::*;
pub use recommendation::*;
