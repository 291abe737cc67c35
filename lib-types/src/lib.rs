//! Permit service primitives.
//! Stable, behavior-free, serialization-safe.
//!
//! Rule: No floating point in fee math. Ever.

pub mod fees;
pub mod primitives;

pub use primitives::{
    display_kina, kina, Amount, Bps, PrescribedActivityId, BPS_ONE, TOEA_PER_KINA,
};

pub use fees::{
    ActivityLevel, ActivityType, FeeCalculationResult, FeeCategory, FeeComponent, FeeParameters,
    FeeSource, FeeStructureRecord, MultiplierAdvisory, OdsChemical, WasteStream,
};
