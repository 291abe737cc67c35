//! Permit Fee Model
//!
//! Pure, deterministic fee computation for permit applications.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - No side effects, no global state; the fee
//!    schedule is an injected lookup capability
//! 2. **Deterministic** - Same inputs produce identical outputs across
//!    all platforms
//! 3. **No floats** - All arithmetic uses integer toea and basis points
//! 4. **Overflow-safe** - Uses checked/saturating arithmetic
//!
//! # Type Architecture
//!
//! Pure data types (`FeeParameters`, `FeeStructureRecord`, `FeeComponent`,
//! `FeeCalculationResult`) are defined in `lib-types::fees` and re-exported
//! here for convenience.
//!
//! # Usage
//!
//! ```ignore
//! use lib_fees::{calculate_fees, StaticFeeSchedule};
//! use lib_types::{ActivityLevel, ActivityType, FeeParameters};
//!
//! let params = FeeParameters {
//!     permit_type: "Environment Permit".to_string(),
//!     activity_type: Some(ActivityType::New),
//!     activity_level: Some(ActivityLevel::Level2),
//!     prescribed_activity_id: None,
//!     project_cost: None,
//!     land_area_hectares: None,
//!     duration_years: Some(3),
//!     ods_chemical: None,
//!     waste_stream: None,
//! };
//!
//! let schedule = StaticFeeSchedule::from_json_str(schedule_json)?;
//! let breakdown = calculate_fees(&params, &schedule)?;
//! ```

pub mod errors;
pub mod model;
pub mod rates;
pub mod schedule;

#[cfg(test)]
mod golden_vectors;

// Re-export pure data types from lib-types (canonical location)
pub use lib_types::fees::{
    ActivityLevel, ActivityType, FeeCalculationResult, FeeCategory, FeeComponent, FeeParameters,
    FeeSource, FeeStructureRecord, MultiplierAdvisory, OdsChemical, WasteStream,
};

// Re-export computation entry points and error types
pub use errors::{FeeError, FeeResult, FieldIssue, FieldProblem, LookupError};
pub use model::{
    calculate_fees, calculate_with_structure, resolve_fee_structure, validate, PermitIdentity,
};
pub use schedule::{fallback_structure, FeeStructureLookup, StaticFeeSchedule};
