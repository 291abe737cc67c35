//! Fee primitives for the permit service.
//!
//! Pure data types for permit fee calculation. Behavior (computation logic)
//! lives in lib-fees.
//!
//! Rule: These types must remain behavior-free and serialization-stable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::primitives::{Amount, Bps, PrescribedActivityId};

// ============================================================================
// CLASSIFICATION ENUMS
// ============================================================================

/// Kind of permit action being applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActivityType {
    /// New permit application
    New = 0,
    /// Amendment of an existing permit
    Amendment = 1,
    /// Transfer of a permit to another holder
    Transfer = 2,
    /// Amalgamation of multiple permits
    Amalgamation = 3,
    /// Renewal of an expiring permit
    Renewal = 4,
    /// Surrender of a permit
    Surrender = 5,
}

impl ActivityType {
    /// All activity types in stable order
    pub const ALL: &'static [ActivityType] = &[
        ActivityType::New,
        ActivityType::Amendment,
        ActivityType::Transfer,
        ActivityType::Amalgamation,
        ActivityType::Renewal,
        ActivityType::Surrender,
    ];

    /// Get human-readable display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            ActivityType::New => "New",
            ActivityType::Amendment => "Amendment",
            ActivityType::Transfer => "Transfer",
            ActivityType::Amalgamation => "Amalgamation",
            ActivityType::Renewal => "Renewal",
            ActivityType::Surrender => "Surrender",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Environmental-impact tier of the prescribed activity
///
/// Drives review rigor and selects the fee category row in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActivityLevel {
    /// Level 1 - lowest environmental impact
    Level1 = 1,
    /// Level 2 - moderate environmental impact
    Level2 = 2,
    /// Level 3 - highest environmental impact
    Level3 = 3,
}

impl ActivityLevel {
    /// All activity levels in stable order
    pub const ALL: &'static [ActivityLevel] = &[
        ActivityLevel::Level1,
        ActivityLevel::Level2,
        ActivityLevel::Level3,
    ];

    /// Fee-category label used as the third key of the schedule lookup
    pub const fn fee_category(&self) -> &'static str {
        match self {
            ActivityLevel::Level1 => "Level 1",
            ActivityLevel::Level2 => "Level 2",
            ActivityLevel::Level3 => "Level 3",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fee_category())
    }
}

/// Ozone-depleting-substance chemical class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OdsChemical {
    /// Chlorofluorocarbons
    Cfc = 0,
    /// Hydrochlorofluorocarbons
    Hcfc = 1,
    /// Hydrofluorocarbons
    Hfc = 2,
    /// Halons (fire suppression agents)
    Halons = 3,
    /// Any other controlled substance
    Other = 4,
}

impl OdsChemical {
    /// All chemical classes in stable order
    pub const ALL: &'static [OdsChemical] = &[
        OdsChemical::Cfc,
        OdsChemical::Hcfc,
        OdsChemical::Hfc,
        OdsChemical::Halons,
        OdsChemical::Other,
    ];

    /// Get human-readable display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            OdsChemical::Cfc => "CFC",
            OdsChemical::Hcfc => "HCFC",
            OdsChemical::Hfc => "HFC",
            OdsChemical::Halons => "Halons",
            OdsChemical::Other => "Other",
        }
    }
}

impl fmt::Display for OdsChemical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Regulated waste stream handled by the activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WasteStream {
    /// Hazardous waste
    Hazardous = 0,
    /// Industrial waste
    Industrial = 1,
    /// Chemical waste
    Chemical = 2,
    /// Medical waste
    Medical = 3,
    /// Radioactive waste
    Radioactive = 4,
    /// Any other regulated waste
    Other = 5,
}

impl WasteStream {
    /// All waste streams in stable order
    pub const ALL: &'static [WasteStream] = &[
        WasteStream::Hazardous,
        WasteStream::Industrial,
        WasteStream::Chemical,
        WasteStream::Medical,
        WasteStream::Radioactive,
        WasteStream::Other,
    ];

    /// Get human-readable display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            WasteStream::Hazardous => "Hazardous",
            WasteStream::Industrial => "Industrial",
            WasteStream::Chemical => "Chemical",
            WasteStream::Medical => "Medical",
            WasteStream::Radioactive => "Radioactive",
            WasteStream::Other => "Other",
        }
    }
}

impl fmt::Display for WasteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Category a fee component belongs to in the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FeeCategory {
    /// Processing/administrative overhead
    Administration = 0,
    /// Technical assessment work plan
    Technical = 1,
    /// Conditional surcharge (ODS handling, waste management)
    Special = 2,
}

impl FeeCategory {
    /// Get human-readable display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            FeeCategory::Administration => "Administration",
            FeeCategory::Technical => "Technical",
            FeeCategory::Special => "Special",
        }
    }
}

impl fmt::Display for FeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Whether the fee structure came from reference data or the built-in default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FeeSource {
    /// Resolved from the fee_structures reference table
    Database = 0,
    /// No matching row; the fixed conservative default was used
    Fallback = 1,
}

// ============================================================================
// INPUT PARAMETERS
// ============================================================================

/// Input parameters for one fee calculation
///
/// Assembled by the caller from application form fields. Identity fields
/// mirror the form, so they are optional here and validated by lib-fees
/// before any lookup or arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeParameters {
    /// Permit category label, e.g. "Environment Permit" (empty = missing)
    pub permit_type: String,
    /// Kind of permit action
    pub activity_type: Option<ActivityType>,
    /// Environmental-impact tier
    pub activity_level: Option<ActivityLevel>,
    /// Reference into the prescribed-activity taxonomy (pass-through)
    pub prescribed_activity_id: Option<PrescribedActivityId>,
    /// Total project cost in toea
    pub project_cost: Option<Amount>,
    /// Land area of the activity in whole hectares
    pub land_area_hectares: Option<u64>,
    /// Permit duration in years (must be >= 1 when present)
    pub duration_years: Option<u32>,
    /// ODS chemical class handled, if any
    pub ods_chemical: Option<OdsChemical>,
    /// Regulated waste stream handled, if any
    pub waste_stream: Option<WasteStream>,
}

// ============================================================================
// REFERENCE DATA
// ============================================================================

/// One row of the fee_structures reference table
///
/// Read-only to the fee engine; keyed by (permit_type, activity_type,
/// fee_category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStructureRecord {
    /// Permit category label (lookup key)
    pub permit_type: String,
    /// Fee-category label, e.g. "Level 2" (lookup key)
    pub fee_category: String,
    /// Kind of permit action (lookup key)
    pub activity_type: ActivityType,
    /// Annual recurrent fee in toea (annualized administration rate)
    pub annual_recurrent_fee: Amount,
    /// Flat quoted work plan amount in toea (technical assessment)
    pub work_plan_amount: Amount,
    /// Reserved category multiplier in basis points (pass-through)
    pub category_multiplier: Bps,
    /// Statutory processing turnaround in days, before duration adjustment
    pub base_processing_days: u32,
    /// Administration form identifier (pass-through)
    pub administration_form: String,
    /// Technical form identifier (pass-through)
    pub technical_form: String,
    /// Inactive rows are ignored by lookups
    pub is_active: bool,
}

// ============================================================================
// CALCULATION OUTPUT
// ============================================================================

/// One line item of the fee breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeComponent {
    /// Display name, e.g. "Administration Fee"
    pub component_name: String,
    /// Breakdown category
    pub fee_category: FeeCategory,
    /// Amount before multipliers, in toea
    pub base_amount: Amount,
    /// Final amount contributing to the total, in toea
    pub calculated_amount: Amount,
    /// Human-readable derivation, for audit display
    pub formula_used: String,
    /// Mandatory components cannot be waived by reviewers
    pub is_mandatory: bool,
    /// Free-form annotation
    pub notes: String,
}

/// Advisory multiplier annotation
///
/// Cost/area tier multipliers are computed for reviewer display only and
/// never contribute to the total. Keeping them on a separate row type makes
/// that separation structural rather than conventional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierAdvisory {
    /// Display label, e.g. "Project Cost Loading"
    pub label: String,
    /// Suggested uplift in basis points (2000 = +20%)
    pub uplift_bps: Bps,
    /// Explanation of which tier applied and why
    pub notes: String,
}

/// Complete result of one fee calculation
///
/// # Invariants
///
/// - `total_fee` equals the exact sum of `calculated_amount` over
///   `components` (advisories contribute nothing)
/// - `components` are in emission order: administration, technical, then
///   special surcharges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCalculationResult {
    /// Ordered fee line items
    pub components: Vec<FeeComponent>,
    /// Advisory multiplier annotations (display only)
    pub advisories: Vec<MultiplierAdvisory>,
    /// Administration fee in toea
    pub administration_fee: Amount,
    /// Technical fee in toea
    pub technical_fee: Amount,
    /// Sum of all component calculated amounts, in toea
    pub total_fee: Amount,
    /// Processing turnaround in days, after duration adjustment
    pub processing_days: u32,
    /// Administration form identifier copied from the resolved structure
    pub administration_form: String,
    /// Technical form identifier copied from the resolved structure
    pub technical_form: String,
    /// Whether the lookup hit reference data or the built-in default
    pub source: FeeSource,
}

// ============================================================================
// TESTS
// ============================================================================
