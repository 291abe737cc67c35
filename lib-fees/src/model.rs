//! Permit Fee Calculation (Pure Function)
//!
//! Deterministic fee breakdown for permit applications.
//!
//! # Rules (enforced in code)
//!
//! - Validation precedes any lookup or arithmetic
//! - No floats; u128 arithmetic internally, multiply-before-divide
//! - Fallback applies only to a confirmed no-match, never to a lookup failure
//! - `total_fee` equals the exact sum of component amounts; advisory
//!   multiplier rows contribute nothing
//!
//! The engine reads reference data and returns a value. Persisting the
//! result (e.g. writing `final_fee_amount` onto an application record) is
//! the caller's responsibility.

use lib_types::{
    display_kina, ActivityLevel, ActivityType, Amount, FeeCalculationResult, FeeCategory,
    FeeComponent, FeeParameters, FeeSource, FeeStructureRecord, MultiplierAdvisory,
};

use crate::errors::{FeeError, FeeResult, FieldIssue};
use crate::rates::{
    apply_bps, multiplier_label, ods_base_rate, ods_cost_multiplier_bps, waste_area_multiplier_bps,
    waste_base_rate, AreaBand, CostBand, DAYS_PER_FEE_YEAR, EXTENSION_DAYS_PER_YEAR,
};
use crate::schedule::{fallback_structure, FeeStructureLookup};

/// Display name of the administration component
pub const ADMINISTRATION_COMPONENT: &str = "Administration Fee";

/// Display name of the technical component
pub const TECHNICAL_COMPONENT: &str = "Technical Assessment Fee";

/// Display name of the ODS surcharge component
pub const ODS_COMPONENT: &str = "ODS Handling Surcharge";

/// Display name of the waste-management component
pub const WASTE_COMPONENT: &str = "Waste Management Fee";

// ============================================================================
// VALIDATION
// ============================================================================

/// Identity fields proven present by [`validate`]
///
/// Borrowing this out of validation lets the rest of the pipeline work with
/// concrete values instead of re-unwrapping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitIdentity<'a> {
    /// Permit category label (non-empty)
    pub permit_type: &'a str,
    /// Kind of permit action
    pub activity_type: ActivityType,
    /// Environmental-impact tier
    pub activity_level: ActivityLevel,
}

/// Check required parameters and ranges
///
/// Collects every offending field into a single `FeeError::Validation` so
/// the caller can surface all problems at once. Required identity fields
/// are never substituted with defaults; only the fee-structure record
/// itself falls back when no row matches.
pub fn validate(params: &FeeParameters) -> FeeResult<PermitIdentity<'_>> {
    let mut issues = Vec::new();

    if params.permit_type.trim().is_empty() {
        issues.push(FieldIssue::missing("permit_type"));
    }
    if params.activity_type.is_none() {
        issues.push(FieldIssue::missing("activity_type"));
    }
    if params.activity_level.is_none() {
        issues.push(FieldIssue::missing("activity_level"));
    }
    if params.duration_years == Some(0) {
        issues.push(FieldIssue::out_of_range(
            "duration_years",
            "must be at least 1",
        ));
    }

    match (issues.is_empty(), params.activity_type, params.activity_level) {
        (true, Some(activity_type), Some(activity_level)) => Ok(PermitIdentity {
            permit_type: params.permit_type.as_str(),
            activity_type,
            activity_level,
        }),
        _ => Err(FeeError::validation(issues)),
    }
}

// ============================================================================
// STRUCTURE RESOLUTION
// ============================================================================

/// Resolve the applicable fee structure for a validated identity
///
/// A confirmed no-match yields the fixed conservative default with
/// `FeeSource::Fallback`; a lookup failure propagates unchanged.
pub fn resolve_fee_structure(
    identity: &PermitIdentity<'_>,
    lookup: &dyn FeeStructureLookup,
) -> FeeResult<(FeeStructureRecord, FeeSource)> {
    let fee_category = identity.activity_level.fee_category();
    match lookup.find_fee_structure(identity.permit_type, identity.activity_type, fee_category)? {
        Some(record) => Ok((record, FeeSource::Database)),
        None => Ok((
            fallback_structure(identity.permit_type, identity.activity_type, fee_category),
            FeeSource::Fallback,
        )),
    }
}

// ============================================================================
// CALCULATION (PURE FUNCTION)
// ============================================================================

/// Compute the fee breakdown from an already-resolved structure
///
/// This is the pure core: callers that awaited an async backend themselves
/// invoke it directly with the resolved record. Absent numeric inputs are
/// treated as zero before multiplication; the only divisor is the fixed
/// 365-day constant.
///
/// # Algorithm
///
/// ```text
/// processing_days = base_processing_days + (duration_years - 1) * 30
/// administration  = annual_recurrent_fee * processing_days / 365
/// technical       = work_plan_amount
/// ods_surcharge   = ods_base_rate * cost_multiplier      (if ODS declared)
/// waste_fee       = waste_base_rate * area_multiplier    (if waste declared)
/// total           = administration + technical + surcharges
/// ```
///
/// Cost/area tier multipliers are emitted as advisory rows and never
/// compound into the total.
pub fn calculate_with_structure(
    params: &FeeParameters,
    structure: &FeeStructureRecord,
    source: FeeSource,
) -> FeeCalculationResult {
    let duration_years = params.duration_years.unwrap_or(1).max(1);
    let extension_days = (duration_years - 1).saturating_mul(EXTENSION_DAYS_PER_YEAR);
    let processing_days = structure.base_processing_days.saturating_add(extension_days);

    let project_cost = params.project_cost.unwrap_or(0);
    let land_area = params.land_area_hectares.unwrap_or(0);

    let mut components = Vec::with_capacity(4);

    // Administration: annual recurrent rate prorated over the processing window
    let administration_fee = prorated_annual_fee(structure.annual_recurrent_fee, processing_days);
    components.push(FeeComponent {
        component_name: ADMINISTRATION_COMPONENT.to_string(),
        fee_category: FeeCategory::Administration,
        base_amount: structure.annual_recurrent_fee,
        calculated_amount: administration_fee,
        formula_used: "(Annual Recurrent Fee ÷ 365) × Processing Days".to_string(),
        is_mandatory: true,
        notes: if extension_days > 0 {
            format!(
                "Processing time extended by {} days for a {}-year permit term",
                extension_days, duration_years
            )
        } else {
            String::new()
        },
    });

    // Technical: the work plan is a flat quoted amount, not derived
    let technical_fee = structure.work_plan_amount;
    components.push(FeeComponent {
        component_name: TECHNICAL_COMPONENT.to_string(),
        fee_category: FeeCategory::Technical,
        base_amount: structure.work_plan_amount,
        calculated_amount: technical_fee,
        formula_used: "Work Plan Amount".to_string(),
        is_mandatory: true,
        notes: String::new(),
    });

    if let Some(chemical) = params.ods_chemical {
        let base = ods_base_rate(chemical);
        let multiplier = ods_cost_multiplier_bps(project_cost);
        components.push(FeeComponent {
            component_name: ODS_COMPONENT.to_string(),
            fee_category: FeeCategory::Special,
            base_amount: base,
            calculated_amount: apply_bps(base, multiplier),
            formula_used: "Base Rate × Cost Multiplier".to_string(),
            is_mandatory: true,
            notes: format!(
                "{} base rate {} × {}",
                chemical,
                display_kina(base),
                multiplier_label(multiplier)
            ),
        });
    }

    if let Some(stream) = params.waste_stream {
        let base = waste_base_rate(stream);
        let multiplier = waste_area_multiplier_bps(land_area);
        components.push(FeeComponent {
            component_name: WASTE_COMPONENT.to_string(),
            fee_category: FeeCategory::Special,
            base_amount: base,
            calculated_amount: apply_bps(base, multiplier),
            formula_used: "Base Rate × Area Multiplier".to_string(),
            is_mandatory: true,
            notes: format!(
                "{} waste base rate {} × {} at {} ha",
                stream,
                display_kina(base),
                multiplier_label(multiplier),
                land_area
            ),
        });
    }

    let total_fee = components
        .iter()
        .fold(0u64, |acc: Amount, c| acc.saturating_add(c.calculated_amount));

    FeeCalculationResult {
        components,
        advisories: build_advisories(params),
        administration_fee,
        technical_fee,
        total_fee,
        processing_days,
        administration_form: structure.administration_form.clone(),
        technical_form: structure.technical_form.clone(),
        source,
    }
}

/// Calculate the full fee breakdown for a set of permit parameters
///
/// Validates, resolves the fee structure through the injected lookup, then
/// runs the pure calculation. Each call is independent and idempotent:
/// identical inputs against an unchanged lookup yield identical results.
pub fn calculate_fees(
    params: &FeeParameters,
    lookup: &dyn FeeStructureLookup,
) -> FeeResult<FeeCalculationResult> {
    let identity = validate(params)?;
    let (structure, source) = resolve_fee_structure(&identity, lookup)?;
    Ok(calculate_with_structure(params, &structure, source))
}

/// Annual recurrent fee prorated over the processing window, in toea
fn prorated_annual_fee(annual_recurrent_fee: Amount, processing_days: u32) -> Amount {
    let widened = (annual_recurrent_fee as u128).saturating_mul(processing_days as u128)
        / DAYS_PER_FEE_YEAR as u128;
    widened.min(Amount::MAX as u128) as Amount
}

/// Build the advisory multiplier rows for the reviewer breakdown panel
///
/// Standard-tier inputs produce no row; a row carries the suggested uplift
/// but is never folded into any fee amount.
fn build_advisories(params: &FeeParameters) -> Vec<MultiplierAdvisory> {
    let mut advisories = Vec::new();

    if let Some(cost) = params.project_cost {
        let band = CostBand::classify(cost);
        if band.uplift_bps() > 0 {
            advisories.push(MultiplierAdvisory {
                label: "Project Cost Loading".to_string(),
                uplift_bps: band.uplift_bps(),
                notes: format!(
                    "Project cost {} falls in the {} tier (+{}%)",
                    display_kina(cost),
                    band,
                    band.uplift_bps() / 100
                ),
            });
        }
    }

    if let Some(area) = params.land_area_hectares {
        let band = AreaBand::classify(area);
        if band.uplift_bps() > 0 {
            advisories.push(MultiplierAdvisory {
                label: "Land Area Loading".to_string(),
                uplift_bps: band.uplift_bps(),
                notes: format!(
                    "Land area {} ha falls in the {} tier (+{}%)",
                    area,
                    band,
                    band.uplift_bps() / 100
                ),
            });
        }
    }

    advisories
}

// ============================================================================
// TESTS
// ============================================================================
