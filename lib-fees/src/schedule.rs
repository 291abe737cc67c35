//! Fee Schedule Lookup
//!
//! The engine never owns the fee_structures table; it consumes a lookup
//! capability injected by the caller. `Ok(None)` means a confirmed no-match
//! (the fixed fallback structure applies); `Err` means the backend failed
//! and is propagated unchanged.

use lib_types::{ActivityType, FeeStructureRecord, BPS_ONE};

use crate::errors::LookupError;
use crate::rates::{
    FALLBACK_ADMINISTRATION_FORM, FALLBACK_ANNUAL_RECURRENT_FEE, FALLBACK_PROCESSING_DAYS,
    FALLBACK_TECHNICAL_FORM, FALLBACK_WORK_PLAN_AMOUNT,
};

/// Capability for resolving fee_structures rows
///
/// Backed by the hosted relational table in production; by
/// [`StaticFeeSchedule`] in tests and offline tooling. Async backends are
/// awaited by the caller, which then hands the resolved record to
/// `calculate_with_structure`.
pub trait FeeStructureLookup {
    /// Find the active row keyed by (permit_type, activity_type, fee_category)
    fn find_fee_structure(
        &self,
        permit_type: &str,
        activity_type: ActivityType,
        fee_category: &str,
    ) -> Result<Option<FeeStructureRecord>, LookupError>;
}

impl<T: FeeStructureLookup + ?Sized> FeeStructureLookup for &T {
    fn find_fee_structure(
        &self,
        permit_type: &str,
        activity_type: ActivityType,
        fee_category: &str,
    ) -> Result<Option<FeeStructureRecord>, LookupError> {
        (**self).find_fee_structure(permit_type, activity_type, fee_category)
    }
}

/// In-memory fee schedule
///
/// Matches `permit_type` and `fee_category` case-insensitively and skips
/// inactive rows, mirroring how the reference table is queried.
#[derive(Debug, Clone, Default)]
pub struct StaticFeeSchedule {
    rows: Vec<FeeStructureRecord>,
}

impl StaticFeeSchedule {
    /// Create a schedule from explicit rows
    pub fn new(rows: Vec<FeeStructureRecord>) -> Self {
        Self { rows }
    }

    /// Load a schedule from a JSON array of fee structure rows
    pub fn from_json_str(json: &str) -> Result<Self, LookupError> {
        let rows: Vec<FeeStructureRecord> = serde_json::from_str(json)
            .map_err(|e| LookupError::backend(format!("invalid fee schedule JSON: {e}")))?;
        tracing::debug!(rows = rows.len(), "loaded static fee schedule");
        Ok(Self::new(rows))
    }

    /// Number of rows, active or not
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the schedule holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FeeStructureLookup for StaticFeeSchedule {
    fn find_fee_structure(
        &self,
        permit_type: &str,
        activity_type: ActivityType,
        fee_category: &str,
    ) -> Result<Option<FeeStructureRecord>, LookupError> {
        Ok(self
            .rows
            .iter()
            .find(|row| {
                row.is_active
                    && row.activity_type == activity_type
                    && row.permit_type.eq_ignore_ascii_case(permit_type)
                    && row.fee_category.eq_ignore_ascii_case(fee_category)
            })
            .cloned())
    }
}

/// The fixed conservative default used when no row matches
///
/// Key fields are copied from the request so the caller can still see what
/// was asked for; rate fields come from the fallback constants.
pub fn fallback_structure(
    permit_type: &str,
    activity_type: ActivityType,
    fee_category: &str,
) -> FeeStructureRecord {
    FeeStructureRecord {
        permit_type: permit_type.to_string(),
        fee_category: fee_category.to_string(),
        activity_type,
        annual_recurrent_fee: FALLBACK_ANNUAL_RECURRENT_FEE,
        work_plan_amount: FALLBACK_WORK_PLAN_AMOUNT,
        category_multiplier: BPS_ONE,
        base_processing_days: FALLBACK_PROCESSING_DAYS,
        administration_form: FALLBACK_ADMINISTRATION_FORM.to_string(),
        technical_form: FALLBACK_TECHNICAL_FORM.to_string(),
        is_active: true,
    }
}
