//! Golden Vector Tests for the Permit Fee Pipeline
//!
//! These tests define EXACT expected fee values for specific inputs.
//! If any of these tests fail, it indicates a schedule-breaking change:
//! invoices already issued would no longer reproduce.
//!
//! # Updating Golden Vectors
//!
//! If you need to change fee logic:
//! 1. Update the rate tables or pipeline code
//! 2. Update these golden vectors with new expected values
//! 3. Document the change in the commit message

#[cfg(test)]
mod tests {
    use crate::model::calculate_fees;
    use crate::schedule::StaticFeeSchedule;
    use lib_types::{
        kina, ActivityLevel, ActivityType, FeeParameters, FeeSource, FeeStructureRecord,
        OdsChemical, WasteStream, BPS_ONE,
    };

    fn environment_permit_schedule() -> StaticFeeSchedule {
        StaticFeeSchedule::new(vec![FeeStructureRecord {
            permit_type: "Environment Permit".to_string(),
            fee_category: "Level 2".to_string(),
            activity_type: ActivityType::New,
            annual_recurrent_fee: kina(36_500),
            work_plan_amount: kina(5_000),
            category_multiplier: BPS_ONE,
            base_processing_days: 30,
            administration_form: "EP-ADM-02".to_string(),
            technical_form: "EP-TEC-02".to_string(),
            is_active: true,
        }])
    }

    fn base_params() -> FeeParameters {
        FeeParameters {
            permit_type: "Environment Permit".to_string(),
            activity_type: Some(ActivityType::New),
            activity_level: Some(ActivityLevel::Level2),
            prescribed_activity_id: None,
            project_cost: None,
            land_area_hectares: None,
            duration_years: None,
            ods_chemical: None,
            waste_stream: None,
        }
    }

    // =========================================================================
    // GOLDEN VECTOR: Administration fee proration
    // =========================================================================

    /// Golden vector: annual recurrent fee K36,500 over 30 processing days
    ///
    /// - administration: 36,500 / 365 × 30 = K3,000
    /// - technical: flat work plan = K5,000
    /// - total: K8,000
    #[test]
    fn golden_administration_fee_proration() {
        let result = calculate_fees(&base_params(), &environment_permit_schedule()).unwrap();

        assert_eq!(result.source, FeeSource::Database);
        assert_eq!(result.processing_days, 30);
        assert_eq!(result.administration_fee, kina(3_000));
        assert_eq!(result.technical_fee, kina(5_000));
        assert_eq!(result.total_fee, kina(8_000));
    }

    // =========================================================================
    // GOLDEN VECTOR: Duration scaling
    // =========================================================================

    /// Golden vector: 3-year permit on a 30-day base
    ///
    /// - processing_days: 30 + (3 - 1) × 30 = 90
    /// - administration: 36,500 / 365 × 90 = K9,000
    #[test]
    fn golden_duration_scaling() {
        let params = FeeParameters {
            duration_years: Some(3),
            ..base_params()
        };
        let result = calculate_fees(&params, &environment_permit_schedule()).unwrap();

        assert_eq!(result.processing_days, 90);
        assert_eq!(result.administration_fee, kina(9_000));
        assert_eq!(result.total_fee, kina(14_000));
    }

    // =========================================================================
    // GOLDEN VECTOR: Fallback structure
    // =========================================================================

    /// Golden vector: no matching row
    ///
    /// - fallback annual recurrent fee: K3,650 over 30 days = K300
    /// - fallback work plan: K5,000
    #[test]
    fn golden_fallback_structure() {
        let result = calculate_fees(&base_params(), &StaticFeeSchedule::default()).unwrap();

        assert_eq!(result.source, FeeSource::Fallback);
        assert_eq!(result.processing_days, 30);
        assert_eq!(result.administration_fee, kina(300));
        assert_eq!(result.technical_fee, kina(5_000));
        assert_eq!(result.total_fee, kina(5_300));
        assert_eq!(result.administration_form, "FRM-ADM-01");
        assert_eq!(result.technical_form, "FRM-TEC-01");
    }

    // =========================================================================
    // GOLDEN VECTOR: ODS surcharge boundary
    // =========================================================================

    /// Golden vector: Halons above the K100,000 cost threshold
    ///
    /// - surcharge: 800 × 1.5 = K1,200
    #[test]
    fn golden_ods_halons_loaded() {
        let params = FeeParameters {
            ods_chemical: Some(OdsChemical::Halons),
            project_cost: Some(kina(150_000)),
            ..base_params()
        };
        let result = calculate_fees(&params, &environment_permit_schedule()).unwrap();

        let ods = &result.components[2];
        assert_eq!(ods.base_amount, kina(800));
        assert_eq!(ods.calculated_amount, kina(1_200));
        assert_eq!(result.total_fee, kina(9_200));
    }

    /// Golden vector: Halons below the cost threshold
    ///
    /// - surcharge: 800 × 1.0 = K800
    #[test]
    fn golden_ods_halons_unloaded() {
        let params = FeeParameters {
            ods_chemical: Some(OdsChemical::Halons),
            project_cost: Some(kina(50_000)),
            ..base_params()
        };
        let result = calculate_fees(&params, &environment_permit_schedule()).unwrap();

        assert_eq!(result.components[2].calculated_amount, kina(800));
        assert_eq!(result.total_fee, kina(8_800));
    }

    // =========================================================================
    // GOLDEN VECTOR: Waste surcharge boundaries
    // =========================================================================

    /// Golden vector: medical waste across the three area tiers
    ///
    /// - 6,000 ha: 1,200 × 1.3 = K1,560
    /// - 1,500 ha: 1,200 × 1.1 = K1,320
    /// - 500 ha:   1,200 × 1.0 = K1,200
    #[test]
    fn golden_waste_medical_area_tiers() {
        let schedule = environment_permit_schedule();

        for (area, expected) in [
            (6_000u64, kina(1_560)),
            (1_500, kina(1_320)),
            (500, kina(1_200)),
        ] {
            let params = FeeParameters {
                waste_stream: Some(WasteStream::Medical),
                land_area_hectares: Some(area),
                ..base_params()
            };
            let result = calculate_fees(&params, &schedule).unwrap();
            assert_eq!(
                result.components[2].calculated_amount, expected,
                "medical waste fee at {} ha",
                area
            );
        }
    }

    // =========================================================================
    // GOLDEN VECTOR: Full breakdown
    // =========================================================================

    /// Golden vector: every surcharge and advisory at once
    ///
    /// - processing_days: 30 + (5 - 1) × 30 = 150
    /// - administration: 36,500 / 365 × 150 = K15,000
    /// - technical: K5,000
    /// - ODS (CFC, cost above threshold): 500 × 1.5 = K750
    /// - waste (hazardous, 7,000 ha): 1,000 × 1.3 = K1,300
    /// - total: K22,050
    /// - advisories: cost Major (+50%), area Broad (+15%) - not charged
    #[test]
    fn golden_full_breakdown() {
        let params = FeeParameters {
            project_cost: Some(kina(6_000_000)),
            land_area_hectares: Some(7_000),
            duration_years: Some(5),
            ods_chemical: Some(OdsChemical::Cfc),
            waste_stream: Some(WasteStream::Hazardous),
            ..base_params()
        };
        let result = calculate_fees(&params, &environment_permit_schedule()).unwrap();

        assert_eq!(result.processing_days, 150);
        assert_eq!(result.administration_fee, kina(15_000));
        assert_eq!(result.technical_fee, kina(5_000));
        assert_eq!(result.components[2].calculated_amount, kina(750));
        assert_eq!(result.components[3].calculated_amount, kina(1_300));

        // GOLDEN VECTOR: This exact value MUST NOT change
        assert_eq!(result.total_fee, kina(22_050));

        assert_eq!(result.advisories.len(), 2);
        assert_eq!(result.advisories[0].uplift_bps, 5_000);
        assert_eq!(result.advisories[1].uplift_bps, 1_500);
    }
}
