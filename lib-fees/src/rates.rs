//! Statutory Rate Tables and Thresholds
//!
//! Every constant the fee pipeline consumes lives here, so a schedule
//! revision is a single-file change. All amounts are integer toea and all
//! multipliers are basis points (10000 = 1.0x).

use lib_types::{kina, Amount, Bps, BPS_ONE};
use lib_types::{OdsChemical, WasteStream};
use std::fmt;

// ============================================================================
// FALLBACK SCHEDULE
// ============================================================================

/// Annual recurrent fee used when no fee_structures row matches
///
/// Conservative default: K3,650/year works out to K10 per processing day.
pub const FALLBACK_ANNUAL_RECURRENT_FEE: Amount = kina(3_650);

/// Work plan amount used when no fee_structures row matches
pub const FALLBACK_WORK_PLAN_AMOUNT: Amount = kina(5_000);

/// Base processing days used when no fee_structures row matches
pub const FALLBACK_PROCESSING_DAYS: u32 = 30;

/// Administration form identifier on the fallback structure
pub const FALLBACK_ADMINISTRATION_FORM: &str = "FRM-ADM-01";

/// Technical form identifier on the fallback structure
pub const FALLBACK_TECHNICAL_FORM: &str = "FRM-TEC-01";

// ============================================================================
// PROCESSING TIME
// ============================================================================

/// Divisor annualizing the recurrent fee into a per-day rate
pub const DAYS_PER_FEE_YEAR: u32 = 365;

/// Extra processing days added per permit year beyond the first
pub const EXTENSION_DAYS_PER_YEAR: u32 = 30;

// ============================================================================
// SPECIAL SURCHARGES
// ============================================================================

/// Project cost above which the ODS surcharge is loaded 1.5x
pub const ODS_COST_THRESHOLD: Amount = kina(100_000);

/// ODS surcharge loading above [`ODS_COST_THRESHOLD`] (1.5x)
pub const ODS_COST_LOADING_BPS: Bps = 15_000;

/// Land area (hectares) above which waste fees are loaded 1.3x
pub const WASTE_AREA_UPPER_THRESHOLD_HA: u64 = 5_000;

/// Land area (hectares) above which waste fees are loaded 1.1x
pub const WASTE_AREA_LOWER_THRESHOLD_HA: u64 = 1_000;

/// Waste fee loading above the upper area threshold (1.3x)
pub const WASTE_AREA_UPPER_LOADING_BPS: Bps = 13_000;

/// Waste fee loading above the lower area threshold (1.1x)
pub const WASTE_AREA_LOWER_LOADING_BPS: Bps = 11_000;

/// Base ODS handling surcharge for a chemical class, in toea
pub const fn ods_base_rate(chemical: OdsChemical) -> Amount {
    match chemical {
        OdsChemical::Cfc => kina(500),
        OdsChemical::Hcfc => kina(300),
        OdsChemical::Hfc => kina(200),
        OdsChemical::Halons => kina(800),
        OdsChemical::Other => kina(250),
    }
}

/// Base waste-management fee for a waste stream, in toea
pub const fn waste_base_rate(stream: WasteStream) -> Amount {
    match stream {
        WasteStream::Hazardous => kina(1_000),
        WasteStream::Industrial => kina(500),
        WasteStream::Chemical => kina(800),
        WasteStream::Medical => kina(1_200),
        WasteStream::Radioactive => kina(2_000),
        WasteStream::Other => kina(300),
    }
}

/// ODS surcharge cost loading for a given project cost (basis points)
pub const fn ods_cost_multiplier_bps(project_cost: Amount) -> Bps {
    if project_cost > ODS_COST_THRESHOLD {
        ODS_COST_LOADING_BPS
    } else {
        BPS_ONE
    }
}

/// Waste fee area loading for a given land area (basis points)
pub const fn waste_area_multiplier_bps(land_area_hectares: u64) -> Bps {
    if land_area_hectares > WASTE_AREA_UPPER_THRESHOLD_HA {
        WASTE_AREA_UPPER_LOADING_BPS
    } else if land_area_hectares > WASTE_AREA_LOWER_THRESHOLD_HA {
        WASTE_AREA_LOWER_LOADING_BPS
    } else {
        BPS_ONE
    }
}

/// Apply a basis-point multiplier to an amount
///
/// Widens to u128 internally, multiply-before-divide, clamps on overflow.
pub const fn apply_bps(amount: Amount, multiplier: Bps) -> Amount {
    let widened = (amount as u128).saturating_mul(multiplier as u128) / BPS_ONE as u128;
    if widened > Amount::MAX as u128 {
        Amount::MAX
    } else {
        widened as Amount
    }
}

// ============================================================================
// ADVISORY TIERS
// ============================================================================

/// Project cost above which the +50% advisory tier applies
pub const COST_BAND_MAJOR_THRESHOLD: Amount = kina(5_000_000);

/// Project cost above which the +20% advisory tier applies
pub const COST_BAND_ELEVATED_THRESHOLD: Amount = kina(1_000_000);

/// Land area (hectares) above which the +30% advisory tier applies
pub const AREA_BAND_EXTENSIVE_THRESHOLD_HA: u64 = 10_000;

/// Land area (hectares) above which the +15% advisory tier applies
pub const AREA_BAND_BROAD_THRESHOLD_HA: u64 = 5_000;

/// Project-cost advisory tier
///
/// Advisory only: surfaced as a breakdown annotation for reviewers, never
/// folded into the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostBand {
    /// No loading suggested
    Standard,
    /// Project cost above K1,000,000: +20% suggested
    Elevated,
    /// Project cost above K5,000,000: +50% suggested
    Major,
}

impl CostBand {
    /// Classify a project cost into its advisory tier
    pub const fn classify(project_cost: Amount) -> Self {
        if project_cost > COST_BAND_MAJOR_THRESHOLD {
            CostBand::Major
        } else if project_cost > COST_BAND_ELEVATED_THRESHOLD {
            CostBand::Elevated
        } else {
            CostBand::Standard
        }
    }

    /// Suggested uplift in basis points (0 = no tier)
    pub const fn uplift_bps(&self) -> Bps {
        match self {
            CostBand::Standard => 0,
            CostBand::Elevated => 2_000,
            CostBand::Major => 5_000,
        }
    }

    /// Get human-readable display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            CostBand::Standard => "Standard",
            CostBand::Elevated => "Elevated",
            CostBand::Major => "Major",
        }
    }
}

impl fmt::Display for CostBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Land-area advisory tier
///
/// Advisory only, same treatment as [`CostBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaBand {
    /// No loading suggested
    Standard,
    /// Land area above 5,000 ha: +15% suggested
    Broad,
    /// Land area above 10,000 ha: +30% suggested
    Extensive,
}

impl AreaBand {
    /// Classify a land area into its advisory tier
    pub const fn classify(land_area_hectares: u64) -> Self {
        if land_area_hectares > AREA_BAND_EXTENSIVE_THRESHOLD_HA {
            AreaBand::Extensive
        } else if land_area_hectares > AREA_BAND_BROAD_THRESHOLD_HA {
            AreaBand::Broad
        } else {
            AreaBand::Standard
        }
    }

    /// Suggested uplift in basis points (0 = no tier)
    pub const fn uplift_bps(&self) -> Bps {
        match self {
            AreaBand::Standard => 0,
            AreaBand::Broad => 1_500,
            AreaBand::Extensive => 3_000,
        }
    }

    /// Get human-readable display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            AreaBand::Standard => "Standard",
            AreaBand::Broad => "Broad",
            AreaBand::Extensive => "Extensive",
        }
    }
}

impl fmt::Display for AreaBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Format a basis-point multiplier as a decimal label, e.g. "1.5"
///
/// All table multipliers are whole tenths, so one decimal place is exact.
pub fn multiplier_label(multiplier: Bps) -> String {
    format!("{}.{}", multiplier / BPS_ONE, (multiplier % BPS_ONE) / 1_000)
}
