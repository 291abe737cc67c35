//! Canonical Primitive Types for Permit Fee Accounting
//!
//! Rule: No floating point in fee math. Ever.
//!
//! All monetary values are integer toea (1 kina = 100 toea) so that fee
//! computation is deterministic across platforms. Percentage multipliers
//! are expressed in basis points. These types are the foundational building
//! blocks for all fee-bearing data structures. They are designed to be:
//! - Fixed-size (no dynamic allocation)
//! - Deterministically serializable
//! - Efficient to copy and compare

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Monetary amounts in toea (1 kina = 100 toea)
pub type Amount = u64;

/// Basis points for percentage calculations (10000 = 100%)
pub type Bps = u32;

/// One whole multiplier unit (1.0x) in basis points
pub const BPS_ONE: Bps = 10_000;

/// Toea per kina
pub const TOEA_PER_KINA: u64 = 100;

/// Convert a whole-kina figure into an [`Amount`] in toea
pub const fn kina(whole: u64) -> Amount {
    whole * TOEA_PER_KINA
}

/// Format an [`Amount`] as a human-readable kina figure, e.g. "K3000.00"
pub fn display_kina(amount: Amount) -> String {
    format!("K{}.{:02}", amount / TOEA_PER_KINA, amount % TOEA_PER_KINA)
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Identifier referencing an entry in the externally-maintained
/// prescribed-activity taxonomy
///
/// The fee engine never dereferences this; it is carried through for the
/// caller's records.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub struct PrescribedActivityId(pub u32);

impl PrescribedActivityId {
    /// Create a new PrescribedActivityId
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying numeric identifier
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PrescribedActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrescribedActivityId({})", self.0)
    }
}

impl fmt::Display for PrescribedActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PA-{:05}", self.0)
    }
}

impl From<u32> for PrescribedActivityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kina_conversion() {
        assert_eq!(kina(0), 0);
        assert_eq!(kina(1), 100);
        assert_eq!(kina(36_500), 3_650_000);
    }

    #[test]
    fn test_display_kina() {
        assert_eq!(display_kina(kina(3_000)), "K3000.00");
        assert_eq!(display_kina(150), "K1.50");
        assert_eq!(display_kina(7), "K0.07");
    }

    #[test]
    fn test_prescribed_activity_id_basics() {
        let id = PrescribedActivityId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{}", id), "PA-00042");
        assert_eq!(format!("{:?}", id), "PrescribedActivityId(42)");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let id = PrescribedActivityId::new(7);
        let serialized = bincode::serialize(&id).unwrap();
        let deserialized: PrescribedActivityId = bincode::deserialize(&serialized).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_from_u32() {
        let id: PrescribedActivityId = 9u32.into();
        assert_eq!(id.0, 9);
    }
}
