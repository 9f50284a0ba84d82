use serde::{Deserialize, Serialize};

/// Occupancy/ownership record: one firm's claim on one or more units.
///
/// Source columns: `SIRA_NO, ETAP, BLOK, NO, FIRMA, KIRACI/MALIK, IS_KOLU`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmRecord {
    /// Row ordinal from the export.
    pub row_no: u32,
    /// Phase identifier as exported ("1".."5").
    pub phase: String,
    /// Block letter, upper-cased on ingestion.
    pub block: String,
    /// Dash-separated list of unit labels this record covers, e.g. "3-4-6".
    pub unit_list: String,
    /// Firm name.
    pub name: String,
    /// Occupant marker as exported ("KİRACI" or "MALİK"), kept as free text.
    pub occupancy: String,
    /// Business line.
    pub business_line: String,
}

impl FirmRecord {
    /// Exact membership test against the dash-split unit list.
    ///
    /// "3-4-6" covers "4" and does not cover "5" — there is no range
    /// expansion between listed labels.
    #[must_use]
    pub fn covers_unit(&self, unit_number: &str) -> bool {
        let wanted = unit_number.trim();
        self.unit_list.split('-').any(|label| label.trim() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firm(unit_list: &str) -> FirmRecord {
        FirmRecord {
            row_no: 1,
            phase: "1".to_string(),
            block: "A".to_string(),
            unit_list: unit_list.to_string(),
            name: "Örnek Makina San. Tic. Ltd. Şti.".to_string(),
            occupancy: "MALİK".to_string(),
            business_line: "Makina imalatı".to_string(),
        }
    }

    #[test]
    fn covers_listed_units_only() {
        let record = firm("3-4-6");
        assert!(record.covers_unit("3"));
        assert!(record.covers_unit("4"));
        assert!(record.covers_unit("6"));
        // no range expansion between listed labels
        assert!(!record.covers_unit("5"));
    }

    #[test]
    fn covers_single_unit() {
        assert!(firm("12").covers_unit("12"));
        assert!(!firm("12").covers_unit("1"));
    }
}
