use serde::{Deserialize, Serialize};

/// Sale status of a unit, derived from the export's free-text status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Available,
    Sold,
    Reserved,
}

impl UnitStatus {
    /// Classify the free-text status of an inventory row.
    ///
    /// Matching is case-insensitive and by substring; "satıldı" wins over
    /// any co-occurring keyword, "satışa kapalı" marks a reserved unit, and
    /// everything else (including "satılık") is treated as available.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let text = raw.to_lowercase();
        if text.contains("satıldı") {
            return Self::Sold;
        }
        if text.contains("satışa kapalı") {
            return Self::Reserved;
        }
        Self::Available
    }

    /// Status identifier as used in serialized output and the query API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Reserved => "reserved",
        }
    }
}

/// One sellable space in the development.
///
/// `(block, unit_number)` is unique within one phase's dataset only; the
/// same pair can recur in another phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Named sub-area label, free text from the source.
    pub section: String,
    pub block: String,
    /// Unit label within the block; may carry non-numeric suffixes.
    pub unit_number: String,
    pub gross_area: f64,
    pub net_area: f64,
    pub status: UnitStatus,
    /// Authoritative ground-floor area from the override sheet, when matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_floor_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_floor_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_tl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<f64>,
}

impl Unit {
    /// Composite join key against the override dataset.
    #[must_use]
    pub fn override_key(&self) -> String {
        format!("{}-{}", self.block, self.unit_number)
    }

    /// Total floor area for display. The override breakdown takes
    /// precedence over the inventory net area whenever it is present.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        match (self.ground_floor_area, self.normal_floor_area) {
            (None, None) => self.net_area,
            (ground, normal) => ground.unwrap_or(0.0) + normal.unwrap_or(0.0),
        }
    }

    /// Numeric ordering key recovered from the unit label by stripping any
    /// non-digit characters ("12-A" orders as 12). Labels without digits
    /// order first.
    #[must_use]
    pub fn order_key(&self) -> u32 {
        let digits: String = self
            .unit_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit(net: f64, ground: Option<f64>, normal: Option<f64>) -> Unit {
        Unit {
            section: String::new(),
            block: "A".to_string(),
            unit_number: "1".to_string(),
            gross_area: 0.0,
            net_area: net,
            status: UnitStatus::Available,
            ground_floor_area: ground,
            normal_floor_area: normal,
            price_tl: None,
            price_usd: None,
        }
    }

    #[test]
    fn classify_matches_sold_first() {
        assert_eq!(UnitStatus::classify("Satıldı"), UnitStatus::Sold);
        // "satıldı" wins even when another keyword appears earlier
        assert_eq!(
            UnitStatus::classify("Satılık iken satıldı"),
            UnitStatus::Sold
        );
    }

    #[test]
    fn classify_recognizes_reserved_and_available() {
        assert_eq!(
            UnitStatus::classify("Satışa Kapalı"),
            UnitStatus::Reserved
        );
        assert_eq!(UnitStatus::classify("Satılık"), UnitStatus::Available);
    }

    #[test]
    fn classify_defaults_to_available() {
        assert_eq!(UnitStatus::classify(""), UnitStatus::Available);
        assert_eq!(UnitStatus::classify("görüşülüyor"), UnitStatus::Available);
    }

    #[test]
    fn total_area_prefers_override_breakdown() {
        assert_eq!(unit(120.0, Some(80.0), Some(55.5)).total_area(), 135.5);
        // A partial override still wins over the net area
        assert_eq!(unit(120.0, Some(80.0), None).total_area(), 80.0);
        assert_eq!(unit(120.0, None, None).total_area(), 120.0);
    }

    #[test]
    fn order_key_strips_non_digits() {
        let mut u = unit(0.0, None, None);
        u.unit_number = "12-A".to_string();
        assert_eq!(u.order_key(), 12);
        u.unit_number = "Z".to_string();
        assert_eq!(u.order_key(), 0);
    }
}
