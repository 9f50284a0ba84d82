use serde::Serialize;

use super::{FirmRecord, Phase, Unit, UnitStatus};

/// The full normalized inventory: per-phase unit datasets plus the firm
/// list. Built fresh on every load; nothing here is persisted.
#[derive(Debug, Serialize)]
pub struct Inventory {
    /// Development name shown in headers and exports.
    pub name: String,
    pub phases: Vec<PhaseInventory>,
    pub firms: Vec<FirmRecord>,
}

/// One phase's units, grouped per block.
#[derive(Debug, Serialize)]
pub struct PhaseInventory {
    pub phase: Phase,
    pub blocks: Vec<BlockGroup>,
}

/// Units of one block within one phase.
#[derive(Debug, Serialize)]
pub struct BlockGroup {
    pub name: String,
    pub units: Vec<Unit>,
}

/// Derived per-block occupancy figures. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BlockSummary {
    pub total: usize,
    pub sold: usize,
    pub available: usize,
    pub reserved: usize,
    /// Sum of inventory net areas, m².
    pub total_area: f64,
    pub avg_area: f64,
    /// Sold share in whole percent; 0 for an empty block.
    pub occupancy_rate: u32,
}

impl BlockSummary {
    /// Summarize a unit collection already filtered to one block.
    #[must_use]
    pub fn from_units(units: &[Unit]) -> Self {
        let mut summary = Self::default();
        for unit in units {
            summary.total += 1;
            match unit.status {
                UnitStatus::Sold => summary.sold += 1,
                UnitStatus::Available => summary.available += 1,
                UnitStatus::Reserved => summary.reserved += 1,
            }
            summary.total_area += unit.net_area;
        }
        if summary.total > 0 {
            summary.avg_area = summary.total_area / summary.total as f64;
            summary.occupancy_rate =
                ((summary.sold as f64 / summary.total as f64) * 100.0).round() as u32;
        }
        summary
    }
}

impl BlockGroup {
    #[must_use]
    pub fn summary(&self) -> BlockSummary {
        BlockSummary::from_units(&self.units)
    }
}

impl PhaseInventory {
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.blocks.iter().map(|b| b.units.len()).sum()
    }
}

impl Inventory {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            phases: Vec::new(),
            firms: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_units(&self) -> usize {
        self.phases.iter().map(PhaseInventory::total_units).sum()
    }

    #[must_use]
    pub fn total_blocks(&self) -> usize {
        self.phases.iter().map(|p| p.blocks.len()).sum()
    }

    /// First firm record claiming `unit_number` in `block`, optionally
    /// restricted to one phase.
    ///
    /// Block comparison trims and ignores case; unit membership is exact
    /// within the record's dash-split list. Overlapping claims resolve to
    /// the first matching row in source order.
    #[must_use]
    pub fn firm_for_unit(
        &self,
        block: &str,
        unit_number: &str,
        phase: Option<Phase>,
    ) -> Option<&FirmRecord> {
        let wanted_block = block.trim().to_uppercase();
        self.firms.iter().find(|firm| {
            if firm.block.trim().to_uppercase() != wanted_block {
                return false;
            }
            if let Some(p) = phase {
                if firm.phase.trim() != p.as_str() {
                    return false;
                }
            }
            firm.covers_unit(unit_number)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit(number: &str, status: UnitStatus, net: f64) -> Unit {
        Unit {
            section: "1. Kısım".to_string(),
            block: "A".to_string(),
            unit_number: number.to_string(),
            gross_area: net + 20.0,
            net_area: net,
            status,
            ground_floor_area: None,
            normal_floor_area: None,
            price_tl: None,
            price_usd: None,
        }
    }

    fn firm(row_no: u32, phase: &str, block: &str, unit_list: &str, name: &str) -> FirmRecord {
        FirmRecord {
            row_no,
            phase: phase.to_string(),
            block: block.to_string(),
            unit_list: unit_list.to_string(),
            name: name.to_string(),
            occupancy: "KİRACI".to_string(),
            business_line: "Metal işleme".to_string(),
        }
    }

    #[test]
    fn block_summary_counts_and_rate() {
        let mut units = Vec::new();
        for i in 0..3 {
            units.push(unit(&format!("{}", i + 1), UnitStatus::Sold, 100.0));
        }
        for i in 0..2 {
            units.push(unit(&format!("{}", i + 4), UnitStatus::Reserved, 100.0));
        }
        for i in 0..5 {
            units.push(unit(&format!("{}", i + 6), UnitStatus::Available, 100.0));
        }

        let summary = BlockSummary::from_units(&units);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.sold, 3);
        assert_eq!(summary.available, 5);
        assert_eq!(summary.reserved, 2);
        assert_eq!(summary.occupancy_rate, 30);
        assert_eq!(summary.total_area, 1000.0);
        assert_eq!(summary.avg_area, 100.0);
    }

    #[test]
    fn block_summary_of_empty_block_is_zero() {
        let summary = BlockSummary::from_units(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.occupancy_rate, 0);
        assert_eq!(summary.avg_area, 0.0);
    }

    #[test]
    fn firm_lookup_requires_exact_membership() {
        let mut inventory = Inventory::new("Test".to_string());
        inventory.firms.push(firm(1, "1", "A", "3-4-6", "Birinci"));

        assert_eq!(
            inventory.firm_for_unit("A", "4", None).map(|f| f.row_no),
            Some(1)
        );
        assert!(inventory.firm_for_unit("A", "5", None).is_none());
    }

    #[test]
    fn firm_lookup_normalizes_block_and_scopes_phase() {
        let mut inventory = Inventory::new("Test".to_string());
        inventory.firms.push(firm(1, "1", "B", "7", "Etap1 Firması"));
        inventory.firms.push(firm(2, "2", "B", "7", "Etap2 Firması"));

        // trim + case-insensitive block match
        let hit = inventory.firm_for_unit(" b ", "7", None);
        assert_eq!(hit.map(|f| f.row_no), Some(1));

        // phase filter picks the phase-2 claim on the same (block, unit)
        let hit = inventory.firm_for_unit("B", "7", Some(Phase::Two));
        assert_eq!(hit.map(|f| f.row_no), Some(2));
    }

    #[test]
    fn overlapping_claims_resolve_to_first_row() {
        let mut inventory = Inventory::new("Test".to_string());
        inventory.firms.push(firm(1, "1", "A", "5", "Önce Gelen"));
        inventory.firms.push(firm(2, "1", "A", "5", "Sonra Gelen"));

        let hit = inventory.firm_for_unit("A", "5", Some(Phase::One));
        assert_eq!(hit.map(|f| f.name.as_str()), Some("Önce Gelen"));
    }
}
