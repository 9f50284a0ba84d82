pub mod areas;
pub mod firms;
pub mod line;
pub mod units;

pub use crate::error::ParseError;
pub use areas::{parse_area_overrides, AreaOverride};
pub use firms::parse_firms;
pub use line::split_line;
pub use units::parse_units;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::model::{BlockGroup, Inventory, Phase, PhaseInventory, Unit};

/// Development name used in headers and exports.
const DEVELOPMENT_NAME: &str = "Model Sanayi Merkezi";

/// Source file names expected under the data directory: one inventory
/// export per phase, the firm list, and the area/price override sheet.
const UNIT_SOURCES: [(Phase, &str); 5] = [
    (Phase::One, "etap1.csv"),
    (Phase::Two, "etap2.csv"),
    (Phase::Three, "etap3.csv"),
    (Phase::Four, "etap4.csv"),
    (Phase::Five, "etap5.csv"),
];
const FIRM_SOURCE: &str = "firma_listesi.csv";
const AREA_SOURCE: &str = "alan_fiyat.csv";

/// Load and normalize the full unit inventory from `data_dir`.
///
/// Reads the five per-phase inventory exports, the firm list and the
/// override sheet; enriches units from the overrides; and groups units per
/// block. A missing or unreadable source degrades to an empty dataset with
/// a logged diagnostic — the loader itself never fails, so the worst case
/// is an empty or partially enriched inventory.
#[must_use]
pub fn load_inventory(data_dir: &Path) -> Inventory {
    let overrides = parse_area_overrides(&read_or_empty(data_dir, AREA_SOURCE));

    let mut inventory = Inventory::new(DEVELOPMENT_NAME.to_string());
    inventory.firms = parse_firms(&read_or_empty(data_dir, FIRM_SOURCE));

    for (phase, file) in UNIT_SOURCES {
        let mut units = parse_units(&read_or_empty(data_dir, file), phase);
        apply_overrides(&mut units, &overrides);
        inventory.phases.push(PhaseInventory {
            phase,
            blocks: group_by_block(units),
        });
    }

    inventory
}

/// Left-outer merge of the override sheet into parsed units: a matching
/// unit gains the authoritative floor-area breakdown and prices, the rest
/// keep their inventory figures untouched.
pub fn apply_overrides(units: &mut [Unit], overrides: &HashMap<String, AreaOverride>) {
    for unit in units {
        if let Some(found) = overrides.get(&unit.override_key()) {
            unit.ground_floor_area = Some(found.ground_floor_area);
            unit.normal_floor_area = Some(found.normal_floor_area);
            unit.price_tl = Some(found.price_tl);
            unit.price_usd = Some(found.price_usd);
        }
    }
}

/// Group a phase's units into blocks: blocks in alphabetical order, units
/// in label order within each block.
fn group_by_block(units: Vec<Unit>) -> Vec<BlockGroup> {
    let mut by_block: BTreeMap<String, Vec<Unit>> = BTreeMap::new();
    for unit in units {
        by_block.entry(unit.block.clone()).or_default().push(unit);
    }

    by_block
        .into_iter()
        .map(|(name, mut units)| {
            units.sort_by_key(Unit::order_key);
            BlockGroup { name, units }
        })
        .collect()
}

fn read_source(data_dir: &Path, file: &str) -> Result<String, ParseError> {
    let path = data_dir.join(file);
    fs::read_to_string(&path).map_err(|source| ParseError::FileRead { path, source })
}

fn read_or_empty(data_dir: &Path, file: &str) -> String {
    read_source(data_dir, file).unwrap_or_else(|err| {
        warn!("{err}; continuing with an empty dataset");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UnitStatus;
    use pretty_assertions::assert_eq;

    fn unit(block: &str, number: &str) -> Unit {
        Unit {
            section: String::new(),
            block: block.to_string(),
            unit_number: number.to_string(),
            gross_area: 100.0,
            net_area: 90.0,
            status: UnitStatus::Available,
            ground_floor_area: None,
            normal_floor_area: None,
            price_tl: None,
            price_usd: None,
        }
    }

    #[test]
    fn apply_overrides_is_left_outer() {
        let mut units = vec![unit("A", "1"), unit("A", "2")];
        let mut overrides = HashMap::new();
        overrides.insert(
            "A-1".to_string(),
            AreaOverride {
                ground_floor_area: 60.0,
                normal_floor_area: 40.0,
                price_tl: 3_500_000.0,
                price_usd: 100_000.0,
            },
        );

        apply_overrides(&mut units, &overrides);

        assert_eq!(units[0].ground_floor_area, Some(60.0));
        assert_eq!(units[0].price_usd, Some(100_000.0));
        // the unmatched unit keeps its inventory figures untouched
        assert_eq!(units[1].ground_floor_area, None);
        assert_eq!(units[1].net_area, 90.0);
    }

    #[test]
    fn group_by_block_sorts_blocks_and_units() {
        let grouped = group_by_block(vec![unit("B", "2"), unit("A", "10"), unit("A", "9")]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "A");
        // numeric order, not lexicographic: 9 before 10
        assert_eq!(grouped[0].units[0].unit_number, "9");
        assert_eq!(grouped[0].units[1].unit_number, "10");
        assert_eq!(grouped[1].name, "B");
    }

    #[test]
    fn load_inventory_degrades_to_empty_on_missing_dir() {
        let inventory = load_inventory(Path::new("/nonexistent/msm-data"));
        assert_eq!(inventory.total_units(), 0);
        assert_eq!(inventory.firms.len(), 0);
        // all five phases are still present, just empty
        assert_eq!(inventory.phases.len(), 5);
    }
}
