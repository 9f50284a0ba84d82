use std::collections::HashMap;

use super::line::split_line;

/// Authoritative per-unit floor-area breakdown and pricing from the
/// spreadsheet export, keyed by `"{block}-{unit}"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaOverride {
    pub ground_floor_area: f64,
    pub normal_floor_area: f64,
    pub price_tl: f64,
    pub price_usd: f64,
}

/// Placeholder pricing applied while the spreadsheet carries no price
/// column: TL per m² of total floor area, and a fixed TL/USD rate.
const TL_PER_SQUARE_METER: f64 = 35_000.0;
const TL_PER_USD: f64 = 35.0;

/// The sheet is a fixed 14-column export; only four columns are consumed.
const MIN_FIELDS: usize = 14;
const BLOCK_COL: usize = 5;
const UNIT_COL: usize = 6;
const GROUND_AREA_COL: usize = 12;
const NORMAL_AREA_COL: usize = 13;

/// Parse the area/price override sheet.
///
/// The header line is skipped and rows with fewer than 14 fields are
/// dropped. Block and unit labels are taken as exported (not upper-cased);
/// area columns use the European comma decimal separator and default to 0
/// when unparsable.
#[must_use]
pub fn parse_area_overrides(content: &str) -> HashMap<String, AreaOverride> {
    let mut overrides = HashMap::new();

    for line in content.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_line(line);
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let block = &fields[BLOCK_COL];
        let unit = &fields[UNIT_COL];
        let ground_floor_area = parse_decimal(&fields[GROUND_AREA_COL]);
        let normal_floor_area = parse_decimal(&fields[NORMAL_AREA_COL]);
        let price_tl = ((ground_floor_area + normal_floor_area) * TL_PER_SQUARE_METER).round();
        let price_usd = (price_tl / TL_PER_USD).round();

        overrides.insert(
            format!("{block}-{unit}"),
            AreaOverride {
                ground_floor_area,
                normal_floor_area,
                price_tl,
                price_usd,
            },
        );
    }

    overrides
}

/// Parse a spreadsheet number that may use a comma as the decimal
/// separator ("123,45").
fn parse_decimal(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(block: &str, unit: &str, ground: &str, normal: &str) -> String {
        // 14 columns; the ones this parser ignores stay blank
        format!(",,,,,{block},{unit},,,,,,{ground},{normal}")
    }

    #[test]
    fn parses_comma_decimal_areas() {
        let csv = format!("header\n{}\n", row("A", "5", "\"120,5\"", "\"80,25\""));
        let overrides = parse_area_overrides(&csv);
        let entry = overrides.get("A-5").expect("A-5 parsed");
        assert_eq!(entry.ground_floor_area, 120.5);
        assert_eq!(entry.normal_floor_area, 80.25);
    }

    #[test]
    fn derives_placeholder_prices() {
        let csv = format!("header\n{}\n", row("B", "2", "100", "100"));
        let overrides = parse_area_overrides(&csv);
        let entry = overrides.get("B-2").expect("B-2 parsed");
        assert_eq!(entry.price_tl, 7_000_000.0);
        assert_eq!(entry.price_usd, 200_000.0);
    }

    #[test]
    fn drops_narrow_rows() {
        let csv = "header\n,,,,,A,5,,,\n";
        assert!(parse_area_overrides(csv).is_empty());
    }

    #[test]
    fn unparsable_areas_default_to_zero() {
        let csv = format!("header\n{}\n", row("C", "9", "-", ""));
        let overrides = parse_area_overrides(&csv);
        let entry = overrides.get("C-9").expect("C-9 parsed");
        assert_eq!(entry.ground_floor_area, 0.0);
        assert_eq!(entry.normal_floor_area, 0.0);
        assert_eq!(entry.price_tl, 0.0);
    }

    #[test]
    fn keys_preserve_exported_case() {
        let csv = format!("header\n{}\n", row("d", "7", "10", "10"));
        let overrides = parse_area_overrides(&csv);
        assert!(overrides.contains_key("d-7"));
        assert!(!overrides.contains_key("D-7"));
    }
}
