use crate::model::{Phase, Unit, UnitStatus};

use super::line::split_line;

/// Column positions for one phase's inventory export.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    /// Rows with fewer fields than this are dropped.
    min_fields: usize,
    section: usize,
    block: usize,
    unit: usize,
    gross: usize,
    net: usize,
    status: usize,
}

/// Layout shared by phases 1, 3, 4 and 5.
const STANDARD_LAYOUT: ColumnLayout = ColumnLayout {
    min_fields: 6,
    section: 0,
    block: 1,
    unit: 2,
    gross: 3,
    net: 4,
    status: 5,
};

/// Phase 2 exports carry a leading row-id column, and a TL price column
/// (index 6) between net area and status. The price column is superseded
/// by the override sheet and not consumed here.
const PHASE2_LAYOUT: ColumnLayout = ColumnLayout {
    min_fields: 8,
    section: 1,
    block: 2,
    unit: 3,
    gross: 4,
    net: 5,
    status: 7,
};

const fn layout_for(phase: Phase) -> ColumnLayout {
    match phase {
        Phase::Two => PHASE2_LAYOUT,
        _ => STANDARD_LAYOUT,
    }
}

/// Parse one phase's unit inventory export into normalized units.
///
/// The header line is skipped; empty lines are ignored; rows with fewer
/// fields than the phase layout expects are silently dropped, and
/// unparsable area values default to 0. A malformed row never aborts the
/// rest of the parse.
#[must_use]
pub fn parse_units(content: &str, phase: Phase) -> Vec<Unit> {
    let layout = layout_for(phase);
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_row(line, layout))
        .collect()
}

fn parse_row(line: &str, layout: ColumnLayout) -> Option<Unit> {
    let fields = split_line(line);
    if fields.len() < layout.min_fields {
        return None;
    }

    Some(Unit {
        section: fields[layout.section].clone(),
        block: fields[layout.block].clone(),
        unit_number: fields[layout.unit].clone(),
        gross_area: parse_area(&fields[layout.gross]),
        net_area: parse_area(&fields[layout.net]),
        status: UnitStatus::classify(&fields[layout.status]),
        ground_floor_area: None,
        normal_floor_area: None,
        price_tl: None,
        price_usd: None,
    })
}

fn parse_area(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STANDARD_CSV: &str = "\
KISIM,BLOK,NO,BRÜT,NET,DURUM
1. Kısım,A,1,250,210,Satılık
1. Kısım,A,2,250,210,Satıldı
1. Kısım,B,1,300,255,Satışa Kapalı
";

    #[test]
    fn parses_standard_layout() {
        let units = parse_units(STANDARD_CSV, Phase::One);
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].block, "A");
        assert_eq!(units[0].unit_number, "1");
        assert_eq!(units[0].gross_area, 250.0);
        assert_eq!(units[0].net_area, 210.0);
        assert_eq!(units[0].status, UnitStatus::Available);
        assert_eq!(units[1].status, UnitStatus::Sold);
        assert_eq!(units[2].status, UnitStatus::Reserved);
    }

    #[test]
    fn parses_phase_two_layout() {
        let csv = "\
ID,KISIM,BLOK,NO,BRÜT,NET,FİYAT,DURUM
17,2. Kısım,C,5,400,340,14000000,Satılık
";
        let units = parse_units(csv, Phase::Two);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].section, "2. Kısım");
        assert_eq!(units[0].block, "C");
        assert_eq!(units[0].unit_number, "5");
        assert_eq!(units[0].net_area, 340.0);
        // price column is left to the override sheet
        assert_eq!(units[0].price_tl, None);
    }

    #[test]
    fn drops_short_rows_without_failing() {
        let csv = "\
KISIM,BLOK,NO,BRÜT,NET,DURUM
1. Kısım,A,1,250,210,Satılık
A,2,250
1. Kısım,A,3,250,210,Satılık
";
        let units = parse_units(csv, Phase::One);
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].unit_number, "3");
    }

    #[test]
    fn unparsable_areas_default_to_zero() {
        let csv = "\
KISIM,BLOK,NO,BRÜT,NET,DURUM
1. Kısım,A,1,-,n/a,Satılık
";
        let units = parse_units(csv, Phase::One);
        assert_eq!(units[0].gross_area, 0.0);
        assert_eq!(units[0].net_area, 0.0);
    }

    #[test]
    fn skips_empty_lines() {
        let csv = "KISIM,BLOK,NO,BRÜT,NET,DURUM\n\n1. Kısım,A,1,250,210,Satılık\n\n";
        assert_eq!(parse_units(csv, Phase::One).len(), 1);
    }
}
