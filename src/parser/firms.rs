use crate::model::FirmRecord;

use super::line::split_line;

/// Parse the firm/tenant list export.
///
/// The header line is skipped. A row is kept only when it has at least 7
/// fields AND an integer first field (SIRA_NO) — this filters the blank
/// spacer and footer rows the export contains. The block letter is
/// upper-cased on ingestion; everything else is taken as-is.
#[must_use]
pub fn parse_firms(content: &str) -> Vec<FirmRecord> {
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<FirmRecord> {
    let fields = split_line(line);
    if fields.len() < 7 {
        return None;
    }
    let row_no: u32 = fields[0].parse().ok()?;

    Some(FirmRecord {
        row_no,
        phase: fields[1].clone(),
        block: fields[2].to_uppercase(),
        unit_list: fields[3].clone(),
        name: fields[4].clone(),
        occupancy: fields[5].clone(),
        business_line: fields[6].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIRM_CSV: &str = "\
SIRA_NO,ETAP,BLOK,NO,FIRMA,KIRACI/MALIK,IS_KOLU
1,1,a,3-4-6,\"Demir Çelik San. Tic. Ltd. Şti.\",MALİK,Metal işleme
2,2,B,12,Öz Ambalaj A.Ş.,KİRACI,Ambalaj
,,,,,,
TOPLAM,,,,,,
";

    #[test]
    fn parses_valid_rows() {
        let firms = parse_firms(FIRM_CSV);
        assert_eq!(firms.len(), 2);
        assert_eq!(firms[0].row_no, 1);
        assert_eq!(firms[0].unit_list, "3-4-6");
        assert_eq!(firms[0].name, "Demir Çelik San. Tic. Ltd. Şti.");
        assert_eq!(firms[1].phase, "2");
    }

    #[test]
    fn upper_cases_block() {
        let firms = parse_firms(FIRM_CSV);
        assert_eq!(firms[0].block, "A");
    }

    #[test]
    fn rejects_footer_and_blank_rows() {
        // the all-empty spacer row and the "TOPLAM" footer both fail the
        // integer-first-field guard
        let firms = parse_firms(FIRM_CSV);
        assert!(firms.iter().all(|f| f.row_no > 0));
    }

    #[test]
    fn rejects_rows_with_too_few_fields() {
        let csv = "SIRA_NO,ETAP,BLOK,NO,FIRMA,KIRACI/MALIK,IS_KOLU\n1,1,A,5\n";
        assert_eq!(parse_firms(csv).len(), 0);
    }
}
