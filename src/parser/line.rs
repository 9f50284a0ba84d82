/// Split one CSV line into trimmed field values.
///
/// A double quote toggles quoted mode; commas inside quotes belong to the
/// field value and the quotes themselves are dropped. Doubled quotes are
/// NOT decoded as escaped quotes — the upstream exports never produce
/// them, so the decoder does not support them (known limitation). The
/// trailing field is always emitted, even without a trailing comma.
///
/// Callers are expected to filter out empty lines before decoding.
#[must_use]
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_commas_inside_quotes() {
        assert_eq!(split_line(r#"A,"B, C",D"#), vec!["A", "B, C", "D"]);
    }

    #[test]
    fn trims_fields() {
        assert_eq!(split_line(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn emits_trailing_empty_field() {
        assert_eq!(split_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn quoted_field_spanning_whole_value() {
        assert_eq!(
            split_line(r#""Örnek San. ve Tic. A.Ş., Şube",12"#),
            vec!["Örnek San. ve Tic. A.Ş., Şube", "12"]
        );
    }
}
