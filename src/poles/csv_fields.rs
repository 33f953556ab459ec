//! Zerlegen einer CSV-Zeile nach RFC 4180 (ohne mehrzeilige Felder).

use anyhow::{bail, Result};

/// Zerlegt eine Zeile in Felder.
///
/// Felder in doppelten Anführungszeichen dürfen Kommas enthalten,
/// `""` steht für ein einzelnes Anführungszeichen.
pub fn split_record(line: &str) -> Result<Vec<String>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ('"', false) if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        bail!("Nicht geschlossenes Anführungszeichen");
    }
    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(split_record("a,b,,c").unwrap(), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_quoted_fields() {
        assert_eq!(
            split_record(r#""a,b","say ""hi""",c"#).unwrap(),
            vec!["a,b", "say \"hi\"", "c"]
        );
    }

    #[test]
    fn test_crlf_and_unclosed_quote() {
        assert_eq!(split_record("a,b\r").unwrap(), vec!["a", "b"]);
        assert!(split_record("\"a,b").is_err());
    }
}
