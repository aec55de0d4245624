// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
/// Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    push_row(&mut rows, &mut row);

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(take(row));
    } else {
        row.clear();
    }
}

/// First row becomes the header; the rest are data rows.
pub fn split_header(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    if rows.is_empty() { return (None, rows); }
    let header = rows.remove(0);
    (Some(header), rows)
}

/// Guess the delimiter from the header line: tab wins if the line has one.
pub fn sniff_delim(text: &str) -> char {
    let first = text.lines().next().unwrap_or("");
    if first.contains('\t') { '\t' } else { ',' }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify a table; headers are emitted only when present and `include_headers`.
pub fn table_to_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_and_crlf() {
        let text = "city,title\r\n\"Austin\",\"Driver, CDL\"\r\n\r\nDallas,\"Say \"\"hi\"\"\"\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["Austin", "Driver, CDL"]);
        assert_eq!(rows[2], vec!["Dallas", "Say \"hi\""]);
    }

    #[test]
    fn split_header_takes_first_row() {
        let (h, r) = split_header(parse_rows("a,b\n1,2\n", ','));
        assert_eq!(h, Some(vec![s!("a"), s!("b")]));
        assert_eq!(r, vec![vec![s!("1"), s!("2")]]);
        assert_eq!(split_header(Vec::new()), (None, Vec::new()));
    }

    #[test]
    fn writes_quoted_cells_only_when_needed() {
        let headers = Some(row!["Role", "Location (City, State)"]);
        let rows = vec![row!["Driver", "Austin, TX"]];
        let out = table_to_string(&headers, &rows, true, ',');
        assert_eq!(out, "Role,\"Location (City, State)\"\nDriver,\"Austin, TX\"\n");

        let tsv = table_to_string(&headers, &rows, false, '\t');
        assert_eq!(tsv, "Driver\tAustin, TX\n");
    }

    #[test]
    fn sniffs_tab_delimited_header() {
        assert_eq!(sniff_delim("city\tstate\nA\tB"), '\t');
        assert_eq!(sniff_delim("city,state"), ',');
    }
}
