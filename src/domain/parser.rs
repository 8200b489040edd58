use tracing::debug;

use super::schema::{CardSchema, FOOTER_COLUMN, FieldDefinition, FieldKind, OPTION_DELIMITER};

const CELL_DELIMITER: char = ',';

/// Cells of one line of the tabular source.
pub type RawRow = Vec<String>;

/// Split raw schema text into rows of cells.
pub fn split_rows(text: &str) -> Vec<RawRow> {
    text.trim_end()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| line.split(CELL_DELIMITER).map(str::to_string).collect())
        .collect()
}

/// Parse tabular schema text into the ordered field set and footer caption.
///
/// Malformed rows never fail the parse: rows with fewer than two cells and rows naming an
/// unknown kind are skipped and do not consume a position.
pub fn parse_card_schema(text: &str) -> CardSchema {
    let mut rows = split_rows(text).into_iter();
    let caption = rows.next().as_deref().and_then(caption_from_header);

    let mut fields = Vec::new();
    for (line, row) in rows.enumerate() {
        if row.len() < 2 {
            debug!(line = line + 1, "skipping schema row with fewer than two cells");
            continue;
        }
        let options = row.get(2).map(|cell| parse_options(cell)).unwrap_or_default();
        let Some(kind) = FieldKind::from_literal(&row[1], options) else {
            debug!(line = line + 1, kind = %row[1], "skipping schema row with unknown kind");
            continue;
        };
        fields.push(FieldDefinition::new(fields.len(), row[0].clone(), kind));
    }

    CardSchema { caption, fields }
}

fn caption_from_header(header: &[String]) -> Option<String> {
    header
        .get(FOOTER_COLUMN)
        .map(|cell| cell.trim())
        .filter(|caption| !caption.is_empty())
        .map(str::to_string)
}

fn parse_options(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.replace(['\r', '\n'], "")
        .split(OPTION_DELIMITER)
        .map(str::to_string)
        .collect()
}
