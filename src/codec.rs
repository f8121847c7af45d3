//! Plain-text puzzle codec, compatible with common crossword-editor files.
//!
//! The format is a sequence of `<TAG>` headers, each followed by its payload
//! on tab-indented lines. Export always writes sections in the fixed order
//! `ACROSS PUZZLE`, `TITLE`, `AUTHOR`, `COPYRIGHT`, `SIZE`, `GRID`,
//! `ACROSS`, `DOWN`; import accepts them in any order. The GRID payload is
//! the wire contract: `.` blocked, `?` open and empty, anything else a
//! letter.

use crate::error::{PuzzleError, PuzzleResult};
use crate::types::{Cell, Grid, PuzzleDocument, WordSlot, DEFAULT_AUTHOR};
use crate::words;
use std::collections::HashMap;

/// Placeholder clue line for slots the author hasn't clued yet. Reads back
/// as an empty clue so export/import round-trips clue text exactly.
const NO_HINT: &str = "No hint!";

/// Title written when the document has none.
const UNTITLED: &str = "Untitled";

/// Serialize a document to the tagged text format.
pub fn serialize(doc: &PuzzleDocument) -> String {
    let mut out = String::new();

    out.push_str("<ACROSS PUZZLE>\n");

    out.push_str("<TITLE>\n");
    let title = if doc.title.is_empty() { UNTITLED } else { &doc.title };
    push_line(&mut out, title);

    out.push_str("<AUTHOR>\n");
    let author = if doc.author.is_empty() { DEFAULT_AUTHOR } else { &doc.author };
    push_line(&mut out, author);

    out.push_str("<COPYRIGHT>\n");
    let copyright = if doc.copyright.is_empty() { DEFAULT_AUTHOR } else { &doc.copyright };
    push_line(&mut out, copyright);

    out.push_str("<SIZE>\n");
    push_line(&mut out, &format!("{0}x{0}", doc.grid.size));

    out.push_str("<GRID>\n");
    for row in 0..doc.grid.size {
        let line: String = (0..doc.grid.size)
            .map(|col| doc.grid.get(row, col).to_char())
            .collect();
        push_line(&mut out, &line);
    }

    out.push_str("<ACROSS>\n");
    for slot in &doc.across {
        push_clue(&mut out, &slot.clue);
    }

    out.push_str("<DOWN>\n");
    for slot in &doc.down {
        push_clue(&mut out, &slot.clue);
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push('\t');
    out.push_str(line);
    out.push('\n');
}

fn push_clue(out: &mut String, clue: &str) {
    push_line(out, if clue.is_empty() { NO_HINT } else { clue });
}

/// Parse the tagged text format back into a document.
///
/// Fails atomically with `MalformedDocument` when the GRID section is
/// missing or empty; everything else is parsed permissively. The grid's row
/// count always wins over the SIZE payload, so a disagreeing SIZE section is
/// ignored rather than rejected. Slots are freshly re-derived from the
/// parsed grid, then ACROSS/DOWN payload lines map onto them strictly by
/// line index: extra lines are dropped, missing lines leave empty clues.
pub fn deserialize(text: &str) -> PuzzleResult<PuzzleDocument> {
    let sections = split_sections(text);

    let grid_payload = sections
        .get("GRID")
        .ok_or_else(|| PuzzleError::malformed("missing <GRID> section"))?;
    let grid = parse_grid(grid_payload)?;

    let (mut across, mut down) = words::extract(&grid);
    assign_clues(&mut across, sections.get("ACROSS"));
    assign_clues(&mut down, sections.get("DOWN"));

    Ok(PuzzleDocument {
        title: first_line(sections.get("TITLE")),
        author: text_or(sections.get("AUTHOR"), DEFAULT_AUTHOR),
        copyright: text_or(sections.get("COPYRIGHT"), DEFAULT_AUTHOR),
        grid,
        across,
        down,
    })
}

/// Split the raw text on `<TAG>` boundaries into a tag -> payload map.
/// Anything before the first tag is dropped.
fn split_sections(text: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else { break };
        let tag = after[..close].trim().to_string();
        let body = &after[close + 1..];

        let (payload, remaining) = match body.find('<') {
            Some(next) => (&body[..next], &body[next..]),
            None => (body, ""),
        };
        sections.insert(tag, payload.to_string());
        rest = remaining;
    }
    sections
}

/// Payload lines with the tab indentation and line endings stripped, empty
/// lines dropped.
fn payload_lines(payload: &str) -> Vec<&str> {
    payload
        .lines()
        .map(|l| l.trim_start_matches('\t').trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .collect()
}

fn first_line(payload: Option<&String>) -> String {
    payload
        .map(|p| payload_lines(p))
        .and_then(|lines| lines.first().map(|l| l.to_string()))
        .unwrap_or_default()
}

fn text_or(payload: Option<&String>, default: &str) -> String {
    let line = first_line(payload);
    if line.is_empty() { default.to_string() } else { line }
}

/// Build the cell matrix from the GRID payload. The row count defines the
/// grid size; short rows are padded with open cells so the matrix stays
/// square, long rows are truncated.
fn parse_grid(payload: &str) -> PuzzleResult<Grid> {
    let lines = payload_lines(payload);
    if lines.is_empty() {
        return Err(PuzzleError::malformed("empty <GRID> section"));
    }

    let size = lines.len();
    let mut grid = Grid::new(size)?;
    for (row, line) in lines.iter().enumerate() {
        for (col, c) in line.chars().take(size).enumerate() {
            grid.set(row, col, Cell::from_char(c));
        }
    }
    Ok(grid)
}

/// Copy payload lines onto slots by index, reading the placeholder line back
/// as an empty clue.
fn assign_clues(slots: &mut [WordSlot], payload: Option<&String>) {
    let Some(payload) = payload else { return };
    for (slot, line) in slots.iter_mut().zip(payload_lines(payload)) {
        if line != NO_HINT {
            slot.clue = line.to_string();
        }
    }
}
