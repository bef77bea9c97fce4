//! Scenario extraction from model output
//!
//! Scrapes the rows of a pipe-delimited markdown table out of free-form text.
//! This is best-effort: prose, header rows, alignment rows and rows with too
//! few cells are dropped without error, so malformed output simply yields a
//! short or empty list.

use tracing::debug;

use crate::models::TestScenario;

/// Label of the first header column
const HEADER_ID: &str = "Scenario ID";

/// Leading empty cell plus the four data cells
const MIN_CELLS: usize = 5;

/// Extract scenarios from a sequence of lines, in source order
pub fn extract_scenarios<'a, I>(lines: I) -> Vec<TestScenario>
where
    I: IntoIterator<Item = &'a str>,
{
    let scenarios: Vec<TestScenario> = lines.into_iter().filter_map(parse_row).collect();
    debug!(count = scenarios.len(), "Extracted test scenarios");
    scenarios
}

/// Extract scenarios from a block of text with `\n` or `\r\n` line endings
pub fn extract_scenarios_from_text(text: &str) -> Vec<TestScenario> {
    extract_scenarios(text.lines())
}

fn parse_row(line: &str) -> Option<TestScenario> {
    if !line.starts_with('|') {
        return None;
    }

    let cells: Vec<&str> = line.split('|').collect();
    if cells.len() < MIN_CELLS {
        return None;
    }

    let [id, description, input_data, expected] =
        [cells[1], cells[2], cells[3], cells[4]].map(str::trim);

    if id.is_empty() || id == HEADER_ID {
        return None;
    }

    if [id, description, input_data, expected]
        .iter()
        .all(|cell| is_alignment_cell(cell))
    {
        return None;
    }

    Some(TestScenario {
        id: id.to_string(),
        description: description.to_string(),
        input_data: input_data.to_string(),
        expected: expected.to_string(),
    })
}

/// `---`, `:--`, `:-:` and friends
fn is_alignment_cell(cell: &str) -> bool {
    cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':' || c.is_whitespace())
}
