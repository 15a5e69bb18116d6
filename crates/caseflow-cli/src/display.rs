//! Fixed-width table rendering for drafts and persisted cases.

use caseflow_core::{DraftRecord, PersistedCase};

/// Print the staged drafts.
pub fn draft_table(drafts: &[DraftRecord]) {
    if drafts.is_empty() {
        println!("No staged drafts.");
        return;
    }
    let rows = drafts
        .iter()
        .map(|d| {
            vec![
                d.case_no.clone(),
                d.source.clone().unwrap_or_default(),
                d.category.to_string(),
            ]
        })
        .collect();
    for line in render(&["CASE NO", "SOURCE", "CATEGORY"], rows) {
        println!("{line}");
    }
}

/// Print a snapshot of persisted cases.
pub fn case_table(cases: &[PersistedCase]) {
    if cases.is_empty() {
        println!("No cases.");
        return;
    }
    let rows = cases
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.case_no.clone(),
                c.source.clone().unwrap_or_default(),
                c.category.to_string(),
                c.status.to_string(),
                c.create_date.clone(),
            ]
        })
        .collect();
    for line in render(
        &["ID", "CASE NO", "SOURCE", "CATEGORY", "STATUS", "CREATED"],
        rows,
    ) {
        println!("{line}");
    }
}

/// Print a filtered (borrowed) view of persisted cases.
pub fn case_ref_table(cases: &[&PersistedCase]) {
    let owned: Vec<PersistedCase> = cases.iter().map(|c| (*c).clone()).collect();
    case_table(&owned);
}

/// Render a header row plus data rows with per-column widths.
fn render(headers: &[&str], rows: Vec<Vec<String>>) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    lines.push(header.join("  ").trim_end().to_string());
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let lines = render(
            &["CASE NO", "SOURCE"],
            vec![
                vec!["1234567".into(), "John Doe".into()],
                vec!["22".into(), "X".into()],
            ],
        );
        assert_eq!(lines[0], "CASE NO  SOURCE");
        assert_eq!(lines[1], "1234567  John Doe");
        assert_eq!(lines[2], "22       X");
    }

    #[test]
    fn header_only_when_no_rows() {
        let lines = render(&["ID"], vec![]);
        assert_eq!(lines, vec!["ID"]);
    }
}
