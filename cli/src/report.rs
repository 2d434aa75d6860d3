//! Text tables for the command line.
//!
//! A matrix is a header row followed by one row per record. [`render`] lays
//! it out as fixed-width columns framed by dash rules.

use crate::records::{Legislator, Representative, Senator};

/// Rows of cells, header first.
pub type Matrix = Vec<Vec<String>>;

const COLUMN_WIDTH: usize = 20;

fn header(cells: &[&str]) -> Vec<String> {
    cells.iter().map(ToString::to_string).collect()
}

/// One row per record: last name, first name, party.
#[must_use]
pub fn member_matrix<L: Legislator>(records: &[L]) -> Matrix {
    let mut matrix = vec![header(&["Last Name", "First Name", "Party"])];
    matrix.extend(records.iter().map(|record| {
        let member = record.member();
        vec![
            member.last_name().to_string(),
            member.first_name().to_string(),
            member.party().to_string(),
        ]
    }));
    matrix
}

/// Senators ordered by state. Feed order is kept within a state.
#[must_use]
pub fn senator_matrix(senators: &[Senator]) -> Matrix {
    let mut sorted: Vec<&Senator> = senators.iter().collect();
    sorted.sort_by(|a, b| a.member().state().cmp(&b.member().state()));

    let mut matrix = vec![header(&["Name", "State", "Rank", "Party"])];
    matrix.extend(sorted.into_iter().map(|senator| {
        vec![
            senator.display_name(),
            senator.member().state().unwrap_or_default().to_string(),
            senator.rank().map(|rank| rank.to_string()).unwrap_or_default(),
            senator.member().party().to_string(),
        ]
    }));
    matrix
}

/// Representatives ordered by state, then district.
#[must_use]
pub fn representative_matrix(representatives: &[Representative]) -> Matrix {
    let mut sorted: Vec<&Representative> = representatives.iter().collect();
    sorted.sort_by(|a, b| {
        (a.member().state(), a.district()).cmp(&(b.member().state(), b.district()))
    });

    let mut matrix = vec![header(&["Name", "State", "District", "Party"])];
    matrix.extend(sorted.into_iter().map(|rep| {
        vec![
            rep.display_name(),
            rep.member().state().unwrap_or_default().to_string(),
            rep.district().to_string(),
            rep.member().party().to_string(),
        ]
    }));
    matrix
}

fn render_row(row: &[String]) -> String {
    match row.split_last() {
        Some((last, padded)) => {
            let mut line: String = padded
                .iter()
                .map(|cell| format!("{cell:<COLUMN_WIDTH$} "))
                .collect();
            line.push_str(last);
            line
        }
        None => String::new(),
    }
}

/// Lay out a matrix under an upper-cased title.
///
/// ```
/// use articleone::report::render;
///
/// let table = render("Spam", &[vec!["Eggs".to_string(), "D".to_string()]]);
/// assert_eq!(table, "\nSPAM\n----\nEggs                 D\n----\n\n");
/// ```
#[must_use]
pub fn render(title: &str, matrix: &[Vec<String>]) -> String {
    let rule = "-".repeat(title.chars().count());
    let mut out = format!("\n{}\n{rule}\n", title.to_uppercase());
    for row in matrix {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push_str("\n\n");
    out
}
