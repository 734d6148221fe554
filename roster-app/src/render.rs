//! Plain-text table output.

use std::fmt::Write;

use roster_lib::model::User;
use roster_lib::table::HeaderCheckbox;
use roster_lib::table::PageInfo;
use roster_lib::table::Pagination;
use roster_lib::table::SelectionSummary;

const HEADERS: [&str; 7] = ["ID", "First Name", "Last Name", "Age", "Gender", "Email", "Phone"];

/// Renders one table page with its header checkbox and footer.
pub fn table(
    title: &str,
    rows: &[User],
    pagination: &Pagination,
    summary: SelectionSummary,
    info: PageInfo,
    empty_message: &str,
) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|u| {
            [
                u.id.to_string(),
                u.first_name.clone(),
                u.last_name.clone(),
                u.age.to_string(),
                u.gender.to_string(),
                u.email.clone(),
                u.phone.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let header = HEADERS.map(String::from);
    let _ = writeln!(out, "{} {}", checkbox(summary.checkbox()), line(&header, &widths));

    if cells.is_empty() {
        let _ = writeln!(out, "    {}", empty_message);
    }
    for (user, row) in rows.iter().zip(&cells) {
        let mark = if pagination.selection().contains(user.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let _ = writeln!(out, "{} {}", mark, line(row, &widths));
    }

    let _ = writeln!(out, "{}", info);
    out
}

fn checkbox(state: HeaderCheckbox) -> &'static str {
    match state {
        HeaderCheckbox::Checked => "[x]",
        HeaderCheckbox::Indeterminate => "[-]",
        HeaderCheckbox::Unchecked => "[ ]",
    }
}

fn line(cells: &[String; 7], widths: &[usize; 7]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use roster_lib::model::Gender;
    use roster_lib::model::UserFields;
    use roster_lib::model::UserId;

    use super::*;

    fn user(id: u64) -> User {
        UserFields {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            age: 36,
            gender: Gender::Female,
            email: "ada@example.com".to_string(),
            phone: None,
        }
        .with_id(UserId(id))
    }

    #[test]
    fn empty_table_shows_message() {
        let pagination = Pagination::default();
        let out = table(
            "Local Users",
            &[],
            &pagination,
            pagination.selection_summary(&[]),
            pagination.page_info(0),
            "No local users.",
        );
        assert!(out.contains("No local users."));
        assert!(out.contains("0 of 0 row(s) selected."));
        assert!(out.contains("Page 1 of 1"));
    }

    #[test]
    fn selected_rows_are_marked() {
        let rows = vec![user(1), user(2)];
        let mut pagination = Pagination::default();
        pagination.toggle_select(UserId(2), true);
        let ids = [UserId(1), UserId(2)];

        let out = table(
            "User Table",
            &rows,
            &pagination,
            pagination.selection_summary(&ids),
            pagination.page_info(rows.len()),
            "No data available",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("[-] ID"));
        assert!(lines[2].starts_with("[ ] 1"));
        assert!(lines[3].starts_with("[x] 2"));
        assert!(out.contains("1 of 2 row(s) selected."));
    }
}
