//! Terminal Rendering
//!
//! Draws a [`Page`] as plain text for the CLI.

use std::fmt::Write;

use super::{Page, TableRow, WorkoutCard};
use crate::resource::Resource;

/// Render `page` for `resource` as text
pub fn render_text(resource: Resource, page: &Page) -> String {
    let mut out = String::new();

    match page {
        Page::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        Page::Failed { heading, message } => {
            let _ = writeln!(out, "{}", heading);
            let _ = writeln!(out, "{}", message);
        }
        Page::Empty { icon, title, hint } => {
            write_header(&mut out, resource);
            let _ = writeln!(out, "{} {}", icon, title);
            let _ = writeln!(out, "{}", hint);
        }
        Page::Table {
            count,
            columns,
            rows,
        } => {
            write_header(&mut out, resource);
            let _ = writeln!(out, "{}", count.text);
            let _ = writeln!(out);
            write_table(&mut out, columns, rows);
        }
        Page::Cards { count, cards } => {
            write_header(&mut out, resource);
            let _ = writeln!(out, "{}", count.text);
            for card in cards {
                let _ = writeln!(out);
                write_card(&mut out, card);
            }
        }
    }

    out
}

fn write_header(out: &mut String, resource: Resource) {
    let _ = writeln!(out, "{}", resource.heading());
    let _ = writeln!(out, "{}", resource.subtitle());
    let _ = writeln!(out);
}

fn write_table(out: &mut String, columns: &[&str], rows: &[TableRow]) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.text.chars().count());
            }
        }
    }

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(c, *w))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | ").trim_end());
    let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    let _ = writeln!(out, "{}", "-".repeat(total));

    for row in rows {
        let line: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(&cell.text, *w))
            .collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());
    }
}

fn write_card(out: &mut String, card: &WorkoutCard) {
    let _ = writeln!(out, "{}", card.title);

    let badges: Vec<String> = [&card.difficulty, &card.category]
        .into_iter()
        .flatten()
        .map(|b| format!("[{}]", b.text))
        .collect();
    if !badges.is_empty() {
        let _ = writeln!(out, "  {}", badges.join(" "));
    }

    let _ = writeln!(out, "  {}", card.description);
    if let Some(duration) = &card.duration {
        let _ = writeln!(out, "  Duration: {}", duration);
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_page;
    use crate::view::ViewState;
    use serde_json::json;

    #[test]
    fn test_table_text() {
        let state = ViewState::Ready {
            records: vec![
                json!({"user_name": "tony", "team_name": "Marvel", "total_points": 120, "activity_count": 4}),
                json!({"user_name": "clark", "team_name": "DC", "total_points": 90, "activity_count": 3}),
            ],
        };
        let text = render_text(Resource::Leaderboard, &build_page(Resource::Leaderboard, &state));

        assert!(text.starts_with("Leaderboard\n"));
        assert!(text.contains("Total Competitors: 2"));
        let lines: Vec<&str> = text.lines().collect();
        let tony = lines.iter().position(|l| l.contains("tony")).unwrap();
        let clark = lines.iter().position(|l| l.contains("clark")).unwrap();
        assert!(tony < clark);
        assert!(lines[tony].starts_with("🥇"));
        assert!(lines[tony].contains("120 pts"));
    }

    #[test]
    fn test_cards_text() {
        let state = ViewState::Ready {
            records: vec![json!({"name": "Plank", "difficulty": "easy", "duration": 5})],
        };
        let text = render_text(Resource::Workouts, &build_page(Resource::Workouts, &state));

        assert!(text.contains("Recommended Workouts"));
        assert!(text.contains("Plank"));
        assert!(text.contains("[easy]"));
        assert!(text.contains("Duration: 5 minutes"));
    }

    #[test]
    fn test_failed_text() {
        let state = ViewState::Failed {
            message: "HTTP error! status: 404".to_string(),
        };
        let text = render_text(Resource::Users, &build_page(Resource::Users, &state));
        assert_eq!(text, "Error Loading Users\nHTTP error! status: 404\n");
    }

    #[test]
    fn test_empty_text() {
        let state = ViewState::Ready { records: vec![] };
        let text = render_text(Resource::Teams, &build_page(Resource::Teams, &state));
        assert!(text.starts_with(&format!(
            "{}\n{}\n",
            Resource::Teams.heading(),
            Resource::Teams.subtitle()
        )));
        assert!(text.contains("No teams found"));
        assert!(!text.contains("Total Teams"));
    }
}
