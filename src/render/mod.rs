//! Presentation Model
//!
//! Pure mapping from a view's state to what it shows. Nothing here does
//! I/O; the web shell and the terminal client each draw a [`Page`] their
//! own way.
//!
//! - loading: a progress indicator, no data
//! - failed: an alert with the failure message verbatim
//! - ready and empty: the resource's empty state
//! - ready: a table (or card grid for workouts) in received order

mod badges;
mod date;
mod rows;
pub mod text;

pub use badges::{rank_badge, BadgeStyle, DifficultyCategory};
pub use date::{format_locale_date, INVALID_DATE};
pub use rows::{activity_row, leaderboard_row, team_row, user_row, workout_card};

use crate::resource::Resource;
use crate::view::ViewState;

/// How a cell's text is emphasised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Strong,
    Heading,
    Muted,
    Badge(BadgeStyle),
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Plain)
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Strong)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Heading)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Muted)
    }

    pub fn badge(text: impl Into<String>, style: BadgeStyle) -> Self {
        Self::styled(text, CellStyle::Badge(style))
    }

    fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    pub highlighted: bool,
}

impl TableRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            highlighted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub style: BadgeStyle,
}

impl Badge {
    pub fn new(text: impl Into<String>, style: BadgeStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One workout in the card grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutCard {
    pub title: String,
    pub difficulty: Option<Badge>,
    pub category: Option<Badge>,
    pub description: String,
    pub duration: Option<String>,
}

/// Everything a view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Loading,
    Failed {
        heading: String,
        message: String,
    },
    Empty {
        icon: &'static str,
        title: &'static str,
        hint: &'static str,
    },
    Table {
        count: Badge,
        columns: &'static [&'static str],
        rows: Vec<TableRow>,
    },
    Cards {
        count: Badge,
        cards: Vec<WorkoutCard>,
    },
}

impl Page {
    /// Number of rows or cards shown
    pub fn item_count(&self) -> usize {
        match self {
            Page::Table { rows, .. } => rows.len(),
            Page::Cards { cards, .. } => cards.len(),
            _ => 0,
        }
    }
}

/// Build the page for `resource` in `state`
pub fn build_page(resource: Resource, state: &ViewState) -> Page {
    let records = match state {
        ViewState::Loading => return Page::Loading,
        ViewState::Failed { message } => {
            return Page::Failed {
                heading: resource.error_heading(),
                message: message.clone(),
            }
        }
        ViewState::Ready { records } => records,
    };

    if records.is_empty() {
        let (icon, title, hint) = resource.empty_state();
        return Page::Empty { icon, title, hint };
    }

    let count = Badge::new(
        format!("{}: {}", resource.count_label(), records.len()),
        BadgeStyle::Primary,
    );

    let table = |columns: &'static [&'static str], rows: Vec<TableRow>| Page::Table {
        count: count.clone(),
        columns,
        rows,
    };

    match resource {
        Resource::Activities => table(
            rows::ACTIVITY_COLUMNS,
            records.iter().map(activity_row).collect(),
        ),
        Resource::Leaderboard => table(
            rows::LEADERBOARD_COLUMNS,
            records
                .iter()
                .enumerate()
                .map(|(i, r)| leaderboard_row(i, r))
                .collect(),
        ),
        Resource::Teams => table(rows::TEAM_COLUMNS, records.iter().map(team_row).collect()),
        Resource::Users => table(rows::USER_COLUMNS, records.iter().map(user_row).collect()),
        Resource::Workouts => Page::Cards {
            count: count.clone(),
            cards: records.iter().map(workout_card).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ready(records: serde_json::Value) -> ViewState {
        ViewState::Ready {
            records: records.as_array().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_loading_page() {
        for resource in Resource::ALL {
            assert_eq!(build_page(resource, &ViewState::Loading), Page::Loading);
        }
    }

    #[test]
    fn test_failed_page_keeps_message_verbatim() {
        let state = ViewState::Failed {
            message: "HTTP error! status: 502".to_string(),
        };
        match build_page(Resource::Teams, &state) {
            Page::Failed { heading, message } => {
                assert_eq!(heading, "Error Loading Teams");
                assert_eq!(message, "HTTP error! status: 502");
            }
            other => panic!("unexpected page: {:?}", other),
        }
    }

    #[test]
    fn test_empty_state_per_resource() {
        let page = build_page(Resource::Workouts, &ready(json!([])));
        assert_eq!(
            page,
            Page::Empty {
                icon: "💪",
                title: "No workouts available",
                hint: "Check back later for personalized workout recommendations!",
            }
        );
    }

    #[test]
    fn test_table_in_received_order() {
        let state = ready(json!([
            {"name": "Zumba"},
            {"name": "Archery"},
            {"name": "Marathon"}
        ]));
        let page = build_page(Resource::Activities, &state);
        assert_eq!(page.item_count(), 3);

        let Page::Table { count, columns, rows } = page else {
            panic!("expected table");
        };
        assert_eq!(count.text, "Total Activities: 3");
        assert_eq!(columns.len(), 5);
        let names: Vec<&str> = rows.iter().map(|r| r.cells[0].text.as_str()).collect();
        assert_eq!(names, vec!["Zumba", "Archery", "Marathon"]);
    }

    #[test]
    fn test_leaderboard_count_label() {
        let page = build_page(Resource::Leaderboard, &ready(json!([{}, {}])));
        let Page::Table { count, .. } = page else {
            panic!("expected table");
        };
        assert_eq!(count.text, "Total Competitors: 2");
    }

    #[test]
    fn test_workouts_render_as_cards() {
        let page = build_page(
            Resource::Workouts,
            &ready(json!([{"name": "HIIT", "difficulty": "hard"}, {"name": "Walk"}])),
        );
        let Page::Cards { count, cards } = page else {
            panic!("expected cards");
        };
        assert_eq!(count.text, "Total Workouts: 2");
        assert_eq!(cards[0].difficulty.as_ref().unwrap().style, BadgeStyle::Danger);
        assert!(cards[1].difficulty.is_none());
    }

    #[test]
    fn test_every_resource_keeps_count_and_order() {
        let records: Vec<serde_json::Value> = (0..5)
            .map(|i| json!({"name": format!("n{}", i), "user_name": format!("n{}", i)}))
            .collect();
        let state = ViewState::Ready { records };

        for resource in Resource::ALL {
            let page = build_page(resource, &state);
            assert_eq!(page.item_count(), 5, "{}", resource);

            let firsts: Vec<String> = match page {
                Page::Table { rows, .. } => rows
                    .iter()
                    .map(|r| {
                        r.cells
                            .iter()
                            .map(|c| c.text.clone())
                            .find(|t| t.starts_with('n'))
                            .unwrap()
                    })
                    .collect(),
                Page::Cards { cards, .. } => cards.iter().map(|c| c.title.clone()).collect(),
                other => panic!("unexpected page for {}: {:?}", resource, other),
            };
            assert_eq!(firsts, vec!["n0", "n1", "n2", "n3", "n4"], "{}", resource);
        }
    }
}
