//! HTML Templates
//!
//! askama template contexts. Everything is precomputed into plain
//! strings and booleans so the templates stay free of logic.

use askama::Template;

use crate::render::{Cell, CellStyle, Page, TableRow, WorkoutCard};
use crate::resource::Resource;

/// Entry in the top navigation bar
pub struct NavLink {
    pub href: &'static str,
    pub label: String,
    pub active: bool,
}

/// Navigation with `current` (if any) marked active
pub fn nav_links(current: Option<Resource>) -> Vec<NavLink> {
    let home = NavLink {
        href: "/",
        label: "🏠 Home".to_string(),
        active: current.is_none(),
    };

    std::iter::once(home)
        .chain(Resource::ALL.into_iter().map(|r| NavLink {
            href: r.route(),
            label: format!("{} {}", r.nav_glyph(), r.title()),
            active: current == Some(r),
        }))
        .collect()
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub href: &'static str,
    pub action: &'static str,
}

pub struct QuickLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: Vec<NavLink>,
    pub features: Vec<Feature>,
    pub quick_links: Vec<QuickLink>,
}

impl HomeTemplate {
    pub fn new() -> Self {
        Self {
            nav: nav_links(None),
            features: vec![
                Feature {
                    icon: "📊",
                    title: "Track Activities",
                    text: "Log your daily workouts and monitor your progress with detailed activity tracking.",
                    href: "/activities",
                    action: "View Activities",
                },
                Feature {
                    icon: "🏆",
                    title: "Compete",
                    text: "Join teams, compete with friends, and climb the leaderboard to become champion.",
                    href: "/leaderboard",
                    action: "View Leaderboard",
                },
                Feature {
                    icon: "💪",
                    title: "Get Recommendations",
                    text: "Receive personalized workout suggestions tailored to your fitness level and goals.",
                    href: "/workouts",
                    action: "Browse Workouts",
                },
            ],
            quick_links: vec![
                QuickLink { href: "/teams", label: "👥 Teams" },
                QuickLink { href: "/users", label: "👤 Users" },
                QuickLink { href: "/leaderboard", label: "🏆 Rankings" },
                QuickLink { href: "/activities", label: "📈 Activity Log" },
            ],
        }
    }
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Page shell for one resource; its view starts out loading
#[derive(Template)]
#[template(path = "resource.html")]
pub struct ResourceTemplate {
    pub nav: Vec<NavLink>,
    pub title: &'static str,
    pub error_heading: String,
    pub fragment_src: &'static str,
}

impl ResourceTemplate {
    pub fn new(resource: Resource) -> Self {
        Self {
            nav: nav_links(Some(resource)),
            title: resource.title(),
            error_heading: resource.error_heading(),
            fragment_src: resource.fragment_route(),
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub nav: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "fragments/loading.html")]
pub struct LoadingFragment;

#[derive(Template)]
#[template(path = "fragments/alert.html")]
pub struct AlertFragment {
    pub heading: String,
    pub message: String,
}

#[derive(Template)]
#[template(path = "fragments/empty.html")]
pub struct EmptyFragment {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub icon_class: &'static str,
    /// Always empty; the header shows no count badge above an empty state
    pub count: String,
    pub icon: &'static str,
    pub title: &'static str,
    pub hint: &'static str,
}

pub struct CellView {
    pub kind: &'static str,
    pub class: &'static str,
    pub text: String,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        let (kind, class) = match cell.style {
            CellStyle::Plain => ("plain", ""),
            CellStyle::Strong => ("strong", ""),
            CellStyle::Heading => ("heading", ""),
            CellStyle::Muted => ("muted", ""),
            CellStyle::Badge(style) => ("badge", style.css_class()),
        };
        Self {
            kind,
            class,
            text: cell.text.clone(),
        }
    }
}

pub struct RowView {
    pub highlighted: bool,
    pub cells: Vec<CellView>,
}

impl From<&TableRow> for RowView {
    fn from(row: &TableRow) -> Self {
        Self {
            highlighted: row.highlighted,
            cells: row.cells.iter().map(CellView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "fragments/table.html")]
pub struct TableFragment {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub icon_class: &'static str,
    pub count: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<RowView>,
}

pub struct BadgeView {
    pub class: &'static str,
    pub text: String,
}

pub struct CardView {
    pub title: String,
    pub badges: Vec<BadgeView>,
    pub description: String,
    /// Empty when the workout has no duration
    pub duration: String,
}

impl From<&WorkoutCard> for CardView {
    fn from(card: &WorkoutCard) -> Self {
        let badges = [&card.difficulty, &card.category]
            .into_iter()
            .flatten()
            .map(|b| BadgeView {
                class: b.style.css_class(),
                text: b.text.clone(),
            })
            .collect();

        Self {
            title: card.title.clone(),
            badges,
            description: card.description.clone(),
            duration: card.duration.clone().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "fragments/cards.html")]
pub struct CardsFragment {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub icon_class: &'static str,
    pub count: String,
    pub cards: Vec<CardView>,
}

/// Render the HTML fragment for a view page
pub fn render_fragment(resource: Resource, page: &Page) -> askama::Result<String> {
    match page {
        Page::Loading => LoadingFragment.render(),
        Page::Failed { heading, message } => AlertFragment {
            heading: heading.clone(),
            message: message.clone(),
        }
        .render(),
        Page::Empty { icon, title, hint } => EmptyFragment {
            heading: resource.heading(),
            subtitle: resource.subtitle(),
            icon_class: resource.header_icon(),
            count: String::new(),
            icon: *icon,
            title: *title,
            hint: *hint,
        }
        .render(),
        Page::Table {
            count,
            columns,
            rows,
        } => TableFragment {
            heading: resource.heading(),
            subtitle: resource.subtitle(),
            icon_class: resource.header_icon(),
            count: count.text.clone(),
            columns: columns.to_vec(),
            rows: rows.iter().map(RowView::from).collect(),
        }
        .render(),
        Page::Cards { count, cards } => CardsFragment {
            heading: resource.heading(),
            subtitle: resource.subtitle(),
            icon_class: resource.header_icon(),
            count: count.text.clone(),
            cards: cards.iter().map(CardView::from).collect(),
        }
        .render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BadgeStyle;

    #[test]
    fn test_nav_marks_active() {
        let links = nav_links(Some(Resource::Teams));
        assert_eq!(links.len(), 6);
        assert_eq!(links[0].href, "/");
        assert!(!links[0].active);
        let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.href).collect();
        assert_eq!(active, vec!["/teams"]);
    }

    #[test]
    fn test_alert_escapes_message() {
        let page = Page::Failed {
            heading: "Error Loading Users".to_string(),
            message: "<b>bad".to_string(),
        };
        let html = render_fragment(Resource::Users, &page).unwrap();
        assert!(html.contains("alert-danger"));
        assert!(html.contains("&lt;b&gt;bad"));
    }

    #[test]
    fn test_loading_fragment() {
        let html = render_fragment(Resource::Activities, &Page::Loading).unwrap();
        assert!(html.contains("spinner-border"));
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn test_empty_fragment_keeps_page_header() {
        let page = Page::Empty {
            icon: "👥",
            title: "No teams found",
            hint: "Create a team to get started!",
        };
        let html = render_fragment(Resource::Teams, &page).unwrap();

        assert!(html.contains("page-header"));
        assert!(html.contains(Resource::Teams.header_icon()));
        assert!(html.contains(Resource::Teams.subtitle()));
        assert!(html.contains("No teams found"));
        assert!(!html.contains("badge bg-primary"));
        assert!(html.find("page-header").unwrap() < html.find("empty-state").unwrap());
    }

    #[test]
    fn test_table_fragment_shows_count_badge() {
        let page = Page::Table {
            count: crate::render::Badge::new("Total Teams: 1", BadgeStyle::Primary),
            columns: &["Team Name"],
            rows: vec![TableRow::new(vec![Cell::strong("Team DC")])],
        };
        let html = render_fragment(Resource::Teams, &page).unwrap();
        assert!(html.contains("badge bg-primary"));
        assert!(html.contains("Total Teams: 1"));
    }

    #[test]
    fn test_badge_style_classes() {
        let cell = CellView::from(&Cell::badge("hard", BadgeStyle::Danger));
        assert_eq!(cell.kind, "badge");
        assert_eq!(cell.class, "bg-danger");
    }
}
