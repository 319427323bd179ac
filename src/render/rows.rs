//! Per-Resource Row Builders
//!
//! Field tables for each resource, kept as data, and the functions that
//! turn one record into a table row or card.

use serde_json::Value;

use super::badges::{rank_badge, BadgeStyle, DifficultyCategory};
use super::date::format_locale_date;
use super::{Badge, Cell, TableRow, WorkoutCard};
use crate::fields::{display, Accessor, FieldRule};

// Activities

pub const ACTIVITY_COLUMNS: &[&str] = &["Activity Type", "User", "Duration (min)", "Calories", "Date"];

const ACTIVITY_TYPE: FieldRule =
    FieldRule::new(&[Accessor::Truthy("name"), Accessor::Truthy("activity_type")], "");
const ACTIVITY_USER: FieldRule = FieldRule::new(
    &[
        Accessor::Truthy("user_name"),
        Accessor::Truthy("user"),
        Accessor::Truthy("user_id"),
    ],
    "N/A",
);
const ACTIVITY_DURATION: FieldRule = FieldRule::new(&[Accessor::Present("duration")], "");
const ACTIVITY_CALORIES: FieldRule = FieldRule::new(
    &[Accessor::Present("calories_burned"), Accessor::Present("calories")],
    "",
);
const ACTIVITY_DATE: FieldRule = FieldRule::new(&[Accessor::Present("date")], "");

pub fn activity_row(record: &Value) -> TableRow {
    TableRow::new(vec![
        Cell::strong(ACTIVITY_TYPE.text(record)),
        Cell::plain(ACTIVITY_USER.text(record)),
        Cell::badge(ACTIVITY_DURATION.text(record), BadgeStyle::Info),
        Cell::badge(ACTIVITY_CALORIES.text(record), BadgeStyle::Warning),
        Cell::plain(format_locale_date(ACTIVITY_DATE.resolve(record).as_ref())),
    ])
}

// Leaderboard

pub const LEADERBOARD_COLUMNS: &[&str] = &["Rank", "User", "Team", "Total Points", "Activities"];

const ENTRY_USER: FieldRule =
    FieldRule::new(&[Accessor::Truthy("user_name"), Accessor::Truthy("user")], "N/A");
const ENTRY_TEAM: FieldRule = FieldRule::new(
    &[
        Accessor::Truthy("team_name"),
        Accessor::Truthy("team"),
        Accessor::Truthy("team_id"),
    ],
    "No Team",
);
const ENTRY_POINTS: FieldRule =
    FieldRule::new(&[Accessor::Truthy("total_points"), Accessor::Truthy("points")], "0");
const ENTRY_ACTIVITIES: FieldRule = FieldRule::new(
    &[Accessor::Truthy("activity_count"), Accessor::Truthy("activities")],
    "0",
);

/// Row for the entry at zero-based `index`; the top three are highlighted
pub fn leaderboard_row(index: usize, record: &Value) -> TableRow {
    let mut row = TableRow::new(vec![
        Cell::heading(rank_badge(index)),
        Cell::strong(ENTRY_USER.text(record)),
        Cell::badge(ENTRY_TEAM.text(record), BadgeStyle::Secondary),
        Cell::badge(format!("{} pts", ENTRY_POINTS.text(record)), BadgeStyle::Success),
        Cell::badge(ENTRY_ACTIVITIES.text(record), BadgeStyle::Info),
    ]);
    row.highlighted = index < 3;
    row
}

// Teams

pub const TEAM_COLUMNS: &[&str] = &["Team Name", "Description", "Members", "Created"];

const TEAM_NAME: FieldRule = FieldRule::new(&[Accessor::Present("name")], "");
const TEAM_DESCRIPTION: FieldRule =
    FieldRule::new(&[Accessor::Truthy("description")], "No description available");
const TEAM_MEMBERS: FieldRule = FieldRule::new(
    &[Accessor::Truthy("member_count"), Accessor::Length("members")],
    "0",
);
const TEAM_CREATED: FieldRule = FieldRule::new(&[Accessor::Present("created_at")], "");

pub fn team_row(record: &Value) -> TableRow {
    TableRow::new(vec![
        Cell::strong(TEAM_NAME.text(record)),
        Cell::plain(TEAM_DESCRIPTION.text(record)),
        Cell::badge(format!("{} members", TEAM_MEMBERS.text(record)), BadgeStyle::Info),
        Cell::plain(format_locale_date(TEAM_CREATED.resolve(record).as_ref())),
    ])
}

// Users

pub const USER_COLUMNS: &[&str] = &["Name", "Username", "Email", "Team", "Joined"];

const USER_NAME: FieldRule = FieldRule::new(
    &[
        Accessor::Truthy("name"),
        Accessor::FullName("first_name", "last_name"),
        Accessor::Truthy("username"),
    ],
    "N/A",
);
const USER_USERNAME: FieldRule = FieldRule::new(&[Accessor::Truthy("username")], "N/A");
const USER_EMAIL: FieldRule = FieldRule::new(&[Accessor::Truthy("email")], "N/A");
const USER_TEAM: FieldRule =
    FieldRule::new(&[Accessor::Truthy("team_name"), Accessor::Truthy("team_id")], "");
const USER_JOINED: FieldRule = FieldRule::new(
    &[Accessor::Truthy("date_joined"), Accessor::Truthy("created_at")],
    "",
);

pub fn user_row(record: &Value) -> TableRow {
    let team = match USER_TEAM.resolve(record) {
        Some(team) => Cell::badge(display(&team), BadgeStyle::Secondary),
        None => Cell::muted("No team"),
    };

    TableRow::new(vec![
        Cell::strong(USER_NAME.text(record)),
        Cell::badge(USER_USERNAME.text(record), BadgeStyle::Info),
        Cell::plain(USER_EMAIL.text(record)),
        team,
        Cell::plain(format_locale_date(USER_JOINED.resolve(record).as_ref())),
    ])
}

// Workouts

const WORKOUT_TITLE: FieldRule =
    FieldRule::new(&[Accessor::Truthy("name"), Accessor::Truthy("title")], "");
const WORKOUT_DIFFICULTY: FieldRule = FieldRule::new(&[Accessor::Truthy("difficulty")], "");
const WORKOUT_CATEGORY: FieldRule = FieldRule::new(&[Accessor::Truthy("category")], "");
const WORKOUT_DESCRIPTION: FieldRule =
    FieldRule::new(&[Accessor::Truthy("description")], "No description available");
const WORKOUT_DURATION: FieldRule = FieldRule::new(&[Accessor::Truthy("duration")], "");

pub fn workout_card(record: &Value) -> WorkoutCard {
    // An absent difficulty suppresses the badge rather than showing a placeholder
    let difficulty = WORKOUT_DIFFICULTY.resolve(record).map(|value| {
        let text = display(&value);
        let style = DifficultyCategory::of(&text).badge_style();
        Badge::new(text, style)
    });

    let category = WORKOUT_CATEGORY
        .resolve(record)
        .map(|value| Badge::new(display(&value), BadgeStyle::Secondary));

    let duration = WORKOUT_DURATION
        .resolve(record)
        .map(|value| format!("{} minutes", display(&value)));

    WorkoutCard {
        title: WORKOUT_TITLE.text(record),
        difficulty,
        category,
        description: WORKOUT_DESCRIPTION.text(record),
        duration,
    }
}
