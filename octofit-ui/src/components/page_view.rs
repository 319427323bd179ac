//! Page Rendering
//!
//! Draws a [`Page`] with the same markup the server-rendered fragments use.

use leptos::*;

use octofit::render::{Badge, Cell, CellStyle, TableRow, WorkoutCard};
use octofit::{Page, Resource};

use super::Loading;

/// One view's content in its current phase
#[component]
pub fn PageView(resource: Resource, page: Page) -> impl IntoView {
    match page {
        Page::Loading => view! { <Loading /> }.into_view(),
        Page::Failed { heading, message } => view! {
            <div class="alert alert-danger" role="alert">
                <h4 class="alert-heading">{heading}</h4>
                <p>{message}</p>
            </div>
        }
        .into_view(),
        Page::Empty { icon, title, hint } => view! {
            <PageHeader resource=resource count=None />
            <div class="empty-state">
                <div class="empty-state-icon">{icon}</div>
                <h3>{title}</h3>
                <p>{hint}</p>
            </div>
        }
        .into_view(),
        Page::Table {
            count,
            columns,
            rows,
        } => view! {
            <PageHeader resource=resource count={Some(count)} />
            <div class="table-responsive">
                <table class="table table-hover table-striped">
                    <thead>
                        <tr>
                            {columns.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(table_row).collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_view(),
        Page::Cards { count, cards } => view! {
            <PageHeader resource=resource count={Some(count)} />
            <div class="row">
                {cards.into_iter().map(workout_card).collect_view()}
            </div>
        }
        .into_view(),
    }
}

/// Heading, subtitle and the optional count badge
#[component]
fn PageHeader(resource: Resource, count: Option<Badge>) -> impl IntoView {
    view! {
        <div class="page-header">
            <h2>
                <i class={format!("bi {}", resource.header_icon())}></i>
                " "
                {resource.heading()}
            </h2>
            <p class="mb-0">{resource.subtitle()}</p>
        </div>
        {count.map(|badge| view! {
            <div class="mb-3">
                <span class={badge_class(&badge)}>{badge.text}</span>
            </div>
        })}
    }
}

fn badge_class(badge: &Badge) -> String {
    format!("badge {}", badge.style.css_class())
}

fn table_row(row: TableRow) -> impl IntoView {
    let class = if row.highlighted { "table-active" } else { "" };
    view! {
        <tr class=class>
            {row.cells.into_iter().map(|cell| view! { <td>{cell_content(cell)}</td> }).collect_view()}
        </tr>
    }
}

fn cell_content(cell: Cell) -> View {
    match cell.style {
        CellStyle::Plain => cell.text.into_view(),
        CellStyle::Strong => view! { <strong>{cell.text}</strong> }.into_view(),
        CellStyle::Heading => view! { <h4 class="mb-0">{cell.text}</h4> }.into_view(),
        CellStyle::Muted => view! { <span class="text-muted">{cell.text}</span> }.into_view(),
        CellStyle::Badge(style) => view! {
            <span class={format!("badge {}", style.css_class())}>{cell.text}</span>
        }
        .into_view(),
    }
}

fn workout_card(card: WorkoutCard) -> impl IntoView {
    let badges = [card.difficulty, card.category]
        .into_iter()
        .flatten()
        .map(|badge| {
            let class = format!("{} me-2", badge_class(&badge));
            view! { <span class=class>{badge.text}</span> }
        })
        .collect_view();

    view! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div class="card h-100">
                <div class="card-body">
                    <h5 class="card-title">{card.title}</h5>
                    <div class="mb-3">{badges}</div>
                    <p class="card-text">{card.description}</p>
                    {card.duration.map(|duration| view! {
                        <div class="mt-2">
                            <strong>"Duration:"</strong>
                            " "
                            <span class="badge bg-info">{duration}</span>
                        </div>
                    })}
                </div>
                <div class="card-footer bg-transparent">
                    <button class="btn btn-primary btn-sm w-100">"Start Workout"</button>
                </div>
            </div>
        </div>
    }
}
