//! Mounted Views
//!
//! A [`ResourceView`] owned by the reactive runtime, with a signal that
//! mirrors its state for rendering.

use leptos::*;
use octofit::{FetchError, FetchTicket, Resource, ResourceView, Settled, ViewState};
use serde_json::Value;

/// Handle to one page's view, cheap to copy into closures
#[derive(Clone, Copy)]
pub struct ViewHandle {
    view: StoredValue<ResourceView>,
    state: RwSignal<ViewState>,
}

impl ViewHandle {
    /// Mount a view in the current reactive owner
    pub fn mount(resource: Resource, endpoint: impl Into<String>) -> (Self, FetchTicket) {
        let (view, ticket) = ResourceView::mount(resource, endpoint);
        let state = create_rw_signal(view.state().clone());

        (
            Self {
                view: store_value(view),
                state,
            },
            ticket,
        )
    }

    pub fn state(&self) -> RwSignal<ViewState> {
        self.state
    }

    /// Apply a fetch outcome and publish the new state.
    ///
    /// Outcomes for a view that was unmounted, retargeted or already
    /// disposed are discarded and leave the signal untouched.
    pub fn settle(&self, ticket: &FetchTicket, outcome: Result<Value, FetchError>) -> Settled {
        let settled = self.view.try_update_value(|view| {
            let settled = view.settle(ticket, outcome);
            (settled, view.state().clone())
        });

        match settled {
            Some((Settled::Applied, next)) => {
                self.state.set(next);
                Settled::Applied
            }
            _ => Settled::Discarded,
        }
    }

    pub fn unmount(&self) {
        self.view.try_update_value(|view| view.unmount());
    }

    pub fn is_mounted(&self) -> bool {
        self.view
            .try_with_value(|view| view.is_mounted())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "http://localhost:8000/api/teams/";

    #[test]
    fn test_settle_publishes_state() {
        let runtime = create_runtime();

        let (handle, ticket) = ViewHandle::mount(Resource::Teams, URL);
        assert_eq!(handle.state().get_untracked(), ViewState::Loading);

        let outcome = Ok(json!({"results": [{"name": "Team Marvel"}]}));
        assert_eq!(handle.settle(&ticket, outcome), Settled::Applied);
        assert_eq!(handle.state().get_untracked().records().len(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_failure_reaches_signal() {
        let runtime = create_runtime();

        let (handle, ticket) = ViewHandle::mount(Resource::Teams, URL);
        let outcome = Err(FetchError::Http { status: 503 });
        assert_eq!(handle.settle(&ticket, outcome), Settled::Applied);
        assert_eq!(
            handle.state().get_untracked().failure(),
            Some("HTTP error! status: 503")
        );

        runtime.dispose();
    }

    #[test]
    fn test_response_after_unmount_is_discarded() {
        let runtime = create_runtime();

        let (handle, ticket) = ViewHandle::mount(Resource::Teams, URL);
        handle.unmount();
        assert!(!handle.is_mounted());

        let outcome = Ok(json!([{"name": "Team DC"}]));
        assert_eq!(handle.settle(&ticket, outcome), Settled::Discarded);
        assert_eq!(handle.state().get_untracked(), ViewState::Loading);

        runtime.dispose();
    }

    #[test]
    fn test_only_first_outcome_applies() {
        let runtime = create_runtime();

        let (handle, ticket) = ViewHandle::mount(Resource::Teams, URL);
        handle.settle(&ticket, Ok(json!([])));
        let late = handle.settle(&ticket, Err(FetchError::Transport("reset".into())));

        assert_eq!(late, Settled::Discarded);
        assert!(handle.state().get_untracked().records().is_empty());
        assert_eq!(handle.state().get_untracked().failure(), None);

        runtime.dispose();
    }
}
