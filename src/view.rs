//! Resource View State
//!
//! Each mounted view owns a [`ViewState`] that moves from loading to either
//! ready or failed. Fetches are tracked by [`FetchTicket`]s so a response
//! belonging to a superseded endpoint, or arriving after unmount, is
//! discarded instead of applied.

use serde_json::Value;

use crate::normalize::normalize_collection;
use crate::resource::Resource;
use crate::source::{CollectionSource, FetchError};

/// Coarse phase of a view, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

/// Client-side state of one view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed { message: String },
    Ready { records: Vec<Value> },
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        match self {
            ViewState::Loading => Phase::Loading,
            ViewState::Failed { .. } => Phase::Error,
            ViewState::Ready { .. } => Phase::Ready,
        }
    }

    /// Fetched records; empty unless ready
    pub fn records(&self) -> &[Value] {
        match self {
            ViewState::Ready { records } => records,
            _ => &[],
        }
    }

    /// Failure message, present only when failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            ViewState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Handle for one in-flight request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    url: String,
}

impl FetchTicket {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// What happened to a settled fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Discarded,
}

/// One mounted resource view
#[derive(Debug)]
pub struct ResourceView {
    resource: Resource,
    endpoint: String,
    state: ViewState,
    generation: u64,
    mounted: bool,
}

impl ResourceView {
    /// Mount a view; the returned ticket is the single request to issue
    pub fn mount(resource: Resource, endpoint: impl Into<String>) -> (Self, FetchTicket) {
        let endpoint = endpoint.into();
        tracing::info!(resource = %resource, endpoint = %endpoint, "API endpoint");

        let view = Self {
            resource,
            endpoint: endpoint.clone(),
            state: ViewState::Loading,
            generation: 1,
            mounted: true,
        };
        let ticket = FetchTicket {
            generation: 1,
            url: endpoint,
        };
        (view, ticket)
    }

    /// Point the view at a new endpoint.
    ///
    /// Returns a fresh ticket and resets to loading only when the endpoint
    /// actually changed.
    pub fn retarget(&mut self, endpoint: impl Into<String>) -> Option<FetchTicket> {
        let endpoint = endpoint.into();
        if !self.mounted || endpoint == self.endpoint {
            return None;
        }

        tracing::info!(resource = %self.resource, endpoint = %endpoint, "API endpoint");
        self.generation += 1;
        self.endpoint = endpoint.clone();
        self.state = ViewState::Loading;

        Some(FetchTicket {
            generation: self.generation,
            url: endpoint,
        })
    }

    /// Apply the outcome of a fetch if its ticket is still current
    pub fn settle(&mut self, ticket: &FetchTicket, outcome: Result<Value, FetchError>) -> Settled {
        if !self.mounted || ticket.generation != self.generation {
            tracing::debug!(
                resource = %self.resource,
                url = %ticket.url,
                "Discarding late response"
            );
            return Settled::Discarded;
        }

        self.state = match outcome {
            Ok(payload) => {
                let records = normalize_collection(payload);
                tracing::debug!(resource = %self.resource, count = records.len(), "Fetched data");
                ViewState::Ready { records }
            }
            Err(e) => {
                tracing::error!(resource = %self.resource, error = %e, "Error fetching data");
                ViewState::Failed {
                    message: e.to_string(),
                }
            }
        };
        Settled::Applied
    }

    /// Issue `ticket` against `source` and settle it
    pub async fn run(&mut self, ticket: FetchTicket, source: &dyn CollectionSource) -> Settled {
        let outcome = source.fetch(ticket.url()).await;
        self.settle(&ticket, outcome)
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

/// Mount a view for `endpoint` and drive it to a settled state
pub async fn load(
    resource: Resource,
    endpoint: impl Into<String>,
    source: &dyn CollectionSource,
) -> ResourceView {
    let (mut view, ticket) = ResourceView::mount(resource, endpoint);
    view.run(ticket, source).await;
    view
}
