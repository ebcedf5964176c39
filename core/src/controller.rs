//! Presentation-state controller for the product catalog.
//!
//! # Design
//! `ProductController` owns a `ControllerState` inside a `watch` channel.
//! Views read snapshots or subscribe for change notifications; they never
//! write. The three intents (`load_products`, `load_product`, `clear_error`)
//! are the only writers, and every write goes through `send_modify`, so
//! subscribers always observe whole states.
//!
//! Each load spawns a task and returns its `JoinHandle`. The task holds only
//! a `Weak` handle to the state, so a fetch that resolves after the
//! controller is dropped is discarded instead of written, and a task that is
//! aborted before finishing still lowers the loading flag.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::ApiError;
use crate::http::Transport;
use crate::source::ProductSource;
use crate::types::Product;

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Observable state of one catalog session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    /// Latest successfully fetched catalog, in server order.
    pub products: Vec<Product>,
    pub selected_product: Option<Product>,
    /// True while any fetch started by the controller is outstanding.
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// An error is waiting to be acknowledged with `clear_error`.
    pub showing_error: bool,
    in_flight: usize,
}

/// What a product list view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// First load still running, nothing to show yet.
    Loading,
    Empty,
    Ready,
}

impl ControllerState {
    pub fn list_phase(&self) -> ListPhase {
        match (self.products.is_empty(), self.is_loading) {
            (true, true) => ListPhase::Loading,
            (true, false) => ListPhase::Empty,
            (false, _) => ListPhase::Ready,
        }
    }

    /// Text for the error notification, if one is pending.
    ///
    /// A new load clears `error_message` without lowering `showing_error`, so
    /// a pending notification can outlive its text.
    pub fn alert_message(&self) -> Option<&str> {
        if !self.showing_error {
            return None;
        }
        Some(self.error_message.as_deref().unwrap_or(UNKNOWN_ERROR))
    }

    fn begin_fetch(&mut self) {
        self.in_flight += 1;
        self.is_loading = true;
        self.error_message = None;
    }

    fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.is_loading = self.in_flight > 0;
    }

    fn record_error(&mut self, err: &ApiError) {
        self.error_message = Some(err.to_string());
        self.showing_error = true;
    }
}

/// How completions of overlapping loads of the same kind are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadOrdering {
    /// Every completion is applied as it resolves; the last one wins.
    #[default]
    LastCompleted,
    /// Only the most recently started load of each kind may write its
    /// result. Older completions are dropped.
    LatestIssued,
}

impl LoadOrdering {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadOrdering::LastCompleted => "last-completed",
            LoadOrdering::LatestIssued => "latest-issued",
        }
    }
}

impl fmt::Display for LoadOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-completed" => Ok(LoadOrdering::LastCompleted),
            "latest-issued" => Ok(LoadOrdering::LatestIssued),
            other => Err(format!(
                "expected 'last-completed' or 'latest-issued', got '{other}'"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Flow {
    List,
    Detail,
}

struct Shared {
    state: watch::Sender<ControllerState>,
    list_seq: AtomicU64,
    detail_seq: AtomicU64,
}

impl Shared {
    fn counter(&self, flow: Flow) -> &AtomicU64 {
        match flow {
            Flow::List => &self.list_seq,
            Flow::Detail => &self.detail_seq,
        }
    }

    fn issue(&self, flow: Flow) -> u64 {
        self.counter(flow).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, flow: Flow, ticket: u64) -> bool {
        self.counter(flow).load(Ordering::SeqCst) == ticket
    }
}

/// Mediates view intents and the remote product source.
pub struct ProductController<T> {
    source: Arc<ProductSource<T>>,
    shared: Arc<Shared>,
    ordering: LoadOrdering,
}

impl<T> Clone for ProductController<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            shared: Arc::clone(&self.shared),
            ordering: self.ordering,
        }
    }
}

impl<T: Transport + 'static> ProductController<T> {
    pub fn new(source: ProductSource<T>) -> Self {
        Self::with_ordering(Arc::new(source), LoadOrdering::default())
    }

    pub fn with_ordering(source: Arc<ProductSource<T>>, ordering: LoadOrdering) -> Self {
        let (state, _) = watch::channel(ControllerState::default());
        Self {
            source,
            shared: Arc::new(Shared {
                state,
                list_seq: AtomicU64::new(0),
                detail_seq: AtomicU64::new(0),
            }),
            ordering,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ControllerState {
        self.shared.state.borrow().clone()
    }

    /// Receiver that is marked changed after every state write.
    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.shared.state.subscribe()
    }

    /// Start fetching the full catalog.
    ///
    /// The loading flag is raised and the error message cleared before this
    /// returns. Calls are not de-duplicated. Aborting the returned handle
    /// lowers the loading flag without touching anything else.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load_products(&self) -> JoinHandle<()> {
        let fetch = self.begin(Flow::List);
        let source = Arc::clone(&self.source);

        tokio::spawn(async move {
            let result = source.list_products().await;
            fetch.complete(result, |state, products| state.products = products);
        })
    }

    /// Start fetching one product into `selected_product`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load_product(&self, id: i64) -> JoinHandle<()> {
        let fetch = self.begin(Flow::Detail);
        let source = Arc::clone(&self.source);

        tokio::spawn(async move {
            let result = source.get_product(id).await;
            fetch.complete(result, |state, product| {
                state.selected_product = Some(product);
            });
        })
    }

    /// Load the catalog unless one is already present.
    pub fn load_products_if_empty(&self) -> Option<JoinHandle<()>> {
        let empty = self.shared.state.borrow().products.is_empty();
        empty.then(|| self.load_products())
    }

    /// Acknowledge the pending error. Does not retry anything.
    pub fn clear_error(&self) {
        self.shared.state.send_if_modified(|state| {
            if state.error_message.is_none() && !state.showing_error {
                return false;
            }
            state.error_message = None;
            state.showing_error = false;
            true
        });
    }

    fn begin(&self, flow: Flow) -> InFlight {
        let ticket = self.shared.issue(flow);
        self.shared.state.send_modify(ControllerState::begin_fetch);
        InFlight {
            shared: Arc::downgrade(&self.shared),
            flow,
            ticket,
            ordering: self.ordering,
            pending: true,
        }
    }
}

/// One outstanding fetch. Lowers the loading counter exactly once, either
/// in `complete` or when dropped unfinished (task aborted or never polled).
struct InFlight {
    shared: Weak<Shared>,
    flow: Flow,
    ticket: u64,
    ordering: LoadOrdering,
    pending: bool,
}

impl InFlight {
    fn complete<V>(
        mut self,
        result: Result<V, ApiError>,
        store: impl FnOnce(&mut ControllerState, V),
    ) {
        self.pending = false;
        let Some(shared) = self.shared.upgrade() else {
            debug!(flow = ?self.flow, "controller dropped, discarding fetch result");
            return;
        };

        let current = self.ordering == LoadOrdering::LastCompleted
            || shared.is_latest(self.flow, self.ticket);
        if !current {
            debug!(flow = ?self.flow, ticket = self.ticket, "discarding superseded fetch result");
        }

        shared.state.send_modify(|state| {
            state.finish_fetch();
            if !current {
                return;
            }
            match result {
                Ok(value) => store(state, value),
                Err(err) => state.record_error(&err),
            }
        });
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.pending {
            return;
        }
        if let Some(shared) = self.shared.upgrade() {
            debug!(flow = ?self.flow, ticket = self.ticket, "fetch cancelled");
            shared.state.send_modify(ControllerState::finish_fetch);
        }
    }
}
