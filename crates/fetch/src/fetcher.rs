use super::error::Error;
use chanview_api::client::Client;
use chanview_types::{board::Board, catalog::CatalogPage};
use std::{collections::HashMap, fmt::Display, future::Future, sync::Arc};
use tokio::{
    runtime::Handle,
    sync::{mpsc, oneshot},
};
use tracing::{debug, error, info, warn};

/// What a request fetches. At most one request per target is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Boards,
    Catalog,
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Boards => write!(f, "boards"),
            Target::Catalog => write!(f, "catalog"),
        }
    }
}

/// A finished request. `request` is the id the caller passed in, so results
/// of superseded requests can be told apart.
#[derive(Debug)]
pub enum Event {
    Boards {
        request: u64,
        result: Result<Vec<Board>, Error>,
    },
    Catalog {
        request: u64,
        selection: String,
        result: Result<Vec<CatalogPage>, Error>,
    },
}

impl Event {
    pub fn request(&self) -> u64 {
        match self {
            Event::Boards { request, .. } | Event::Catalog { request, .. } => *request,
        }
    }
}

/// Runs fetches as background tasks on a tokio runtime and reports the
/// results over a channel, so the caller's loop never blocks on the network.
///
/// Starting a request for a target kills the one already running for it.
/// Killed requests send nothing. Dropping the fetcher kills everything.
pub struct Fetcher {
    http: Arc<Client>,
    runtime: Handle,
    events_tx: mpsc::Sender<Event>,

    kill_switches: HashMap<Target, oneshot::Sender<()>>,
}

impl Fetcher {
    pub fn new(http: Arc<Client>, events_tx: mpsc::Sender<Event>, runtime: Handle) -> Self {
        Fetcher {
            http,
            runtime,
            events_tx,
            kill_switches: HashMap::new(),
        }
    }

    pub fn fetch_boards(&mut self, request: u64) {
        let http = self.http.clone();
        self.start(
            Target::Boards,
            request,
            async move { http.fetch_boards().await },
            move |result| Event::Boards { request, result },
        );
    }

    pub fn fetch_catalog(&mut self, request: u64, selection: String) {
        let http = self.http.clone();
        let query = selection.clone();
        self.start(
            Target::Catalog,
            request,
            async move { http.fetch_catalog(&query).await },
            move |result| Event::Catalog {
                request,
                selection,
                result,
            },
        );
    }

    /// Kills the running request for `target`, if any.
    pub fn cancel(&mut self, target: Target) {
        if let Some(kill_switch) = self.kill_switches.remove(&target) {
            // The task may already be done, in which case nobody listens.
            if kill_switch.send(()).is_ok() {
                warn!("cancelled in-flight {} request", target);
            }
        }
    }

    fn start<T, F, E>(&mut self, target: Target, request: u64, work: F, into_event: E)
    where
        T: Send + 'static,
        F: Future<Output = Result<T, chanview_api::error::Error>> + Send + 'static,
        E: FnOnce(Result<T, Error>) -> Event + Send + 'static,
    {
        self.cancel(target);
        info!("Starting {} request {}", target, request);
        let (kill_tx, kill_rx) = oneshot::channel();
        self.kill_switches.insert(target, kill_tx);
        let events_tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = tokio::select! {
                result = work => result.map_err(Error::from),
                _ = kill_rx => Err(Error::Cancelled),
            };
            if let Err(Error::Cancelled) = result {
                debug!("{} request {} dropped", target, request);
                return;
            }
            if let Err(e) = &result {
                error!("{} request {} failed: {}", target, request, e);
            }
            if let Err(e) = events_tx.send(into_event(result)).await {
                error!("Error sending event: {:?}", e);
            }
        });
    }
}
