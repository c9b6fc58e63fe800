use chanview_types::{board::Board, catalog::CatalogPage, utils::board_code};
use tracing::{debug, error, info};

use super::{
    endpoint::{scheme, Endpoint},
    error::Error,
    response::ClientResponse,
};
use std::time::Duration;

/// Configuration for the client.
/// use_https: Whether to use HTTPS for requests. (default: true)
/// base_url: Overrides the API host, e.g. for a mirror. (default: derived from use_https)
/// timeout_secs: Per request timeout. (default: 30)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub use_https: Option<bool>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    const DEFAULT_USE_HTTPS: bool = true;
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    pub fn new(use_https: Option<bool>, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        Config {
            use_https,
            base_url,
            timeout_secs,
        }
    }

    pub fn use_https(&self) -> bool {
        self.use_https.unwrap_or(Self::DEFAULT_USE_HTTPS)
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("{}://{}", scheme(self.use_https()), Endpoint::HOST))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS))
    }
}

/// A client for the read-only 4chan JSON API.
/// Every call issues exactly one request; nothing is cached, so fetching the
/// same catalog twice hits the network twice.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Option<Config>) -> Result<Self, Error> {
        let cfg = cfg.unwrap_or_default();
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .user_agent(concat!("chanview/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { cfg, http })
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<ClientResponse, Error> {
        let url = endpoint.url(&self.cfg.base_url());
        debug!("Sending request to {}", url);
        let resp = self.http.get(&url).send().await?;
        self.handle_response(endpoint, resp).await
    }

    pub async fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<ClientResponse, Error> {
        match resp.status() {
            reqwest::StatusCode::OK => {
                debug!("request: {} status: OK", endpoint);
                let body = resp.bytes().await?;
                ClientResponse::parse(endpoint, &body).map_err(|e| {
                    error!("request {} returned malformed body: {}", endpoint, e);
                    Error::from(e)
                })
            }
            status => {
                error!("request {} status: {}", endpoint, status);
                Err(Error::StatusCode(status.as_u16()))
            }
        }
    }

    /// Fetches the board list in upstream order.
    pub async fn fetch_boards(&self) -> Result<Vec<Board>, Error> {
        match self.get(&Endpoint::Boards).await? {
            ClientResponse::Boards(boards) => {
                info!("fetched {} boards", boards.len());
                Ok(boards)
            }
            _ => Err(Error::InvalidResponse),
        }
    }

    /// Fetches the catalog of the board named by `selection`, a boards panel
    /// line like `g - Technology`. Only the leading board code is used.
    pub async fn fetch_catalog(&self, selection: &str) -> Result<Vec<CatalogPage>, Error> {
        let code = board_code(selection);
        if code.is_empty() {
            error!("no board code in selection {:?}", selection);
            return Err(Error::InvalidSelection(selection.to_string()));
        }
        match self.get(&Endpoint::Catalog(code.to_string())).await? {
            ClientResponse::Catalog(pages) => {
                info!("fetched catalog /{}/: {} pages", code, pages.len());
                Ok(pages)
            }
            _ => Err(Error::InvalidResponse),
        }
    }
}
