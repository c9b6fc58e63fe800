use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Boards,
    Catalog(String),
}

impl Endpoint {
    pub const HOST: &'static str = "a.4cdn.org";
    pub const MEDIA_HOST: &'static str = "i.4cdn.org";

    pub fn path(&self) -> String {
        match self {
            Self::Boards => "/boards.json".to_string(),
            Self::Catalog(board) => format!("/{}/catalog.json", board),
        }
    }

    /// Full URL of the endpoint under `base`, e.g. `https://a.4cdn.org`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Where an attachment is served from. Files are named after their upload
    /// timestamp, not their original name.
    pub fn media_url(https: bool, board: &str, tim: i64, ext: &str) -> String {
        format!(
            "{}://{}/{}/{}{}",
            scheme(https),
            Self::MEDIA_HOST,
            board,
            tim,
            ext
        )
    }
}

pub(crate) fn scheme(https: bool) -> &'static str {
    if https {
        "https"
    } else {
        "http"
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::HOST, self.path())
    }
}
