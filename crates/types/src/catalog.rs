use serde::{Deserialize, Serialize};

use super::thread::Thread;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub page: Option<i32>,
    pub threads: Vec<Thread>,
}

/// All threads of a catalog, page boundaries dropped, upstream order kept.
pub fn threads(pages: &[CatalogPage]) -> impl Iterator<Item = &Thread> {
    pages.iter().flat_map(|page| page.threads.iter())
}
