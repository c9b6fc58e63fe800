use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A board as listed by `boards.json`.
/// Only the fields the browser shows are kept, the rest of the upstream
/// object is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "board")]
    pub code: String,
    pub title: String,
    #[serde(rename = "meta_description", default)]
    pub description: String,
}

impl Board {
    pub fn new(code: &str, title: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Renders the board the way it appears in the boards panel: `g - Technology`.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.title)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardsResponse {
    pub boards: Vec<Board>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tracing_test::traced_test]
    #[test]
    fn test_decode_boards_keeps_order() {
        let body = r#"{"boards":[
            {"board":"a","title":"Anime & Manga","ws_board":1,"per_page":15,"meta_description":"anime"},
            {"board":"g","title":"Technology","cooldowns":{"threads":600},"meta_description":"tech"},
            {"board":"3","title":"3DCG","meta_description":""}
        ]}"#;
        let resp: BoardsResponse = serde_json::from_str(body).unwrap();
        let codes: Vec<_> = resp.boards.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "g", "3"]);
        assert_eq!(resp.boards[0], Board::new("a", "Anime & Manga", "anime"));
        assert_eq!(resp.boards[1].description, "tech");
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let board: Board = serde_json::from_str(r#"{"board":"g","title":"Technology"}"#).unwrap();
        assert_eq!(board.description, "");
    }

    #[test]
    fn test_display() {
        let board = Board::new("g", "Technology", "x");
        assert_eq!(board.to_string(), "g - Technology");
    }
}
