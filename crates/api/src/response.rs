use super::endpoint::Endpoint;
use chanview_types::{
    board::{Board, BoardsResponse},
    catalog::CatalogPage,
};

#[derive(Debug, Clone)]
pub enum ClientResponse {
    Boards(Vec<Board>),
    Catalog(Vec<CatalogPage>),
}

impl ClientResponse {
    pub fn parse(endpoint: &Endpoint, body: &[u8]) -> Result<Self, serde_json::Error> {
        match endpoint {
            Endpoint::Boards => Ok(ClientResponse::Boards(
                serde_json::from_slice::<BoardsResponse>(body)?.boards,
            )),
            Endpoint::Catalog(_) => Ok(ClientResponse::Catalog(serde_json::from_slice(body)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_endpoint() {
        let boards = br#"{"boards":[{"board":"g","title":"Technology","meta_description":"x"}]}"#;
        assert!(matches!(
            ClientResponse::parse(&Endpoint::Boards, boards).unwrap(),
            ClientResponse::Boards(ref b) if b.len() == 1
        ));
        let catalog = br#"[{"threads":[]}]"#;
        assert!(matches!(
            ClientResponse::parse(&Endpoint::Catalog("g".to_string()), catalog).unwrap(),
            ClientResponse::Catalog(ref pages) if pages.len() == 1
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let boards = br#"{"boards":[]}"#;
        assert!(ClientResponse::parse(&Endpoint::Catalog("g".to_string()), boards).is_err());
        assert!(ClientResponse::parse(&Endpoint::Boards, b"<html>").is_err());
    }
}
