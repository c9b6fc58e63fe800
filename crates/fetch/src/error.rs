#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] chanview_api::error::Error),

    #[error("Request cancelled")]
    Cancelled,
}
