#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("bson error: {0}")]
    Bson(#[from] bson::ser::Error),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
