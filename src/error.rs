//! Error types for the bakery menu service

use thiserror::Error;

use crate::types::ItemId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Menu item not found")]
    ItemNotFound(ItemId),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }
}
