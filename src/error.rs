use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Cannot open card detail on an empty selection")]
  EmptySelection,

  #[error("Card index {index} is out of range for a list of {len}")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("No card detail is open")]
  DetailNotOpen,
}
