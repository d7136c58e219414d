//! Session catalog: decoded once, shared read-only afterwards.

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::card::Card;
use crate::decode::decode;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
  pub object: Option<String>,
  pub declared_total: Option<i64>,
  pub has_more: bool,
  pub fingerprint: Option<String>,
  pub loaded_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct Catalog {
  cards: Vec<Arc<Card>>,
  info: SnapshotInfo,
}

impl Catalog {
  pub fn empty() -> Self {
    Self::from_cards(Vec::new())
  }

  pub fn from_cards(cards: Vec<Card>) -> Self {
    Self {
      cards: cards.into_iter().map(Arc::new).collect(),
      info: SnapshotInfo {
        object: None,
        declared_total: None,
        has_more: false,
        fingerprint: None,
        loaded_at: Utc::now(),
      },
    }
  }

  /// Decode a snapshot buffer. A document that fails to decode yields an empty catalog.
  pub fn from_bytes(bytes: &[u8]) -> Self {
    let fingerprint = fingerprint(bytes);
    let mut catalog = match decode(bytes) {
      Ok(list) => {
        let mut catalog = Self::from_cards(list.data);
        catalog.info.object = Some(list.object);
        catalog.info.declared_total = Some(list.total_cards);
        catalog.info.has_more = list.has_more;
        catalog
      }
      Err(error) => {
        log::error!("Error decoding card snapshot: {}", error);
        Self::empty()
      }
    };
    catalog.info.fingerprint = Some(fingerprint);

    log::info!(
      "Loaded {} card(s) from snapshot {}",
      catalog.len(),
      catalog.info.fingerprint.as_deref().unwrap_or_default()
    );
    catalog
  }

  /// Read and decode a bundled snapshot file. An unreadable file yields an empty catalog.
  pub fn load(path: &Path) -> Self {
    match fs::read(path) {
      Ok(bytes) => Self::from_bytes(&bytes),
      Err(error) => {
        log::error!("Error loading card snapshot {}: {}", path.display(), error);
        Self::empty()
      }
    }
  }

  pub fn cards(&self) -> &[Arc<Card>] {
    &self.cards
  }

  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

  pub fn find(&self, id: Uuid) -> Option<&Arc<Card>> {
    self.cards.iter().find(|card| card.id == id)
  }

  pub fn info(&self) -> &SnapshotInfo {
    &self.info
  }
}

fn fingerprint(bytes: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(bytes);
  format!("{:x}", hasher.finalize())
}

/// Holds the session catalog. The loader runs at most once; every later caller
/// gets the same handle.
#[derive(Debug, Default)]
pub struct CatalogStore {
  cell: OnceLock<Arc<Catalog>>,
}

impl CatalogStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get_or_load<F>(&self, loader: F) -> Arc<Catalog>
  where
    F: FnOnce() -> Catalog,
  {
    Arc::clone(self.cell.get_or_init(|| Arc::new(loader())))
  }

  /// The loaded catalog, or `None` before the first `get_or_load`.
  pub fn get(&self) -> Option<Arc<Catalog>> {
    self.cell.get().map(Arc::clone)
  }
}
