use std::collections::HashSet;

use uuid::Uuid;

use crate::card::{Card, CardList};
use crate::error::CatalogError;

/// Parse a snapshot document. Later cards that repeat an earlier id are dropped.
pub fn decode(bytes: &[u8]) -> Result<CardList, CatalogError> {
  let mut list: CardList = serde_json::from_slice(bytes)?;
  let received = list.data.len();

  let dropped = dedupe_by_id(&mut list.data);
  if dropped > 0 {
    log::warn!(
      "Dropped {} card(s) with duplicate ids from snapshot '{}'",
      dropped,
      list.object
    );
  }

  if list.total_cards != received as i64 {
    log::warn!(
      "Snapshot declares {} cards but carries {}",
      list.total_cards,
      received
    );
  }

  Ok(list)
}

fn dedupe_by_id(cards: &mut Vec<Card>) -> usize {
  let before = cards.len();
  let mut seen: HashSet<Uuid> = HashSet::with_capacity(before);
  cards.retain(|card| seen.insert(card.id));
  before - cards.len()
}
