//! Bounded position over a fixed list of cards.
//!
//! The list is a snapshot taken when the detail view opens; later changes to
//! the browse view do not reach an open cursor. Moves never wrap. Each move
//! that changes the index is reported to subscribers as a [`NavigationEvent`].

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::card::Card;
use crate::error::CatalogError;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
  Forward,
  Backward,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEvent {
  pub from: usize,
  pub to: usize,
  pub direction: NavigationDirection,
  pub card_id: Uuid,
}

pub type NavigationListener = Box<dyn FnMut(&NavigationEvent) + Send>;

pub struct Cursor {
  cards: Vec<Arc<Card>>,
  index: usize,
  listeners: Vec<NavigationListener>,
}

impl Cursor {
  pub fn new(cards: Vec<Arc<Card>>, index: usize) -> Result<Self, CatalogError> {
    if cards.is_empty() {
      return Err(CatalogError::EmptySelection);
    }
    if index >= cards.len() {
      return Err(CatalogError::IndexOutOfRange {
        index,
        len: cards.len(),
      });
    }
    Ok(Self {
      cards,
      index,
      listeners: Vec::new(),
    })
  }

  pub fn current(&self) -> &Arc<Card> {
    &self.cards[self.index]
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn has_next(&self) -> bool {
    self.index + 1 < self.cards.len()
  }

  pub fn has_previous(&self) -> bool {
    self.index > 0
  }

  pub fn subscribe<F>(&mut self, listener: F)
  where
    F: FnMut(&NavigationEvent) + Send + 'static,
  {
    self.listeners.push(Box::new(listener));
  }

  pub fn advance(&mut self) -> bool {
    if !self.has_next() {
      return false;
    }
    self.move_to(self.index + 1, NavigationDirection::Forward);
    true
  }

  pub fn retreat(&mut self) -> bool {
    if !self.has_previous() {
      return false;
    }
    self.move_to(self.index - 1, NavigationDirection::Backward);
    true
  }

  fn move_to(&mut self, to: usize, direction: NavigationDirection) {
    let event = NavigationEvent {
      from: self.index,
      to,
      direction,
      card_id: self.cards[to].id,
    };
    self.index = to;
    for listener in self.listeners.iter_mut() {
      listener(&event);
    }
  }
}

impl fmt::Debug for Cursor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Cursor")
      .field("index", &self.index)
      .field("len", &self.cards.len())
      .field("listeners", &self.listeners.len())
      .finish()
  }
}
