use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
  Prices,
  Legalities,
}

/// Which detail panel is expanded. At most one is open at a time.
///
/// Clones share state, so a clone can be handed to a cursor listener while
/// the detail screen keeps reading the original.
#[derive(Clone, Debug, Default)]
pub struct DetailPanels {
  expanded: Arc<Mutex<Option<Panel>>>,
}

impl DetailPanels {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn expanded(&self) -> Option<Panel> {
    *self.expanded.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn is_expanded(&self, panel: Panel) -> bool {
    self.expanded() == Some(panel)
  }

  /// Open `panel`, or close it if it is already open. Returns the new state.
  pub fn toggle(&self, panel: Panel) -> Option<Panel> {
    let mut expanded = self.expanded.lock().unwrap_or_else(PoisonError::into_inner);
    *expanded = if *expanded == Some(panel) { None } else { Some(panel) };
    *expanded
  }

  pub fn reset(&self) {
    *self.expanded.lock().unwrap_or_else(PoisonError::into_inner) = None;
  }

  /// Collapse everything whenever `cursor` moves to another card.
  pub fn follow(&self, cursor: &mut Cursor) {
    let panels = self.clone();
    cursor.subscribe(move |_| panels.reset());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::card::Card;
  use uuid::Uuid;

  #[test]
  fn toggle_opens_one_panel_at_a_time() {
    let panels = DetailPanels::new();
    assert_eq!(panels.expanded(), None);
    assert_eq!(panels.toggle(Panel::Prices), Some(Panel::Prices));
    assert_eq!(panels.toggle(Panel::Legalities), Some(Panel::Legalities));
    assert!(!panels.is_expanded(Panel::Prices));
    assert_eq!(panels.toggle(Panel::Legalities), None);
  }

  #[test]
  fn navigation_collapses_panels() {
    let cards = (0..2)
      .map(|n| {
        Arc::new(Card {
          id: Uuid::new_v4(),
          name: format!("Card {n}"),
          type_line: String::new(),
          oracle_text: String::new(),
          image_uris: None,
          legalities: None,
          prices: None,
        })
      })
      .collect();
    let mut cursor = Cursor::new(cards, 0).unwrap();
    let panels = DetailPanels::new();
    panels.follow(&mut cursor);

    panels.toggle(Panel::Prices);
    assert!(!cursor.retreat());
    assert_eq!(panels.expanded(), Some(Panel::Prices));

    assert!(cursor.advance());
    assert_eq!(panels.expanded(), None);
  }
}
