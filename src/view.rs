use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::catalog::Catalog;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
  Ascending,
  Descending,
}

impl SortDirection {
  pub fn toggled(self) -> Self {
    match self {
      SortDirection::Ascending => SortDirection::Descending,
      SortDirection::Descending => SortDirection::Ascending,
    }
  }
}

/// Case-insensitive substring match on the card name. `needle` must already be lowercased.
fn name_matches(card: &Card, needle: &str) -> bool {
  needle.is_empty() || card.name.to_lowercase().contains(needle)
}

/// Filter by name and, if a sort has been requested, order by name.
///
/// Ties keep catalog order in both directions. With `sort == None` the
/// filtered cards come back in catalog order.
pub fn derive(
  cards: &[Arc<Card>],
  filter_text: &str,
  sort: Option<SortDirection>,
) -> Vec<Arc<Card>> {
  let needle = filter_text.to_lowercase();
  let filtered = cards.iter().filter(|card| name_matches(card, &needle));

  let Some(direction) = sort else {
    return filtered.cloned().collect();
  };

  let mut keyed: Vec<(String, &Arc<Card>)> = filtered
    .map(|card| (card.name.to_lowercase(), card))
    .collect();
  match direction {
    SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
    SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
  }
  keyed.into_iter().map(|(_, card)| Arc::clone(card)).collect()
}

/// Search text and sort state for the browse grid.
///
/// Starts unsorted, so `apply` returns catalog order until the first
/// `toggle_sort`, which sorts ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
  filter_text: String,
  sort: Option<SortDirection>,
}

impl ViewState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn filter_text(&self) -> &str {
    &self.filter_text
  }

  pub fn set_filter_text(&mut self, text: impl Into<String>) {
    self.filter_text = text.into();
  }

  pub fn sort(&self) -> Option<SortDirection> {
    self.sort
  }

  /// First call sorts ascending; each later call flips the direction.
  pub fn toggle_sort(&mut self) -> SortDirection {
    let next = match self.sort {
      None => SortDirection::Ascending,
      Some(direction) => direction.toggled(),
    };
    self.sort = Some(next);
    next
  }

  pub fn apply(&self, catalog: &Catalog) -> Vec<Arc<Card>> {
    derive(catalog.cards(), &self.filter_text, self.sort)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  fn card(name: &str) -> Card {
    Card {
      id: Uuid::new_v4(),
      name: name.to_string(),
      type_line: String::new(),
      oracle_text: String::new(),
      image_uris: None,
      legalities: None,
      prices: None,
    }
  }

  fn catalog(names: &[&str]) -> Catalog {
    Catalog::from_cards(names.iter().map(|name| card(name)).collect())
  }

  fn names(cards: &[Arc<Card>]) -> Vec<&str> {
    cards.iter().map(|card| card.name.as_str()).collect()
  }

  #[test]
  fn empty_filter_keeps_catalog_order() {
    let catalog = catalog(&["Abrade", "zealot", "Brainstorm"]);
    let view = derive(catalog.cards(), "", None);
    assert_eq!(names(&view), vec!["Abrade", "zealot", "Brainstorm"]);
  }

  #[test]
  fn new_view_is_unsorted() {
    let catalog = catalog(&["zealot", "Abrade", "Brainstorm"]);
    let mut state = ViewState::new();
    assert_eq!(state.sort(), None);
    assert_eq!(names(&state.apply(&catalog)), vec!["zealot", "Abrade", "Brainstorm"]);

    assert_eq!(state.toggle_sort(), SortDirection::Ascending);
    assert_eq!(state.sort(), Some(SortDirection::Ascending));
  }

  #[test]
  fn sort_is_case_insensitive_and_toggles() {
    let catalog = catalog(&["Abrade", "zealot", "Brainstorm"]);
    let mut state = ViewState::new();

    assert_eq!(state.toggle_sort(), SortDirection::Ascending);
    assert_eq!(names(&state.apply(&catalog)), vec!["Abrade", "Brainstorm", "zealot"]);

    assert_eq!(state.toggle_sort(), SortDirection::Descending);
    assert_eq!(names(&state.apply(&catalog)), vec!["zealot", "Brainstorm", "Abrade"]);

    assert_eq!(state.toggle_sort(), SortDirection::Ascending);
  }

  #[test]
  fn filter_composes_with_sort() {
    let catalog = catalog(&["Abrade", "zealot", "Brainstorm"]);
    let mut state = ViewState::new();
    state.set_filter_text("RA");
    assert_eq!(names(&state.apply(&catalog)), vec!["Abrade", "Brainstorm"]);

    state.toggle_sort();
    state.toggle_sort();
    assert_eq!(names(&state.apply(&catalog)), vec!["Brainstorm", "Abrade"]);
  }

  #[test]
  fn ties_keep_catalog_order_in_both_directions() {
    let first = card("Opt");
    let second = card("OPT");
    let ids = (first.id, second.id);
    let catalog = Catalog::from_cards(vec![first, card("Brainstorm"), second]);

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
      let view = derive(catalog.cards(), "opt", Some(direction));
      assert_eq!(view.len(), 2);
      assert_eq!((view[0].id, view[1].id), ids);
    }
  }

  #[test]
  fn derive_does_not_touch_catalog() {
    let catalog = catalog(&["zealot", "Abrade"]);
    let _ = derive(catalog.cards(), "", Some(SortDirection::Ascending));
    assert_eq!(names(catalog.cards()), vec!["zealot", "Abrade"]);
  }

  #[test]
  fn no_match_yields_empty_view() {
    let catalog = catalog(&["Abrade", "Brainstorm"]);
    assert!(derive(catalog.cards(), "xyz", None).is_empty());
  }
}
