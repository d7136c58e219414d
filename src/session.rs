//! Browse-screen state over a loaded catalog, as consumed by the webview.

use std::sync::Arc;

use serde::Serialize;

use crate::card::{Card, CardDetail};
use crate::catalog::Catalog;
use crate::cursor::{Cursor, NavigationEvent};
use crate::error::CatalogError;
use crate::gesture::SwipeGesture;
use crate::panels::{DetailPanels, Panel};
use crate::view::{SortDirection, ViewState};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailSnapshot {
  pub index: usize,
  pub len: usize,
  pub has_next: bool,
  pub has_previous: bool,
  pub expanded: Option<Panel>,
  pub card: CardDetail,
}

/// One open detail view: a cursor over the list it was opened with, plus
/// the panel state that collapses whenever the cursor moves.
#[derive(Debug)]
pub struct DetailSession {
  cursor: Cursor,
  panels: DetailPanels,
  swipe: SwipeGesture,
}

impl DetailSession {
  pub fn new(
    cards: Vec<Arc<Card>>,
    index: usize,
    swipe: SwipeGesture,
  ) -> Result<Self, CatalogError> {
    let mut cursor = Cursor::new(cards, index)?;
    let panels = DetailPanels::new();
    panels.follow(&mut cursor);
    Ok(Self {
      cursor,
      panels,
      swipe,
    })
  }

  pub fn current(&self) -> &Arc<Card> {
    self.cursor.current()
  }

  pub fn cursor(&self) -> &Cursor {
    &self.cursor
  }

  pub fn panels(&self) -> &DetailPanels {
    &self.panels
  }

  pub fn subscribe<F>(&mut self, listener: F)
  where
    F: FnMut(&NavigationEvent) + Send + 'static,
  {
    self.cursor.subscribe(listener);
  }

  pub fn advance(&mut self) -> bool {
    self.cursor.advance()
  }

  pub fn retreat(&mut self) -> bool {
    self.cursor.retreat()
  }

  pub fn swipe(&mut self, dx: f64) -> bool {
    self.swipe.apply(&mut self.cursor, dx)
  }

  pub fn toggle_panel(&self, panel: Panel) -> Option<Panel> {
    self.panels.toggle(panel)
  }

  pub fn snapshot(&self) -> DetailSnapshot {
    DetailSnapshot {
      index: self.cursor.index(),
      len: self.cursor.len(),
      has_next: self.cursor.has_next(),
      has_previous: self.cursor.has_previous(),
      expanded: self.panels.expanded(),
      card: self.cursor.current().detail(),
    }
  }
}

#[derive(Debug)]
pub struct BrowseSession {
  catalog: Arc<Catalog>,
  view: ViewState,
  swipe: SwipeGesture,
  detail: Option<DetailSession>,
}

impl BrowseSession {
  pub fn new(catalog: Arc<Catalog>, swipe: SwipeGesture) -> Self {
    Self {
      catalog,
      view: ViewState::new(),
      swipe,
      detail: None,
    }
  }

  pub fn catalog(&self) -> &Arc<Catalog> {
    &self.catalog
  }

  pub fn get_catalog(&self) -> &[Arc<Card>] {
    self.catalog.cards()
  }

  pub fn view_state(&self) -> &ViewState {
    &self.view
  }

  pub fn set_filter_text(&mut self, text: impl Into<String>) {
    self.view.set_filter_text(text);
  }

  pub fn toggle_sort(&mut self) -> SortDirection {
    self.view.toggle_sort()
  }

  pub fn get_view(&self) -> Vec<Arc<Card>> {
    self.view.apply(&self.catalog)
  }

  /// Open the detail view on `index` of the current filtered and sorted view.
  pub fn open_detail(&mut self, index: usize) -> Result<&mut DetailSession, CatalogError> {
    let cards = self.get_view();
    self.open_detail_over(cards, index)
  }

  /// Open the detail view over an explicit list. Any previous detail view is dropped.
  pub fn open_detail_over(
    &mut self,
    cards: Vec<Arc<Card>>,
    index: usize,
  ) -> Result<&mut DetailSession, CatalogError> {
    let detail = DetailSession::new(cards, index, self.swipe)?;
    Ok(self.detail.insert(detail))
  }

  pub fn detail(&self) -> Result<&DetailSession, CatalogError> {
    self.detail.as_ref().ok_or(CatalogError::DetailNotOpen)
  }

  pub fn detail_mut(&mut self) -> Result<&mut DetailSession, CatalogError> {
    self.detail.as_mut().ok_or(CatalogError::DetailNotOpen)
  }

  pub fn close_detail(&mut self) -> bool {
    self.detail.take().is_some()
  }
}
