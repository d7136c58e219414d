use std::fs;
use std::sync::{Arc, Mutex};

use cardbrowser_lib::{
  decode::decode, BrowseSession, Catalog, CatalogStore, NavigationDirection, Panel, SwipeGesture,
};

const BUNDLED: &[u8] = include_bytes!("../resources/WOT-Scryfall.json");

#[test]
fn bundled_snapshot_decodes_every_card() {
  let list = decode(BUNDLED).unwrap();
  assert_eq!(list.total_cards, 6);
  assert!(!list.has_more);
  assert_eq!(list.data.len(), 6);
}

#[test]
fn partial_records_survive() {
  let catalog = Catalog::from_bytes(BUNDLED);

  let omniscience = &catalog.cards()[4];
  assert_eq!(omniscience.name, "Omniscience");
  assert!(omniscience.prices.is_none());
  assert!(omniscience.legality_rows().is_empty());

  let assault = &catalog.cards()[5];
  let rows = assault.price_rows();
  assert_eq!(rows.len(), 1);
  assert_eq!((rows[0].label, rows[0].value.as_str()), ("USD Foil", "12.80"));

  let season = &catalog.cards()[3];
  let legal: Vec<&str> = season
    .legality_rows()
    .into_iter()
    .filter(|row| row.legal)
    .map(|row| row.format)
    .collect();
  assert_eq!(legal, vec!["modern", "legacy", "vintage", "commander"]);
}

#[test]
fn load_reads_snapshot_from_disk() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("WOT-Scryfall.json");
  fs::write(&path, BUNDLED).unwrap();

  let store = CatalogStore::new();
  let catalog = store.get_or_load(|| Catalog::load(&path));
  assert_eq!(catalog.len(), 6);

  fs::write(&path, b"{}").unwrap();
  let again = store.get_or_load(|| Catalog::load(&path));
  assert_eq!(again.len(), 6);
}

#[test]
fn session_and_store_share_one_catalog() {
  let store = CatalogStore::new();
  let session = BrowseSession::new(
    store.get_or_load(|| Catalog::from_bytes(BUNDLED)),
    SwipeGesture::new(50.0),
  );

  let held = store.get().unwrap();
  assert!(Arc::ptr_eq(session.catalog(), &held));
  assert_eq!(held.info().declared_total, Some(6));
  assert_eq!(session.get_catalog().len(), held.len());
}

#[test]
fn corrupt_snapshot_on_disk_leaves_app_usable() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("WOT-Scryfall.json");
  fs::write(&path, &BUNDLED[..BUNDLED.len() / 2]).unwrap();

  let catalog = Arc::new(Catalog::load(&path));
  assert!(catalog.is_empty());

  let mut session = BrowseSession::new(catalog, SwipeGesture::new(50.0));
  assert!(session.get_view().is_empty());
  assert!(session.open_detail(0).is_err());
}

#[test]
fn browse_then_page_through_detail() {
  let mut session = BrowseSession::new(Arc::new(Catalog::from_bytes(BUNDLED)), SwipeGesture::new(50.0));
  session.set_filter_text("s");
  session.toggle_sort();

  let names: Vec<String> = session.get_view().iter().map(|card| card.name.clone()).collect();
  assert_eq!(
    names,
    vec![
      "Aggravated Assault",
      "Doubling Season",
      "Omniscience",
      "Rhystic Study",
      "Smothering Tithe",
      "Sylvan Library",
    ]
  );

  let events = Arc::new(Mutex::new(Vec::new()));
  let sink = Arc::clone(&events);
  let detail = session.open_detail(4).unwrap();
  detail.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

  detail.toggle_panel(Panel::Prices);
  let before = detail.snapshot();
  assert_eq!(before.card.name, "Smothering Tithe");
  assert_eq!(before.expanded, Some(Panel::Prices));
  assert_eq!(before.card.prices.len(), 3);

  assert!(detail.swipe(-75.0));
  assert!(!detail.swipe(-75.0));
  assert!(detail.swipe(75.0));

  let after = detail.snapshot();
  assert_eq!(after.card.name, "Smothering Tithe");
  assert_eq!(after.expanded, None);

  let directions: Vec<NavigationDirection> =
    events.lock().unwrap().iter().map(|event| event.direction).collect();
  assert_eq!(
    directions,
    vec![NavigationDirection::Forward, NavigationDirection::Backward]
  );
}
