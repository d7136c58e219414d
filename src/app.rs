use std::fs;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tauri::path::BaseDirectory;
use tauri::{AppHandle, Emitter, Manager, State};
use uuid::Uuid;

use crate::card::Card;
use crate::catalog::{Catalog, CatalogStore, SnapshotInfo};
use crate::config::{Settings, SETTINGS_RESOURCE};
use crate::gesture::SwipeGesture;
use crate::panels::Panel;
use crate::session::{BrowseSession, DetailSnapshot};
use crate::view::SortDirection;

const NAVIGATED_EVENT: &str = "card-navigated";

struct AppState {
  settings: Settings,
  catalog: CatalogStore,
  session: Mutex<BrowseSession>,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct NavigationOutcome {
  moved: bool,
  detail: DetailSnapshot,
}

fn lock_session<'a>(state: &'a State<'_, AppState>) -> Result<MutexGuard<'a, BrowseSession>, String> {
  state.session.lock().map_err(|e| e.to_string())
}

fn loaded_catalog(state: &State<'_, AppState>) -> Result<Arc<Catalog>, String> {
  state
    .catalog
    .get()
    .ok_or_else(|| "Card catalog is not loaded.".to_string())
}

fn owned_cards(cards: &[Arc<Card>]) -> Vec<Card> {
  cards.iter().map(|card| Card::clone(card)).collect()
}

fn read_settings(app: &AppHandle) -> Settings {
  let bytes = app
    .path()
    .resolve(SETTINGS_RESOURCE, BaseDirectory::Resource)
    .ok()
    .and_then(|path| fs::read(path).ok());
  match bytes {
    Some(bytes) => Settings::from_json_or_default(&bytes),
    None => Settings::default(),
  }
}

fn load_catalog(app: &AppHandle, settings: &Settings) -> Catalog {
  match app
    .path()
    .resolve(&settings.snapshot_resource, BaseDirectory::Resource)
  {
    Ok(path) => Catalog::load(&path),
    Err(error) => {
      log::error!(
        "Card snapshot resource '{}' not found: {}",
        settings.snapshot_resource,
        error
      );
      Catalog::empty()
    }
  }
}

#[tauri::command]
fn get_settings(state: State<'_, AppState>) -> Settings {
  state.settings.clone()
}

#[tauri::command]
fn get_snapshot_info(state: State<'_, AppState>) -> Result<SnapshotInfo, String> {
  let catalog = loaded_catalog(&state)?;
  Ok(catalog.info().clone())
}

#[tauri::command]
fn get_catalog(state: State<'_, AppState>) -> Result<Vec<Card>, String> {
  let catalog = loaded_catalog(&state)?;
  Ok(owned_cards(catalog.cards()))
}

#[tauri::command]
fn get_card(state: State<'_, AppState>, id: String) -> Result<Option<Card>, String> {
  let id = Uuid::parse_str(id.trim()).map_err(|e| e.to_string())?;
  let catalog = loaded_catalog(&state)?;
  Ok(catalog.find(id).map(|card| Card::clone(card)))
}

#[tauri::command]
fn set_filter_text(state: State<'_, AppState>, text: String) -> Result<(), String> {
  let mut session = lock_session(&state)?;
  session.set_filter_text(text);
  Ok(())
}

#[tauri::command]
fn toggle_sort(state: State<'_, AppState>) -> Result<SortDirection, String> {
  let mut session = lock_session(&state)?;
  let direction = session.toggle_sort();
  log::info!("Sorting card grid {:?}", direction);
  Ok(direction)
}

#[tauri::command]
fn get_view(state: State<'_, AppState>) -> Result<Vec<Card>, String> {
  let session = lock_session(&state)?;
  Ok(owned_cards(&session.get_view()))
}

#[tauri::command]
fn open_detail(
  app: AppHandle,
  state: State<'_, AppState>,
  index: usize,
) -> Result<DetailSnapshot, String> {
  let mut session = lock_session(&state)?;
  let detail = session.open_detail(index).map_err(|e| e.to_string())?;
  detail.subscribe(move |event| {
    if let Err(error) = app.emit(NAVIGATED_EVENT, event.clone()) {
      log::warn!("Failed to emit {}: {}", NAVIGATED_EVENT, error);
    }
  });
  Ok(detail.snapshot())
}

#[tauri::command]
fn close_detail(state: State<'_, AppState>) -> Result<bool, String> {
  let mut session = lock_session(&state)?;
  Ok(session.close_detail())
}

#[tauri::command]
fn detail_current(state: State<'_, AppState>) -> Result<DetailSnapshot, String> {
  let session = lock_session(&state)?;
  let detail = session.detail().map_err(|e| e.to_string())?;
  Ok(detail.snapshot())
}

#[tauri::command]
fn detail_advance(state: State<'_, AppState>) -> Result<NavigationOutcome, String> {
  let mut session = lock_session(&state)?;
  let detail = session.detail_mut().map_err(|e| e.to_string())?;
  let moved = detail.advance();
  Ok(NavigationOutcome {
    moved,
    detail: detail.snapshot(),
  })
}

#[tauri::command]
fn detail_retreat(state: State<'_, AppState>) -> Result<NavigationOutcome, String> {
  let mut session = lock_session(&state)?;
  let detail = session.detail_mut().map_err(|e| e.to_string())?;
  let moved = detail.retreat();
  Ok(NavigationOutcome {
    moved,
    detail: detail.snapshot(),
  })
}

#[tauri::command]
fn detail_swipe(state: State<'_, AppState>, dx: f64) -> Result<NavigationOutcome, String> {
  let mut session = lock_session(&state)?;
  let detail = session.detail_mut().map_err(|e| e.to_string())?;
  let moved = detail.swipe(dx);
  Ok(NavigationOutcome {
    moved,
    detail: detail.snapshot(),
  })
}

#[tauri::command]
fn toggle_panel(state: State<'_, AppState>, panel: Panel) -> Result<DetailSnapshot, String> {
  let session = lock_session(&state)?;
  let detail = session.detail().map_err(|e| e.to_string())?;
  detail.toggle_panel(panel);
  Ok(detail.snapshot())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .setup(|app| {
      let settings = read_settings(app.handle());

      if cfg!(debug_assertions) {
        app.handle().plugin(
          tauri_plugin_log::Builder::default()
            .level(settings.level_filter())
            .build(),
        )?;
      }

      let store = CatalogStore::new();
      let catalog = store.get_or_load(|| load_catalog(app.handle(), &settings));
      let session = BrowseSession::new(catalog, SwipeGesture::new(settings.swipe_threshold));
      app.manage(AppState {
        settings,
        catalog: store,
        session: Mutex::new(session),
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      get_settings,
      get_snapshot_info,
      get_catalog,
      get_card,
      set_filter_text,
      toggle_sort,
      get_view,
      open_detail,
      close_detail,
      detail_current,
      detail_advance,
      detail_retreat,
      detail_swipe,
      toggle_panel
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
