pub mod card;
pub mod catalog;
pub mod config;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod gesture;
pub mod panels;
pub mod session;
pub mod view;

#[cfg(feature = "app")]
mod app;

#[cfg(feature = "app")]
pub use app::run;

pub use card::{Card, CardDetail, CardList, ImageUris, Legalities, LegalityStatus, PricesList};
pub use catalog::{Catalog, CatalogStore, SnapshotInfo};
pub use config::Settings;
pub use cursor::{Cursor, NavigationDirection, NavigationEvent};
pub use error::CatalogError;
pub use gesture::{SwipeAction, SwipeGesture};
pub use panels::{DetailPanels, Panel};
pub use session::{BrowseSession, DetailSession, DetailSnapshot};
pub use view::{derive, SortDirection, ViewState};
