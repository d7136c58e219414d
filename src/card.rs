//! Card record schema as exported by Scryfall set dumps.
//!
//! Every nested block (`image_uris`, `legalities`, `prices`) and every field
//! inside those blocks is optional, so partial records still decode.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
  pub id: Uuid,
  pub name: String,
  #[serde(default)]
  pub type_line: String,
  #[serde(default)]
  pub oracle_text: String,
  #[serde(default)]
  pub image_uris: Option<ImageUris>,
  #[serde(default)]
  pub legalities: Option<Legalities>,
  #[serde(default)]
  pub prices: Option<PricesList>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ImageUris {
  pub small: Option<String>,
  pub normal: Option<String>,
  pub large: Option<String>,
  pub art_crop: Option<String>,
}

/// Snapshot envelope. `total_cards` and `has_more` are carried through but the
/// whole set is always delivered in one document.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CardList {
  pub object: String,
  pub total_cards: i64,
  pub has_more: bool,
  pub data: Vec<Card>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LegalityStatus {
  Legal,
  NotLegal,
  Restricted,
  Banned,
  #[serde(other)]
  Unknown,
}

impl LegalityStatus {
  pub fn is_legal(self) -> bool {
    self == LegalityStatus::Legal
  }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Legalities {
  pub standard: Option<LegalityStatus>,
  pub future: Option<LegalityStatus>,
  pub historic: Option<LegalityStatus>,
  pub gladiator: Option<LegalityStatus>,
  pub pioneer: Option<LegalityStatus>,
  pub explorer: Option<LegalityStatus>,
  pub modern: Option<LegalityStatus>,
  pub legacy: Option<LegalityStatus>,
  pub pauper: Option<LegalityStatus>,
  pub vintage: Option<LegalityStatus>,
  pub penny: Option<LegalityStatus>,
  pub commander: Option<LegalityStatus>,
  pub oathbreaker: Option<LegalityStatus>,
  pub brawl: Option<LegalityStatus>,
  pub historicbrawl: Option<LegalityStatus>,
  pub alchemy: Option<LegalityStatus>,
  pub paupercommander: Option<LegalityStatus>,
  pub duel: Option<LegalityStatus>,
  pub oldschool: Option<LegalityStatus>,
  pub premodern: Option<LegalityStatus>,
  pub predh: Option<LegalityStatus>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PricesList {
  pub usd: Option<String>,
  pub usd_foil: Option<String>,
  pub usd_etched: Option<String>,
  pub eur: Option<String>,
  pub eur_foil: Option<String>,
}

pub struct FormatField {
  pub key: &'static str,
  pub label: &'static str,
  pub get: fn(&Legalities) -> Option<LegalityStatus>,
}

pub struct PriceField {
  pub label: &'static str,
  pub get: fn(&PricesList) -> Option<&String>,
}

/// Known formats in display order.
pub const FORMATS: [FormatField; 21] = [
  FormatField { key: "standard", label: "Standard", get: |l| l.standard },
  FormatField { key: "future", label: "Future", get: |l| l.future },
  FormatField { key: "historic", label: "Historic", get: |l| l.historic },
  FormatField { key: "gladiator", label: "Gladiator", get: |l| l.gladiator },
  FormatField { key: "pioneer", label: "Pioneer", get: |l| l.pioneer },
  FormatField { key: "explorer", label: "Explorer", get: |l| l.explorer },
  FormatField { key: "modern", label: "Modern", get: |l| l.modern },
  FormatField { key: "legacy", label: "Legacy", get: |l| l.legacy },
  FormatField { key: "pauper", label: "Pauper", get: |l| l.pauper },
  FormatField { key: "vintage", label: "Vintage", get: |l| l.vintage },
  FormatField { key: "penny", label: "Penny", get: |l| l.penny },
  FormatField { key: "commander", label: "Commander", get: |l| l.commander },
  FormatField { key: "oathbreaker", label: "Oathbreaker", get: |l| l.oathbreaker },
  FormatField { key: "brawl", label: "Brawl", get: |l| l.brawl },
  FormatField { key: "historicbrawl", label: "Historic Brawl", get: |l| l.historicbrawl },
  FormatField { key: "alchemy", label: "Alchemy", get: |l| l.alchemy },
  FormatField { key: "paupercommander", label: "Pauper Commander", get: |l| l.paupercommander },
  FormatField { key: "duel", label: "Duel", get: |l| l.duel },
  FormatField { key: "oldschool", label: "Old School", get: |l| l.oldschool },
  FormatField { key: "premodern", label: "Premodern", get: |l| l.premodern },
  FormatField { key: "predh", label: "PreDH", get: |l| l.predh },
];

pub const PRICE_FIELDS: [PriceField; 5] = [
  PriceField { label: "USD", get: |p| p.usd.as_ref() },
  PriceField { label: "USD Foil", get: |p| p.usd_foil.as_ref() },
  PriceField { label: "USD Etched", get: |p| p.usd_etched.as_ref() },
  PriceField { label: "EUR", get: |p| p.eur.as_ref() },
  PriceField { label: "EUR Foil", get: |p| p.eur_foil.as_ref() },
];

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
  pub label: &'static str,
  pub value: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegalityRow {
  pub format: &'static str,
  pub label: &'static str,
  pub legal: bool,
}

/// Everything the detail screen shows for one card.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
  pub id: Uuid,
  pub name: String,
  pub type_line: String,
  pub oracle_text: String,
  pub image_url: Option<String>,
  pub prices: Vec<PriceRow>,
  pub legalities: Vec<LegalityRow>,
}

impl PricesList {
  /// Listed prices only, in label order. Missing entries are left out.
  pub fn display_rows(&self) -> Vec<PriceRow> {
    PRICE_FIELDS
      .iter()
      .filter_map(|field| {
        (field.get)(self).map(|value| PriceRow {
          label: field.label,
          value: value.clone(),
        })
      })
      .collect()
  }
}

impl Legalities {
  /// One row per known format. Anything but an explicit `legal` shows as not legal.
  pub fn display_rows(&self) -> Vec<LegalityRow> {
    FORMATS
      .iter()
      .map(|field| LegalityRow {
        format: field.key,
        label: field.label,
        legal: (field.get)(self).is_some_and(LegalityStatus::is_legal),
      })
      .collect()
  }
}

impl ImageUris {
  pub fn preferred(&self) -> Option<&str> {
    self
      .large
      .as_deref()
      .or(self.normal.as_deref())
      .or(self.small.as_deref())
  }
}

impl Card {
  pub fn image_url(&self) -> Option<&str> {
    self.image_uris.as_ref().and_then(ImageUris::preferred)
  }

  pub fn price_rows(&self) -> Vec<PriceRow> {
    self
      .prices
      .as_ref()
      .map(PricesList::display_rows)
      .unwrap_or_default()
  }

  pub fn legality_rows(&self) -> Vec<LegalityRow> {
    self
      .legalities
      .as_ref()
      .map(Legalities::display_rows)
      .unwrap_or_default()
  }

  pub fn detail(&self) -> CardDetail {
    CardDetail {
      id: self.id,
      name: self.name.clone(),
      type_line: self.type_line.clone(),
      oracle_text: self.oracle_text.clone(),
      image_url: self.image_url().map(str::to_string),
      prices: self.price_rows(),
      legalities: self.legality_rows(),
    }
  }
}
