//! Types for card, set, symbology, catalog, ruling and bulk data endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::types::serde_helpers::{is_false, null_as_default};
use crate::types::{Color, Date, Legality, Rarity, Timestamp};

/// Card layout, describing how the card's faces are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Normal,
    Split,
    Flip,
    Transform,
    ModalDfc,
    Meld,
    Leveler,
    Class,
    Saga,
    Adventure,
    Mutate,
    Prototype,
    Planar,
    Scheme,
    Vanguard,
    Token,
    DoubleFacedToken,
    Emblem,
    Augment,
    Host,
    ArtSeries,
    ReversibleCard,
    /// A layout this client does not know about yet.
    #[serde(other)]
    Unknown,
}

/// Card frame edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// The original Magic card frame.
    #[serde(rename = "1993")]
    Original,
    /// The updated classic frame starting from Mirage.
    #[serde(rename = "1997")]
    Classic,
    /// The "modern" frame introduced with Eighth Edition.
    #[serde(rename = "2003")]
    Modern,
    /// The holofoil-stamp frame introduced with Magic 2015.
    #[serde(rename = "2015")]
    M15,
    /// The frame used on cards from the future.
    #[serde(rename = "future")]
    Future,
    #[serde(other)]
    Unknown,
}

/// Image URIs for a card or card face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUris {
    pub small: String,
    pub normal: String,
    pub large: String,
    pub png: String,
    pub art_crop: String,
    pub border_crop: String,
}

/// One face of a multi-face card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    /// The name of this face.
    pub name: String,
    /// Mana cost of this face; empty if it has none.
    #[serde(default)]
    pub mana_cost: String,
    /// Type line of this face.
    #[serde(default)]
    pub type_line: Option<String>,
    /// Oracle text of this face, if any.
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    /// Unique identifier of this face's artwork.
    #[serde(default)]
    pub illustration_id: Option<String>,
    /// Images of this face, for cards whose faces are printed separately.
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

/// Legality of a card across play formats.
///
/// Formats the API omits default to [`Legality::NotLegal`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legalities {
    pub standard: Legality,
    pub future: Legality,
    pub historic: Legality,
    pub pioneer: Legality,
    pub modern: Legality,
    pub legacy: Legality,
    pub pauper: Legality,
    pub vintage: Legality,
    pub penny: Legality,
    pub commander: Legality,
    pub brawl: Legality,
    pub duel: Legality,
    pub oldschool: Legality,
    pub frontier: Legality,
    #[serde(rename = "1v1")]
    pub one_versus_one: Legality,
}

/// Daily price estimates. Prices are absent when no recent data is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prices {
    #[serde(with = "rust_decimal::serde::str_option")]
    pub usd: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub usd_foil: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub usd_etched: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub eur: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub eur_foil: Option<Decimal>,
    /// MTGO event tickets.
    #[serde(with = "rust_decimal::serde::str_option")]
    pub tix: Option<Decimal>,
}

/// Links to this card on other Magic resources.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedUris {
    pub gatherer: Option<String>,
    pub tcgplayer_decks: Option<String>,
    pub tcgplayer_infinite_decks: Option<String>,
    pub tcgplayer_infinite_articles: Option<String>,
    pub edhrec: Option<String>,
    pub mtgtop8: Option<String>,
}

/// Links to buy this card from online retailers.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseUris {
    pub amazon: Option<String>,
    pub ebay: Option<String>,
    pub tcgplayer: Option<String>,
    #[serde(rename = "cardmarket", alias = "magiccardmarket")]
    pub card_market: Option<String>,
    pub cardhoarder: Option<String>,
    pub card_kingdom: Option<String>,
    pub mtgo_traders: Option<String>,
    pub coolstuffinc: Option<String>,
}

/// An individual Magic card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for this card in Scryfall's database.
    pub id: String,
    /// Consistent across reprints of the same card; absent on reversible cards.
    #[serde(default)]
    pub oracle_id: Option<String>,
    /// Multiverse IDs on Gatherer, if any.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub multiverse_ids: Vec<u64>,
    #[serde(default)]
    pub mtgo_id: Option<u64>,
    #[serde(default)]
    pub mtgo_foil_id: Option<u64>,
    #[serde(default)]
    pub arena_id: Option<u64>,
    #[serde(default)]
    pub tcgplayer_id: Option<u64>,
    pub name: String,
    /// Language code of this printing.
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub released_at: Date,
    /// API URI of this card.
    pub uri: String,
    /// Permapage of this card on the Scryfall website.
    pub scryfall_uri: String,
    pub layout: Layout,
    #[serde(default)]
    pub highres_image: bool,
    /// Absent on cards whose faces carry their own images.
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub mana_cost: String,
    /// Mana value.
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub color_identity: Vec<Color>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Faces of multi-face cards; empty otherwise.
    #[serde(default)]
    pub card_faces: Vec<CardFace>,
    #[serde(default)]
    pub legalities: Legalities,
    /// On the Reserved List.
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub reprint: bool,
    #[serde(default)]
    pub digital: bool,
    #[serde(default)]
    pub foil: bool,
    #[serde(default)]
    pub nonfoil: bool,
    #[serde(default)]
    pub oversized: bool,
    #[serde(default)]
    pub promo: bool,
    /// Set code.
    pub set: String,
    pub set_name: String,
    #[serde(default)]
    pub set_type: Option<String>,
    pub set_uri: String,
    pub set_search_uri: String,
    pub scryfall_set_uri: String,
    pub rulings_uri: String,
    pub prints_search_uri: String,
    /// Not necessarily numeric (for example `"12a"` or `"KTK-34"`).
    pub collector_number: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub illustration_id: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub watermark: Option<String>,
    pub frame: Frame,
    #[serde(default)]
    pub frame_effects: Vec<String>,
    #[serde(default)]
    pub full_art: bool,
    #[serde(default)]
    pub textless: bool,
    pub border_color: String,
    /// Overall rank in EDHREC popularity.
    #[serde(default)]
    pub edhrec_rank: Option<u64>,
    #[serde(default)]
    pub prices: Prices,
    #[serde(default)]
    pub related_uris: RelatedUris,
    #[serde(default)]
    pub purchase_uris: PurchaseUris,
}

/// Uniqueness strategy for card searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueMode {
    /// Remove duplicate gameplay objects (the default).
    Cards,
    /// One result per unique artwork.
    Art,
    /// Every printing.
    Prints,
}

/// Sort order for card searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Name,
    Set,
    Released,
    Rarity,
    Color,
    Usd,
    Tix,
    Eur,
    Cmc,
    Power,
    Toughness,
    Edhrec,
    Penny,
    Artist,
    Review,
}

/// Sort direction for card searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Auto,
    Asc,
    Desc,
}

/// Optional parameters for [`search_cards`](crate::rest::ScryfallClient::search_cards).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchCardsOptions {
    pub unique: Option<UniqueMode>,
    pub order: Option<SortOrder>,
    pub dir: Option<SortDirection>,
    /// Include extra cards such as tokens and planes.
    #[serde(skip_serializing_if = "is_false")]
    pub include_extras: bool,
    /// Include cards in every language.
    #[serde(skip_serializing_if = "is_false")]
    pub include_multilingual: bool,
    /// Include rare card variants.
    #[serde(skip_serializing_if = "is_false")]
    pub include_variations: bool,
    /// Page number to return, starting at 1.
    pub page: Option<u32>,
}

/// The query string sent to the search endpoint.
#[derive(Serialize)]
pub(crate) struct SearchCardsParams<'a> {
    pub q: &'a str,
    #[serde(flatten)]
    pub options: &'a SearchCardsOptions,
}

/// Optional parameters for [`get_card_by_name`](crate::rest::ScryfallClient::get_card_by_name).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCardByNameOptions {
    /// Restrict the lookup to a set code.
    pub set: Option<String>,
}

/// One page of card search results.
#[derive(Debug, Clone, PartialEq)]
pub struct CardList {
    pub cards: Vec<Card>,
    /// True if there is a page beyond this one.
    pub has_more: bool,
    /// Full API URL of the next page, if any.
    pub next_page: Option<String>,
    /// Total number of cards found across all pages.
    pub total_cards: Option<u64>,
    /// Non-fatal issues Scryfall found with the query.
    pub warnings: Vec<String>,
}

/// A group of related Magic cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    /// The unique three to five-letter code for this set.
    pub code: String,
    /// The code for this set on MTGO, which may differ from the regular code.
    #[serde(default)]
    pub mtgo_code: Option<String>,
    pub name: String,
    /// API URI of this set.
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub scryfall_uri: String,
    /// API URI to begin paginating over the cards in this set.
    pub search_uri: String,
    /// Release date in Pacific time; zero if unknown.
    #[serde(default)]
    pub released_at: Date,
    /// Computer-readable classification, for example `"expansion"` or `"masters"`.
    pub set_type: String,
    pub card_count: u32,
    /// Only released on Magic Online.
    #[serde(default)]
    pub digital: bool,
    /// Contains only foil cards.
    #[serde(default)]
    pub foil: bool,
    #[serde(default)]
    pub block_code: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    /// Parent set code, for promo and token sets.
    #[serde(default)]
    pub parent_set_code: Option<String>,
    pub icon_svg_uri: String,
}

/// An illustrated symbol that may appear in a mana cost or Oracle text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSymbol {
    /// The plaintext symbol, usually surrounded by curly braces.
    pub symbol: String,
    /// An alternate version of this symbol without braces, if any.
    #[serde(default)]
    pub loose_variant: Option<String>,
    /// English description, suitable for alt text.
    pub english: String,
    /// Can be written backwards, for example `{P/U}`.
    #[serde(default)]
    pub transposable: bool,
    #[serde(default)]
    pub represents_mana: bool,
    /// Mana value; can be fractional on funny cards.
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub appears_in_mana_costs: bool,
    /// Only used on funny cards or Un-cards.
    #[serde(default)]
    pub funny: bool,
    #[serde(default)]
    pub colors: Vec<Color>,
}

/// A mana cost as normalized by the parser endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManaCost {
    /// The normalized cost, with correctly-ordered and wrapped symbols.
    pub cost: String,
    #[serde(default)]
    pub colors: Vec<Color>,
    pub cmc: f64,
    pub colorless: bool,
    pub monocolored: bool,
    pub multicolored: bool,
}

/// An array of Magic datapoints (words, card values, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// API URI of this catalog.
    #[serde(default)]
    pub uri: String,
    /// Number of items in `data`.
    #[serde(default)]
    pub total_values: u64,
    pub data: Vec<String>,
}

/// The catalogs Scryfall publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    CardNames,
    ArtistNames,
    WordBank,
    CreatureTypes,
    PlaneswalkerTypes,
    LandTypes,
    ArtifactTypes,
    EnchantmentTypes,
    SpellTypes,
    Powers,
    Toughnesses,
    Loyalties,
    Watermarks,
}

impl CatalogKind {
    /// The catalog's path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::CardNames => "card-names",
            CatalogKind::ArtistNames => "artist-names",
            CatalogKind::WordBank => "word-bank",
            CatalogKind::CreatureTypes => "creature-types",
            CatalogKind::PlaneswalkerTypes => "planeswalker-types",
            CatalogKind::LandTypes => "land-types",
            CatalogKind::ArtifactTypes => "artifact-types",
            CatalogKind::EnchantmentTypes => "enchantment-types",
            CatalogKind::SpellTypes => "spell-types",
            CatalogKind::Powers => "powers",
            CatalogKind::Toughnesses => "toughnesses",
            CatalogKind::Loyalties => "loyalties",
            CatalogKind::Watermarks => "watermarks",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who published a ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulingSource {
    /// Wizards of the Coast.
    Wotc,
    /// The Scryfall team.
    Scryfall,
}

impl std::fmt::Display for RulingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RulingSource::Wotc => "wotc",
            RulingSource::Scryfall => "scryfall",
        };
        write!(f, "{}", s)
    }
}

/// An Oracle ruling, release note or Scryfall note for a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruling {
    pub source: RulingSource,
    /// Publication date, in Pacific time.
    pub published_at: Date,
    /// The text of the ruling.
    pub comment: String,
}

/// A Scryfall bulk data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkData {
    pub id: String,
    /// Computer-readable kind of file, for example `"oracle_cards"`.
    #[serde(rename = "type")]
    pub bulk_type: String,
    /// When the file was last updated.
    pub updated_at: Timestamp,
    pub name: String,
    /// API URI of this bulk object.
    pub uri: String,
    pub description: String,
    /// Size of the file in bytes.
    #[serde(default, alias = "compressed_size")]
    pub size: u64,
    /// URL hosting the file.
    pub download_uri: String,
    pub content_type: String,
    pub content_encoding: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_layout_and_frame() {
        let layout: Layout = serde_json::from_str(r#""battle""#).unwrap();
        assert_eq!(layout, Layout::Unknown);
        let layout: Layout = serde_json::from_str(r#""modal_dfc""#).unwrap();
        assert_eq!(layout, Layout::ModalDfc);

        let frame: Frame = serde_json::from_str(r#""2015""#).unwrap();
        assert_eq!(frame, Frame::M15);
        let frame: Frame = serde_json::from_str(r#""2030""#).unwrap();
        assert_eq!(frame, Frame::Unknown);
    }

    #[test]
    fn test_prices_are_decimal_strings() {
        let prices: Prices =
            serde_json::from_str(r#"{"usd":"0.99","usd_foil":null,"eur":"0.79","tix":"0.15"}"#)
                .unwrap();
        assert_eq!(prices.usd, Some(Decimal::new(99, 2)));
        assert_eq!(prices.usd_foil, None);
        assert_eq!(prices.usd_etched, None);
        assert_eq!(prices.eur, Some(Decimal::new(79, 2)));
        assert_eq!(prices.tix, Some(Decimal::new(15, 2)));
    }

    #[test]
    fn test_missing_legalities_are_not_legal() {
        let legalities: Legalities =
            serde_json::from_str(r#"{"modern":"legal","1v1":"banned"}"#).unwrap();
        assert_eq!(legalities.modern, Legality::Legal);
        assert_eq!(legalities.one_versus_one, Legality::Banned);
        assert_eq!(legalities.pioneer, Legality::NotLegal);
    }

    #[test]
    fn test_search_params_query_string() {
        let options = SearchCardsOptions {
            unique: Some(UniqueMode::Prints),
            order: Some(SortOrder::Released),
            dir: Some(SortDirection::Desc),
            include_extras: true,
            page: Some(2),
            ..Default::default()
        };
        let params = SearchCardsParams {
            q: "t:goblin",
            options: &options,
        };
        assert_eq!(
            serde_urlencoded::to_string(&params).unwrap(),
            "q=t%3Agoblin&unique=prints&order=released&dir=desc&include_extras=true&page=2"
        );

        let params = SearchCardsParams {
            q: "t:goblin",
            options: &SearchCardsOptions::default(),
        };
        assert_eq!(serde_urlencoded::to_string(&params).unwrap(), "q=t%3Agoblin");
    }

    #[test]
    fn test_catalog_kind_segments() {
        assert_eq!(CatalogKind::CardNames.as_str(), "card-names");
        assert_eq!(CatalogKind::PlaneswalkerTypes.to_string(), "planeswalker-types");
    }
}
