//! Card, set, symbology, catalog, ruling and bulk data endpoints.
//!
//! None of these require authentication.

mod types;

pub use types::*;

use crate::error::ScryfallError;
use crate::rest::ScryfallClient;
use crate::rest::endpoints::{bulk_data, cards, catalog, join_path, sets, symbology, with_query};
use crate::rest::list::List;

impl ScryfallClient {
    /// Search for cards using a full-text Scryfall query.
    ///
    /// Returns one page of results. Pass [`CardList::next_page`] to
    /// [`list_page`](ScryfallClient::list_page) or set
    /// [`SearchCardsOptions::page`] to continue.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use scryfall_api_client::rest::ScryfallClient;
    /// use scryfall_api_client::rest::public::{SearchCardsOptions, SortOrder};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ScryfallClient::new()?;
    ///     let options = SearchCardsOptions {
    ///         order: Some(SortOrder::Cmc),
    ///         ..Default::default()
    ///     };
    ///     let results = client.search_cards("c:red pow=3", &options).await?;
    ///     println!("{} cards found", results.total_cards.unwrap_or_default());
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_cards(
        &self,
        query: &str,
        options: &SearchCardsOptions,
    ) -> Result<CardList, ScryfallError> {
        let params = SearchCardsParams { q: query, options };
        let path = with_query(cards::SEARCH, &params)?;
        let list: List<Vec<Card>> = self.list_page(&path).await?;
        Ok(CardList {
            cards: list.data,
            has_more: list.has_more,
            next_page: list.next_page,
            total_cards: list.total_cards,
            warnings: list.warnings,
        })
    }

    /// Get a card by its name.
    ///
    /// With `exact` the name must match exactly (case-insensitively).
    /// Otherwise a fuzzy match is made; an ambiguous fuzzy name fails with
    /// an API error whose code is `not_found` and type `ambiguous`.
    pub async fn get_card_by_name(
        &self,
        name: &str,
        exact: bool,
        options: &GetCardByNameOptions,
    ) -> Result<Card, ScryfallError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            exact: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            fuzzy: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            set: Option<&'a str>,
        }

        let params = Params {
            exact: exact.then_some(name),
            fuzzy: (!exact).then_some(name),
            set: options.set.as_deref(),
        };
        self.get_with_params(cards::NAMED, &params).await
    }

    /// Get up to 20 English card names that could complete `s`.
    pub async fn autocomplete_card(&self, s: &str) -> Result<Vec<String>, ScryfallError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            q: &'a str,
        }

        let catalog: Catalog = self
            .get_with_params(cards::AUTOCOMPLETE, &Params { q: s })
            .await?;
        Ok(catalog.data)
    }

    /// Get a random card.
    pub async fn get_random_card(&self) -> Result<Card, ScryfallError> {
        self.get(cards::RANDOM).await
    }

    /// Get a card by its Scryfall ID.
    pub async fn get_card(&self, id: &str) -> Result<Card, ScryfallError> {
        self.get(&join_path(cards::CARDS, &[id])).await
    }

    /// Get a card by its Gatherer multiverse ID.
    pub async fn get_card_by_multiverse_id(&self, id: u64) -> Result<Card, ScryfallError> {
        let id = id.to_string();
        self.get(&join_path(cards::CARDS, &["multiverse", &id])).await
    }

    /// Get a card by its Magic Online ID.
    pub async fn get_card_by_mtgo_id(&self, id: u64) -> Result<Card, ScryfallError> {
        let id = id.to_string();
        self.get(&join_path(cards::CARDS, &["mtgo", &id])).await
    }

    /// Get a card by its set code and collector number.
    pub async fn get_card_by_set_code_and_collector_number(
        &self,
        set_code: &str,
        collector_number: &str,
    ) -> Result<Card, ScryfallError> {
        self.get(&join_path(cards::CARDS, &[set_code, collector_number]))
            .await
    }

    /// Get the rulings for a card by its Scryfall ID.
    pub async fn get_rulings(&self, id: &str) -> Result<Vec<Ruling>, ScryfallError> {
        self.list_get(&join_path(cards::CARDS, &[id, "rulings"]))
            .await
    }

    /// Get the rulings for a card by its Gatherer multiverse ID.
    pub async fn get_rulings_by_multiverse_id(
        &self,
        id: u64,
    ) -> Result<Vec<Ruling>, ScryfallError> {
        let id = id.to_string();
        self.list_get(&join_path(cards::CARDS, &["multiverse", &id, "rulings"]))
            .await
    }

    /// Get the rulings for a card by its Magic Online ID.
    pub async fn get_rulings_by_mtgo_id(&self, id: u64) -> Result<Vec<Ruling>, ScryfallError> {
        let id = id.to_string();
        self.list_get(&join_path(cards::CARDS, &["mtgo", &id, "rulings"]))
            .await
    }

    /// Get the rulings for a card by its set code and collector number.
    pub async fn get_rulings_by_set_code_and_collector_number(
        &self,
        set_code: &str,
        collector_number: &str,
    ) -> Result<Vec<Ruling>, ScryfallError> {
        self.list_get(&join_path(
            cards::CARDS,
            &[set_code, collector_number, "rulings"],
        ))
        .await
    }

    /// List all sets on Scryfall.
    pub async fn list_sets(&self) -> Result<Vec<Set>, ScryfallError> {
        self.list_get(sets::SETS).await
    }

    /// Get a set by its code.
    pub async fn get_set(&self, code: &str) -> Result<Set, ScryfallError> {
        self.get(&join_path(sets::SETS, &[code])).await
    }

    /// List every card symbol.
    pub async fn list_card_symbols(&self) -> Result<Vec<CardSymbol>, ScryfallError> {
        self.list_get(symbology::SYMBOLOGY).await
    }

    /// Parse a mana cost string into normalized symbols.
    ///
    /// The parser is lenient: `"RUx"` becomes `{X}{U}{R}`.
    pub async fn parse_mana_cost(&self, cost: &str) -> Result<ManaCost, ScryfallError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            cost: &'a str,
        }

        self.get_with_params(symbology::PARSE_MANA, &Params { cost })
            .await
    }

    /// Get a catalog.
    pub async fn get_catalog(&self, kind: CatalogKind) -> Result<Catalog, ScryfallError> {
        self.get(&join_path(catalog::CATALOG, &[kind.as_str()]))
            .await
    }

    /// All nontoken English card names.
    pub async fn get_card_names_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::CardNames).await
    }

    /// All canonical artist names.
    pub async fn get_artist_names_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::ArtistNames).await
    }

    /// All English words of length 2 or more that could appear in a card name.
    pub async fn get_word_bank_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::WordBank).await
    }

    pub async fn get_creature_types_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::CreatureTypes).await
    }

    pub async fn get_planeswalker_types_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::PlaneswalkerTypes).await
    }

    pub async fn get_land_types_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::LandTypes).await
    }

    pub async fn get_artifact_types_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::ArtifactTypes).await
    }

    pub async fn get_enchantment_types_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::EnchantmentTypes).await
    }

    pub async fn get_spell_types_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::SpellTypes).await
    }

    /// All possible values for a creature or vehicle's power.
    pub async fn get_powers_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::Powers).await
    }

    /// All possible values for a creature or vehicle's toughness.
    pub async fn get_toughnesses_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::Toughnesses).await
    }

    /// All possible values for a planeswalker's loyalty.
    pub async fn get_loyalties_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::Loyalties).await
    }

    pub async fn get_watermarks_catalog(&self) -> Result<Catalog, ScryfallError> {
        self.get_catalog(CatalogKind::Watermarks).await
    }

    /// List the bulk data files Scryfall publishes.
    ///
    /// Cards in bulk files do not carry prices or purchase URIs.
    pub async fn list_bulk_data(&self) -> Result<Vec<BulkData>, ScryfallError> {
        self.list_get(bulk_data::BULK_DATA).await
    }
}
