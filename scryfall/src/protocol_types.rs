use nyxfall::Card;
use serde::{Deserialize, Serialize};

/// One page of results of a card search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse {
    /// Where to fetch the following page from. Only set if `has_more` is.
    #[serde(default, rename = "next_page")]
    pub next_page_uri: Option<String>,
    /// How many cards match the query, over all pages.
    #[serde(default)]
    pub total_cards: usize,
    /// Whether there are more pages after this one.
    #[serde(default)]
    pub has_more: bool,
    /// The cards in this page.
    pub data: Vec<Card>,
}

/// The body Scryfall sends with every non-2xx status.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ErrorObject {
    pub status: u16,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub details: String,
}
