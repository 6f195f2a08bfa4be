use serde::{Deserialize, Deserializer, Serialize};

/// A Magic: The Gathering card, reduced to the fields needed to draw it.
///
/// Cards are immutable once constructed. Every field that Scryfall may omit is
/// defaulted on deserialization, so a partial JSON object still yields a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    name: String,
    #[serde(default)]
    scryfall_uri: String,
    #[serde(default)]
    mana_cost: String,
    #[serde(default)]
    type_line: String,
    #[serde(default)]
    power: Option<String>,
    #[serde(default)]
    toughness: Option<String>,
    #[serde(default)]
    oracle_text: String,
    #[serde(default)]
    flavor_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_set_code")]
    set: String,
}

fn deserialize_set_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let set = String::deserialize(deserializer)?;
    Ok(set.to_uppercase())
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        mana_cost: impl Into<String>,
        type_line: impl Into<String>,
        oracle_text: impl Into<String>,
        set: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.into(),
            mana_cost: mana_cost.into(),
            type_line: type_line.into(),
            oracle_text: oracle_text.into(),
            set: set.as_ref().to_uppercase(),
            ..Self::default()
        }
    }

    pub fn with_power_toughness(
        mut self,
        power: impl Into<String>,
        toughness: impl Into<String>,
    ) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    pub fn with_flavor_text(mut self, flavor_text: impl Into<String>) -> Self {
        self.flavor_text = Some(flavor_text.into());
        self
    }

    pub fn with_scryfall_uri(mut self, scryfall_uri: impl Into<String>) -> Self {
        self.scryfall_uri = scryfall_uri.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Link to the card's Scryfall page. Not part of the rendered frame.
    pub fn scryfall_uri(&self) -> &str {
        &self.scryfall_uri
    }

    /// The encoded mana cost, e.g. `{4}{G}{G}`. Empty for lands.
    pub fn mana_cost(&self) -> &str {
        &self.mana_cost
    }

    pub fn type_line(&self) -> &str {
        &self.type_line
    }

    pub fn power(&self) -> Option<&str> {
        self.power.as_deref()
    }

    pub fn toughness(&self) -> Option<&str> {
        self.toughness.as_deref()
    }

    /// Both combat stats, or `None` unless the card has both.
    pub fn power_toughness(&self) -> Option<(&str, &str)> {
        Some((self.power()?, self.toughness()?))
    }

    /// Rules text. Separate abilities are separated by `\n`.
    pub fn oracle_text(&self) -> &str {
        &self.oracle_text
    }

    pub fn flavor_text(&self) -> Option<&str> {
        self.flavor_text.as_deref()
    }

    /// The uppercase set code, e.g. `XLN`.
    pub fn set(&self) -> &str {
        &self.set
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
