use serde::{Deserialize, Serialize};

/// Transient list-page filter state. Never persisted; clearing resets every
/// field to the empty string, which is the identity filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub owner: String,
    /// A `YYYY-MM-DD` calendar day; anything unparseable matches no record.
    #[serde(default)]
    pub date_range: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.owner.is_empty() && self.date_range.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
