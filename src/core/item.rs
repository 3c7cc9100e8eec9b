use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unique key of an item; the data table uses either strings or numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Text(String),
    Number(i64),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Text(s) => f.write_str(s),
            ItemId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    /// Case-insensitive lookup; unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            SkillLevel::Beginner,
            SkillLevel::Intermediate,
            SkillLevel::Advanced,
            SkillLevel::Expert,
        ]
        .into_iter()
        .find(|level| level.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// `level` accepts any casing; values that name no level (or are not strings)
/// read as "no level" instead of rejecting the item.
fn lenient_level<'de, D>(deserializer: D) -> Result<Option<SkillLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(SkillLevel::from_name))
}

/// One skill card. Content is immutable; the carousel only tracks which
/// index is selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: Option<SkillLevel>,
    #[serde(default)]
    pub years_of_experience: u32,
    /// Fields outside the documented record, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CarouselItem {
    pub fn new(id: impl Into<ItemId>, title: &str) -> Self {
        Self {
            id: id.into(),
            title: Some(title.to_string()),
            description: String::new(),
            image: None,
            category: String::new(),
            level: None,
            years_of_experience: 0,
            extra: BTreeMap::new(),
        }
    }

    /// Title, or an empty string when the item has none.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}
