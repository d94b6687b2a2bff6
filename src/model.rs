use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog entry kinds understood by the console's `search type:` query.
///
/// Declaration order is the processing order and the key order of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Encoder,
    Evasion,
    Nop,
    Post,
    Exploit,
    Payload,
    Auxiliary,
}

impl ItemType {
    pub const ALL: [ItemType; 7] = [
        ItemType::Encoder,
        ItemType::Evasion,
        ItemType::Nop,
        ItemType::Post,
        ItemType::Exploit,
        ItemType::Payload,
        ItemType::Auxiliary,
    ];

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "encoder" => Some(ItemType::Encoder),
            "evasion" => Some(ItemType::Evasion),
            "nop" => Some(ItemType::Nop),
            "post" => Some(ItemType::Post),
            "exploit" => Some(ItemType::Exploit),
            "payload" => Some(ItemType::Payload),
            "auxiliary" => Some(ItemType::Auxiliary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Encoder => "encoder",
            ItemType::Evasion => "evasion",
            ItemType::Nop => "nop",
            ItemType::Post => "post",
            ItemType::Exploit => "exploit",
            ItemType::Payload => "payload",
            ItemType::Auxiliary => "auxiliary",
        }
    }

    /// Console command requesting the listing for this type.
    pub fn listing_query(&self) -> String {
        format!("search type:{}", self.as_str())
    }

    /// Console command requesting the detail block for one identifier of this type.
    pub fn detail_query(&self, identifier: &str) -> String {
        format!("info {}/{}", self.as_str(), identifier)
    }

    /// The `<type>/` prefix the console repeats in front of identifiers.
    pub fn path_prefix(&self) -> String {
        format!("{}/", self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::from_name(s).ok_or_else(|| format!("Unknown item type '{s}'"))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Best-effort fields recovered from one `info` block. Absent fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub path: String,
    pub name: String,
    pub description: String,
    pub rank: String,
    pub platform: Vec<String>,
}

impl DetailRecord {
    pub fn new(path: impl Into<String>) -> Self {
        DetailRecord { path: path.into(), ..DetailRecord::default() }
    }
}

/// Category name → identifiers in listing order.
pub type CategoryMap = BTreeMap<String, Vec<String>>;

/// Item type → its categorized identifiers.
pub type CategorizedInventory = BTreeMap<ItemType, CategoryMap>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub total_modules: usize,
    pub by_type: BTreeMap<ItemType, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub modules: CategorizedInventory,
}

impl Report {
    pub fn count_for(&self, item_type: ItemType) -> usize {
        self.metadata.by_type.get(&item_type).copied().unwrap_or_default()
    }

    pub fn categories_for(&self, item_type: ItemType) -> Option<&CategoryMap> {
        self.modules.get(&item_type)
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.total_modules == 0
    }
}
