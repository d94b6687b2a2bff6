use globset::GlobSet;

use crate::config::Config;
use crate::model::ItemType;

/// Keywords matched case-insensitively as substrings of an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn matches(&self, identifier: &str) -> bool {
        let lowered = identifier.to_lowercase();
        self.keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Inclusion rule deciding which identifiers of an item type reach the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Keep keyword matches, optionally only the first `limit` of them.
    Keywords { vocabulary: Vocabulary, limit: Option<usize> },
    /// Keep everything.
    Identity,
}

impl FilterPolicy {
    pub fn technology(vocabulary: Vocabulary) -> Self {
        FilterPolicy::Keywords { vocabulary, limit: None }
    }

    pub fn service(vocabulary: Vocabulary, limit: usize) -> Self {
        FilterPolicy::Keywords { vocabulary, limit: Some(limit) }
    }

    pub fn for_item_type(item_type: ItemType, config: &Config) -> Self {
        match item_type {
            ItemType::Exploit | ItemType::Payload => {
                FilterPolicy::technology(Vocabulary::new(&config.technology_keywords))
            }
            ItemType::Auxiliary => FilterPolicy::service(
                Vocabulary::new(&config.service_keywords),
                config.service_limit,
            ),
            ItemType::Encoder | ItemType::Evasion | ItemType::Nop | ItemType::Post => {
                FilterPolicy::Identity
            }
        }
    }

    /// Filter without reordering.
    pub fn apply(&self, identifiers: Vec<String>) -> Vec<String> {
        match self {
            FilterPolicy::Identity => identifiers,
            FilterPolicy::Keywords { vocabulary, limit } => {
                let matching = identifiers.into_iter().filter(|id| vocabulary.matches(id));
                match limit {
                    Some(limit) => matching.take(*limit).collect(),
                    None => matching.collect(),
                }
            }
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, FilterPolicy::Identity)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            FilterPolicy::Keywords { limit: None, .. } => "top technologies",
            FilterPolicy::Keywords { limit: Some(_), .. } => "top services",
            FilterPolicy::Identity => "all",
        }
    }
}

pub fn is_excluded(identifier: &str, exclude: Option<&GlobSet>) -> bool {
    exclude.is_some_and(|set| set.is_match(identifier))
}
