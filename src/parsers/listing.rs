use crate::model::ItemType;

/// Identifiers recovered from a `search type:` response plus how much was thrown away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParse {
    pub identifiers: Vec<String>,
    /// Banner, status and table header lines.
    pub skipped_lines: usize,
    /// Rows whose candidate token was not an identifier of the queried type.
    pub rejected_rows: usize,
}

impl ListingParse {
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn into_identifiers(self) -> Vec<String> {
        self.identifiers
    }
}

/// Extract identifiers from a listing in source order, without deduplication.
///
/// A leading `<item_type>/` is stripped from each identifier.
pub fn parse_listing(output: &str, item_type: ItemType) -> ListingParse {
    let prefix = item_type.path_prefix();
    let mut parsed = ListingParse::default();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_banner_or_header(line) {
            parsed.skipped_lines += 1;
            continue;
        }

        let Some(token) = row_token(line).filter(|token| token.contains('/')) else {
            parsed.rejected_rows += 1;
            continue;
        };

        if let Some(stripped) = token.strip_prefix(prefix.as_str()) {
            parsed.identifiers.push(stripped.to_string());
        } else if belongs_to_other_type(token, item_type) {
            parsed.rejected_rows += 1;
        } else {
            parsed.identifiers.push(token.to_string());
        }
    }

    parsed
}

// Substring matching on purpose: column spacing varies between console versions.
fn is_banner_or_header(line: &str) -> bool {
    line.starts_with('=')
        || line.starts_with('[')
        || line.contains("Matching Modules")
        || line.contains("Name")
        || line.contains("----")
}

/// First column of a table row, skipping the numeric `#` column newer consoles print.
fn row_token(line: &str) -> Option<&str> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;
    if first.chars().all(|c| c.is_ascii_digit()) { tokens.next() } else { Some(first) }
}

fn belongs_to_other_type(token: &str, item_type: ItemType) -> bool {
    ItemType::ALL
        .iter()
        .filter(|other| **other != item_type)
        .any(|other| token.starts_with(other.path_prefix().as_str()))
}
