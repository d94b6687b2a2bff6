use std::sync::LazyLock;

use regex::Regex;

use crate::model::DetailRecord;

static RANK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Rank:\s+(\w+)").expect("valid regex"));

/// Recover a [`DetailRecord`] from an `info` block. Never fails; unknown lines are ignored.
pub fn parse_detail(path: &str, output: &str) -> DetailRecord {
    let mut record = DetailRecord::new(path);
    let mut capturing_description = false;

    for line in output.lines() {
        let line = line.trim();

        if let Some(name) = line.strip_prefix("Name:") {
            record.name = name.trim().to_string();
        } else if line.contains("Description:") {
            capturing_description = true;
        } else if capturing_description && !line.is_empty() && !line.starts_with("Module") {
            record.description = line.to_string();
            capturing_description = false;
        } else if line.contains("Rank:") {
            if let Some(captures) = RANK_PATTERN.captures(line) {
                record.rank = captures[1].to_lowercase();
            }
        } else if line.contains("Platform:") || line.contains("Available targets:") {
            if let Some((_, values)) = line.split_once(':') {
                record.platform.extend(
                    values.split(',').map(str::trim).filter(|p| !p.is_empty()).map(String::from),
                );
            }
        }
    }

    record
}
