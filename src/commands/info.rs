use crate::config::Config;
use crate::enumerator::Enumerator;
use crate::error::AppError;
use crate::model::{DetailRecord, ItemType};
use crate::runner::ConsoleRunner;

pub struct InfoOptions {
    /// Full module path including its type, e.g. `exploit/windows/smb/ms17_010`.
    pub module: String,
}

pub fn execute_info(options: InfoOptions) -> Result<DetailRecord, AppError> {
    let (item_type, path) = split_module(&options.module)?;

    let config = Config::load()?;
    let runner = ConsoleRunner::from_config(&config);
    let enumerator = Enumerator::new(runner, config)?;

    let record = enumerator.describe(item_type, path);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(record)
}

pub fn split_module(module: &str) -> Result<(ItemType, &str), AppError> {
    let module = module.trim();
    let (head, path) = module
        .split_once('/')
        .filter(|(_, path)| !path.is_empty())
        .ok_or_else(|| AppError::InvalidItemType(module.to_string()))?;
    let item_type =
        ItemType::from_name(head).ok_or_else(|| AppError::InvalidItemType(head.to_string()))?;
    Ok((item_type, path))
}
