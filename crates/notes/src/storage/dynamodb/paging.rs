//! `LastEvaluatedKey` continuation for paged reads.

use std::collections::HashMap;
use std::future::Future;

use aws_sdk_dynamodb::types::AttributeValue;
use notes_core::storage::Result;

pub type Item = HashMap<String, AttributeValue>;

/// One page of a paged read.
#[derive(Debug, Default)]
pub struct Page {
    pub items: Vec<Item>,
    /// Where the next page starts. `None` or empty means this was the last page.
    pub last_evaluated_key: Option<Item>,
}

/// Fetches pages until the backend stops returning a continuation key.
///
/// `fetch_page` receives the exclusive start key (`None` for the first page).
pub async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<Item>>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<Page>>,
{
    let mut items = Vec::new();
    let mut start_key = None;

    loop {
        let page = fetch_page(start_key).await?;
        items.extend(page.items);

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok(items)
}
