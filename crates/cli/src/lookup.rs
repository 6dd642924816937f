use crate::output;
use crate::search::SearchType;
use dnslookup_application::DomainRecordCache;

/// Resolve and render one request.
///
/// Lookup failures never surface: a kind that could not be resolved renders
/// as empty. Text output for an empty single kind is an empty string.
pub async fn render_lookup(
    cache: &DomainRecordCache,
    search: SearchType,
    json: bool,
) -> serde_json::Result<String> {
    match search {
        SearchType::All => {
            let all = cache.all_records().await;
            if json {
                output::render_all_json(&all)
            } else {
                Ok(output::render_all_text(&all))
            }
        }
        SearchType::Kind(record_type) => {
            let set = cache.get(record_type).await;
            if json {
                output::render_json(&set)
            } else {
                Ok(output::render_text(&set))
            }
        }
    }
}
