use std::collections::BTreeMap;
use url::Url;

// Campaign identifiers forwarded with every lead.
pub const TRACKING_KEYS: [&str; 7] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
];

/// All query parameters of `page_url`. A repeated key keeps its last value.
pub fn query_params(page_url: &str) -> BTreeMap<String, String> {
    match Url::parse(page_url) {
        Ok(url) => url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect(),
        Err(e) => {
            log::warn!("Could not parse page url {}: {}", page_url, e);
            BTreeMap::new()
        }
    }
}

pub fn extract_utms(params: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    TRACKING_KEYS
        .iter()
        .filter_map(|key| {
            params
                .get(*key)
                .filter(|value| !value.is_empty())
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}
