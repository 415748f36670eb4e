//! Merging of title groups found on one page.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{MediaType, TorrentTitleGroup};
use crate::parser::canonical::merge_key;

/// Merge groups that refer to the same logical title.
///
/// Two groups merge iff their titles are equal once all whitespace is removed
/// (ASCII case-insensitively) and their media types match. The first-seen
/// group keeps its position and title; later links are appended in
/// encounter order without URL deduplication. An empty year on the first
/// group is taken from the first later group that has one.
///
/// Deterministic for a fixed input order, and idempotent.
pub fn merge_titles(groups: Vec<TorrentTitleGroup>) -> Vec<TorrentTitleGroup> {
    let mut merged: Vec<TorrentTitleGroup> = Vec::with_capacity(groups.len());
    let mut index: HashMap<(String, MediaType), usize> = HashMap::new();

    for group in groups {
        let key = (merge_key(&group.title), group.media_type);
        match index.get(&key) {
            Some(&pos) => {
                let target = &mut merged[pos];
                debug!(
                    title = %target.title,
                    merged = %group.title,
                    links = group.links.len(),
                    "merging title group"
                );
                if target.year.is_none() {
                    target.year = group.year;
                }
                target.links.extend(group.links);
            }
            None => {
                index.insert(key, merged.len());
                merged.push(group);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DownloadLinkRecord, Year};

    fn link(url: &str) -> DownloadLinkRecord {
        DownloadLinkRecord {
            link: url.to_string(),
            info: String::new(),
            season: 0,
            episode: 0,
            source_name: "test".to_string(),
            size_mb: 0,
        }
    }

    fn group(title: &str, media_type: MediaType, links: &[&str]) -> TorrentTitleGroup {
        TorrentTitleGroup::new(title, media_type, None).with_links(links.iter().map(|u| link(u)))
    }

    fn urls(group: &TorrentTitleGroup) -> Vec<&str> {
        group.links.iter().map(|l| l.link.as_str()).collect()
    }

    #[test]
    fn test_whitespace_insensitive_merge() {
        let merged = merge_titles(vec![
            group("Foo Bar", MediaType::Movie, &["A"]),
            group("foobar", MediaType::Movie, &["B"]),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "Foo Bar");
        assert_eq!(urls(&merged[0]), vec!["A", "B"]);
    }

    #[test]
    fn test_media_type_must_match() {
        let merged = merge_titles(vec![
            group("foo", MediaType::Movie, &["A"]),
            group("foo", MediaType::Serial, &["B"]),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_order_and_no_url_dedup() {
        let merged = merge_titles(vec![
            group("b", MediaType::Movie, &["1"]),
            group("a", MediaType::Movie, &["2"]),
            group("b", MediaType::Movie, &["1", "3"]),
        ]);
        let titles: Vec<_> = merged.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
        assert_eq!(urls(&merged[0]), vec!["1", "1", "3"]);
    }

    #[test]
    fn test_fills_missing_year() {
        let year = Year::new(2020);
        let merged = merge_titles(vec![
            group("foo", MediaType::Movie, &[]),
            TorrentTitleGroup::new("foo", MediaType::Movie, year),
            TorrentTitleGroup::new("foo", MediaType::Movie, Year::new(2021)),
        ]);
        assert_eq!(merged[0].year, year);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            group("Foo Bar", MediaType::Movie, &["A"]),
            group("baz", MediaType::Movie, &["C"]),
            group("foobar", MediaType::Movie, &["B"]),
        ];
        let once = merge_titles(input);
        let twice = merge_titles(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_titles(Vec::new()).is_empty());
    }
}
