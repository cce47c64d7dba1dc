//! Typeahead search and fuzzy suggestions over campus locations.

use serde::Serialize;

use crate::document::NodeId;
use crate::graph::Graph;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_THRESHOLD: f64 = 0.8;

/// How a location matched a typeahead query. Lower ranks sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRank {
    Exact,
    Prefix,
    WordPrefix,
    Substring,
}

/// A location matching a typeahead query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: NodeId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub rank: MatchRank,
}

/// Filter locations whose name or id contains `query`, case-insensitively.
///
/// Results are ordered by [`MatchRank`], then by name. A blank query matches
/// nothing.
pub fn search_nodes(graph: &Graph, query: &str, limit: usize) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = graph
        .nodes()
        .iter()
        .filter_map(|node| {
            let name = node.name.to_lowercase();
            let id = node.id.to_lowercase();
            let rank = [match_rank(&name, &needle), match_rank(&id, &needle)]
                .into_iter()
                .flatten()
                .min()?;
            Some(SearchHit {
                id: node.id.clone(),
                name: node.name.clone(),
                lat: node.lat,
                lng: node.lng,
                rank,
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    hits.truncate(limit);
    hits
}

fn match_rank(haystack: &str, needle: &str) -> Option<MatchRank> {
    if haystack == needle {
        Some(MatchRank::Exact)
    } else if haystack.starts_with(needle) {
        Some(MatchRank::Prefix)
    } else if haystack
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .any(|word| word.starts_with(needle))
    {
        Some(MatchRank::WordPrefix)
    } else if haystack.contains(needle) {
        Some(MatchRank::Substring)
    } else {
        None
    }
}

impl Graph {
    /// Location names similar to `query`, best match first.
    pub fn fuzzy_node_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .nodes()
            .iter()
            .filter_map(|node| {
                let by_name = strsim::jaro_winkler(&needle, &node.name.to_lowercase());
                let by_id = strsim::jaro_winkler(&needle, &node.id.to_lowercase());
                let score = by_name.max(by_id);
                (score >= FUZZY_THRESHOLD).then_some((score, node.name.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
