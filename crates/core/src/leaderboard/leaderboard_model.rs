//! Leaderboard domain models and client-side paging.
//!
//! The remote service returns the whole board; filtering, ranking, and
//! pagination happen here, as pure reductions over the fetched rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One leaderboard row as returned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub country: Option<String>,
    pub total_trades: usize,
    pub win_rate: Decimal,
    pub net_profit: Decimal,
    pub level: u32,
}

/// Filter and paging parameters coming from the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    /// Case-insensitive substring match on display name.
    pub search: Option<String>,
    pub country: Option<String>,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        LeaderboardQuery {
            search: None,
            country: None,
            page: 0,
            page_size: 25,
        }
    }
}

/// A leaderboard row with its rank among the filtered set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPageMeta {
    /// Rows matching the filter, across all pages.
    pub total_row_count: usize,
}

/// Model for one page of the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    pub data: Vec<RankedEntry>,
    pub meta: LeaderboardPageMeta,
}

fn matches_query(entry: &LeaderboardEntry, query: &LeaderboardQuery) -> bool {
    if let Some(ref search) = query.search {
        let needle = search.to_lowercase();
        if !needle.is_empty() && !entry.display_name.to_lowercase().contains(&needle) {
            return false;
        }
    }
    if let Some(ref country) = query.country {
        if entry.country.as_deref() != Some(country.as_str()) {
            return false;
        }
    }
    true
}

/// Filters, ranks, and pages leaderboard rows.
///
/// Ranks are assigned after filtering, 1-based in descending net-profit
/// order (ties broken by user id for determinism), so a filtered board is
/// ranked among its own rows.
pub fn build_page(entries: Vec<LeaderboardEntry>, query: &LeaderboardQuery) -> LeaderboardPage {
    let mut filtered: Vec<LeaderboardEntry> = entries
        .into_iter()
        .filter(|entry| matches_query(entry, query))
        .collect();

    filtered.sort_by(|a, b| {
        b.net_profit
            .cmp(&a.net_profit)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let total_row_count = filtered.len();
    let data = filtered
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: index + 1,
            entry,
        })
        .skip(query.page.saturating_mul(query.page_size))
        .take(query.page_size)
        .collect();

    LeaderboardPage {
        data,
        meta: LeaderboardPageMeta { total_row_count },
    }
}
