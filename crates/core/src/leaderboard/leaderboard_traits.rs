//! Leaderboard repository and service traits.

use async_trait::async_trait;

use super::leaderboard_model::{LeaderboardEntry, LeaderboardPage, LeaderboardQuery};
use crate::errors::Result;

/// Trait defining the contract for the leaderboard source.
#[async_trait]
pub trait LeaderboardRepositoryTrait: Send + Sync {
    /// Fetches the full leaderboard from the remote service.
    async fn fetch_entries(&self) -> Result<Vec<LeaderboardEntry>>;
}

/// Trait defining the contract for leaderboard service operations.
#[async_trait]
pub trait LeaderboardServiceTrait: Send + Sync {
    /// One filtered, ranked page of the board.
    async fn get_page(&self, query: &LeaderboardQuery) -> Result<LeaderboardPage>;
}
