use log::debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::leaderboard_model::{build_page, LeaderboardPage, LeaderboardQuery};
use super::leaderboard_traits::{LeaderboardRepositoryTrait, LeaderboardServiceTrait};
use crate::errors::Result;

/// Service for the gamified leaderboard view.
pub struct LeaderboardService {
    leaderboard_repository: Arc<dyn LeaderboardRepositoryTrait>,
}

impl LeaderboardService {
    /// Creates a new LeaderboardService instance.
    pub fn new(leaderboard_repository: Arc<dyn LeaderboardRepositoryTrait>) -> Self {
        Self {
            leaderboard_repository,
        }
    }
}

#[async_trait]
impl LeaderboardServiceTrait for LeaderboardService {
    async fn get_page(&self, query: &LeaderboardQuery) -> Result<LeaderboardPage> {
        let entries = self.leaderboard_repository.fetch_entries().await?;
        debug!(
            "Building leaderboard page {} from {} fetched rows",
            query.page,
            entries.len()
        );
        Ok(build_page(entries, query))
    }
}
