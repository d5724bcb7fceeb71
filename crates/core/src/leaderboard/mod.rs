//! Leaderboard module - models, client-side paging, service, and traits.

mod leaderboard_model;
mod leaderboard_service;
mod leaderboard_traits;


pub use leaderboard_model::{
    build_page, LeaderboardEntry, LeaderboardPage, LeaderboardPageMeta, LeaderboardQuery,
    RankedEntry,
};
pub use leaderboard_service::LeaderboardService;
pub use leaderboard_traits::{LeaderboardRepositoryTrait, LeaderboardServiceTrait};
