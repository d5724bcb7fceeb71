use std::sync::Arc;
use uuid::Uuid;

use async_trait::async_trait;

use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing balance targets.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    /// Creates a new GoalService instance.
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { goal_repository }
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals()
    }

    async fn create_goal(&self, mut new_goal: NewGoal) -> Result<Goal> {
        Self::validate_title(&new_goal.title)?;
        if new_goal.id.is_none() {
            new_goal.id = Some(Uuid::new_v4().to_string());
        }
        self.goal_repository.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, updated_goal: Goal) -> Result<Goal> {
        Self::validate_title(&updated_goal.title)?;
        self.goal_repository.update_goal(updated_goal).await
    }

    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        self.goal_repository.delete_goal(goal_id).await
    }
}
