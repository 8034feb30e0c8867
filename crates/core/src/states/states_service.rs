use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::states_model::{NewState, State};
use super::states_traits::{StateRepositoryTrait, StateServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing states and their tax values
pub struct StateService {
    repository: Arc<dyn StateRepositoryTrait>,
}

impl StateService {
    pub fn new(repository: Arc<dyn StateRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn exists(&self, state_id: &str) -> Result<bool> {
        match self.repository.get_by_id(state_id) {
            Ok(_) => Ok(true),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl StateServiceTrait for StateService {
    fn list_states(&self) -> Result<Vec<State>> {
        let mut states = self.repository.list()?;
        states.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(states)
    }

    fn get_state(&self, state_id: &str) -> Result<State> {
        self.repository.get_by_id(state_id)
    }

    async fn save_state(&self, mut new_state: NewState) -> Result<State> {
        new_state.validate()?;

        if let Some(state_id) = new_state.id.as_deref() {
            if self.exists(state_id)? {
                debug!("Updating state {} ({})", state_id, new_state.name);
                return self.repository.update(new_state).await;
            }
        }

        let state_id = new_state
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        debug!("Creating state {} ({})", state_id, new_state.name);
        self.repository.create(new_state).await
    }

    async fn delete_state(&self, state_id: &str) -> Result<()> {
        debug!("Deleting state {}", state_id);
        self.repository.delete(state_id).await?;
        Ok(())
    }
}
