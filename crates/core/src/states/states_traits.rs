//! State repository and service traits.

use async_trait::async_trait;

use super::states_model::{NewState, State};
use crate::errors::Result;

/// Trait defining the contract for State repository operations.
///
/// Implementations handle persistence; a deleted state leaves purchases
/// pointing at it untouched; readers treat the dangling reference as "no state".
#[async_trait]
pub trait StateRepositoryTrait: Send + Sync {
    /// Creates a new state. `new_state.id` is always set by the service.
    async fn create(&self, new_state: NewState) -> Result<State>;

    /// Updates an existing state.
    async fn update(&self, state: NewState) -> Result<State>;

    /// Deletes a state by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, state_id: &str) -> Result<usize>;

    /// Retrieves a state by its ID.
    fn get_by_id(&self, state_id: &str) -> Result<State>;

    /// Lists all states.
    fn list(&self) -> Result<Vec<State>>;
}

/// Trait defining the contract for State service operations.
#[async_trait]
pub trait StateServiceTrait: Send + Sync {
    /// Lists all states ordered by name.
    fn list_states(&self) -> Result<Vec<State>>;

    fn get_state(&self, state_id: &str) -> Result<State>;

    /// Creates the state when it has no known ID, otherwise updates it.
    async fn save_state(&self, new_state: NewState) -> Result<State>;

    async fn delete_state(&self, state_id: &str) -> Result<()>;
}
