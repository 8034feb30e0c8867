//! States module - domain models, services, and traits.

mod states_model;
mod states_service;
mod states_traits;


pub use states_model::{NewState, State};
pub use states_service::StateService;
pub use states_traits::{StateRepositoryTrait, StateServiceTrait};
