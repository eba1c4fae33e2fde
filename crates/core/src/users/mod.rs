//! Users module - identity records mirrored from the identity provider.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{UpsertUser, User};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
