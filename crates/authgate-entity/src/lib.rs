//! # authgate-entity
//!
//! User domain models, role enumeration, the transient password wrapper,
//! and the polymorphic user-store contract implemented by the database
//! crate in production and by in-memory fakes in tests.

pub mod user;

pub use user::model::{CreateUser, CreatedUser, Credential, Profile, ProfileUpdate, UpdateProfile};
pub use user::password::Password;
pub use user::role::UserRole;
pub use user::store::UserStore;
