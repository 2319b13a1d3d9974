//! # authgate-database
//!
//! PostgreSQL connection management, migrations, and the concrete
//! [`UserStore`](authgate_entity::UserStore) adapter.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::user::PgUserStore;
