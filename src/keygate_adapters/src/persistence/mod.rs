pub mod hashmap_user_store;
pub mod password_hash;
pub mod postgres_user_store;

pub use hashmap_user_store::HashMapUserStore;
pub use password_hash::{compute_password_hash, verify_password_hash};
pub use postgres_user_store::PostgresUserStore;
