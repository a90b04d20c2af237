mod auth_session;
mod object_store;
pub mod rating_aggregator;

pub use auth_session::AuthSession;
pub use object_store::ObjectStore;
