pub mod binding;
pub mod disease;
pub mod docs;
pub mod food;
pub mod query;
pub mod reconcile;
