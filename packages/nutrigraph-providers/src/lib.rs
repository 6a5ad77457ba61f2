mod error;

pub mod solr;
pub mod sparql;

pub use error::{Error, Result};
