pub mod diseases;
pub mod foods;
pub mod health;
pub mod listing;
pub mod rebuild;
pub mod search;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

pub use health::{HealthReport, UpstreamHealth};
pub use listing::{IndexedFood, IndexedFoodsResponse};
pub use rebuild::{RebuildReport, StageReport};

use nutrigraph_config::{Collection, Config, Graph};
use nutrigraph_domain::binding::Binding;
use nutrigraph_providers::{solr, solr::DocPage, sparql};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The graph engine of record, queried live per request.
pub trait GraphProvider
where
	Self: Send + Sync,
{
	fn select<'a>(
		&'a self,
		cfg: &'a Graph,
		query: &'a str,
	) -> BoxFuture<'a, nutrigraph_providers::Result<Vec<Binding>>>;

	fn ask<'a>(
		&'a self,
		cfg: &'a Graph,
		query: &'a str,
	) -> BoxFuture<'a, nutrigraph_providers::Result<bool>>;
}

/// The secondary document index: a rebuildable denormalized copy, never the
/// source of truth.
pub trait IndexProvider
where
	Self: Send + Sync,
{
	fn count<'a>(&'a self, cfg: &'a Collection) -> BoxFuture<'a, nutrigraph_providers::Result<u64>>;

	fn select_docs<'a>(
		&'a self,
		cfg: &'a Collection,
		rows: u32,
	) -> BoxFuture<'a, nutrigraph_providers::Result<DocPage>>;

	fn delete_all<'a>(&'a self, cfg: &'a Collection)
	-> BoxFuture<'a, nutrigraph_providers::Result<()>>;

	fn add_docs<'a>(
		&'a self,
		cfg: &'a Collection,
		docs: &'a [Value],
	) -> BoxFuture<'a, nutrigraph_providers::Result<()>>;
}

#[derive(Clone)]
pub struct Providers {
	pub graph: Arc<dyn GraphProvider>,
	pub index: Arc<dyn IndexProvider>,
}
impl Providers {
	pub fn new(graph: Arc<dyn GraphProvider>, index: Arc<dyn IndexProvider>) -> Self {
		Self { graph, index }
	}
}
impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { graph: provider.clone(), index: provider }
	}
}

/// All read and rebuild operations over the knowledge graph and its
/// secondary index. Reconciliation state is request-local; the service
/// itself holds nothing mutable.
pub struct KgService {
	pub cfg: Config,
	pub providers: Providers,
}
impl KgService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidArgument { message: String },
	NotFound { message: String },
	IndexEmpty { message: String },
	MalformedQuery { message: String },
	Unavailable { message: String },
	Timeout { message: String },
}
impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidArgument { message } => write!(f, "Invalid argument: {message}"),
			Self::NotFound { message } => write!(f, "Not found: {message}"),
			Self::IndexEmpty { message } => write!(f, "Index empty: {message}"),
			Self::MalformedQuery { message } => write!(f, "Malformed query: {message}"),
			Self::Unavailable { message } => write!(f, "Upstream unavailable: {message}"),
			Self::Timeout { message } => write!(f, "Upstream timeout: {message}"),
		}
	}
}
impl std::error::Error for ServiceError {}
impl From<nutrigraph_providers::Error> for ServiceError {
	fn from(err: nutrigraph_providers::Error) -> Self {
		match err {
			nutrigraph_providers::Error::Unavailable { message } => Self::Unavailable { message },
			nutrigraph_providers::Error::Timeout { message } => Self::Timeout { message },
			nutrigraph_providers::Error::MalformedQuery { message } =>
				Self::MalformedQuery { message },
			nutrigraph_providers::Error::UpstreamStatus { status, message } =>
				Self::Unavailable { message: format!("status {status}: {message}") },
			nutrigraph_providers::Error::Decode { message } =>
				Self::Unavailable { message: format!("unexpected response: {message}") },
		}
	}
}

struct DefaultProviders;
impl GraphProvider for DefaultProviders {
	fn select<'a>(
		&'a self,
		cfg: &'a Graph,
		query: &'a str,
	) -> BoxFuture<'a, nutrigraph_providers::Result<Vec<Binding>>> {
		Box::pin(sparql::select(cfg, query))
	}

	fn ask<'a>(
		&'a self,
		cfg: &'a Graph,
		query: &'a str,
	) -> BoxFuture<'a, nutrigraph_providers::Result<bool>> {
		Box::pin(sparql::ask(cfg, query))
	}
}
impl IndexProvider for DefaultProviders {
	fn count<'a>(&'a self, cfg: &'a Collection) -> BoxFuture<'a, nutrigraph_providers::Result<u64>> {
		Box::pin(solr::count(cfg))
	}

	fn select_docs<'a>(
		&'a self,
		cfg: &'a Collection,
		rows: u32,
	) -> BoxFuture<'a, nutrigraph_providers::Result<DocPage>> {
		Box::pin(solr::select_docs(cfg, rows))
	}

	fn delete_all<'a>(
		&'a self,
		cfg: &'a Collection,
	) -> BoxFuture<'a, nutrigraph_providers::Result<()>> {
		Box::pin(solr::delete_all(cfg))
	}

	fn add_docs<'a>(
		&'a self,
		cfg: &'a Collection,
		docs: &'a [Value],
	) -> BoxFuture<'a, nutrigraph_providers::Result<()>> {
		Box::pin(solr::add_docs(cfg, docs))
	}
}
