//! In-memory stand-ins for the graph engine and the secondary index, plus
//! binding-row builders. Everything here is deterministic and networkless
//! so service and router tests can run anywhere.

use std::{
	collections::HashMap,
	sync::Mutex,
};

use serde_json::Value;

use nutrigraph_config::{Collection, Graph};
use nutrigraph_domain::binding::{Binding, Term};
use nutrigraph_providers::solr::DocPage;
use nutrigraph_service::{BoxFuture, GraphProvider, IndexProvider};

pub fn row(pairs: &[(&str, Term)]) -> Binding {
	let mut binding = Binding::default();

	for (var, term) in pairs {
		binding.0.insert(var.to_string(), term.clone());
	}

	binding
}

pub fn uri(value: impl Into<String>) -> Term {
	Term::uri(value)
}

pub fn lit(value: impl Into<String>) -> Term {
	Term::literal(value)
}

/// Graph engine fake: serves a fixed row set for every SELECT (or a routed
/// set per query marker) and records the query texts it was handed.
#[derive(Default)]
pub struct FakeGraph {
	rows: Vec<Binding>,
	routes: Vec<(String, Vec<Binding>)>,
	failure: Option<String>,
	pub queries: Mutex<Vec<String>>,
}
impl FakeGraph {
	pub fn with_rows(rows: Vec<Binding>) -> Self {
		Self { rows, ..Self::default() }
	}

	/// Routes a SELECT to the first row set whose marker appears in the
	/// query text; unmatched queries get the default row set.
	pub fn with_routes(routes: Vec<(&str, Vec<Binding>)>) -> Self {
		Self {
			routes: routes.into_iter().map(|(marker, rows)| (marker.to_string(), rows)).collect(),
			..Self::default()
		}
	}

	pub fn failing(message: impl Into<String>) -> Self {
		Self { failure: Some(message.into()), ..Self::default() }
	}

	pub fn last_query(&self) -> Option<String> {
		self.queries.lock().unwrap_or_else(|err| err.into_inner()).last().cloned()
	}

	fn rows_for(&self, query: &str) -> Vec<Binding> {
		for (marker, rows) in &self.routes {
			if query.contains(marker) {
				return rows.clone();
			}
		}

		self.rows.clone()
	}

	fn fail(&self) -> Option<nutrigraph_providers::Error> {
		self.failure
			.as_ref()
			.map(|message| nutrigraph_providers::Error::Unavailable { message: message.clone() })
	}
}
impl GraphProvider for FakeGraph {
	fn select<'a>(
		&'a self,
		_cfg: &'a Graph,
		query: &'a str,
	) -> BoxFuture<'a, nutrigraph_providers::Result<Vec<Binding>>> {
		self.queries.lock().unwrap_or_else(|err| err.into_inner()).push(query.to_string());

		Box::pin(async move {
			match self.fail() {
				Some(err) => Err(err),
				None => Ok(self.rows_for(query)),
			}
		})
	}

	fn ask<'a>(
		&'a self,
		_cfg: &'a Graph,
		query: &'a str,
	) -> BoxFuture<'a, nutrigraph_providers::Result<bool>> {
		self.queries.lock().unwrap_or_else(|err| err.into_inner()).push(query.to_string());

		Box::pin(async move {
			match self.fail() {
				Some(err) => Err(err),
				None => Ok(true),
			}
		})
	}
}

/// Secondary index fake: one document list per collection URL, with
/// switchable failure injection for the destructive operations.
#[derive(Default)]
pub struct FakeIndex {
	collections: Mutex<HashMap<String, Vec<Value>>>,
	fail_delete: bool,
	fail_add: bool,
}
impl FakeIndex {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing_delete() -> Self {
		Self { fail_delete: true, ..Self::default() }
	}

	pub fn failing_add() -> Self {
		Self { fail_add: true, ..Self::default() }
	}

	pub fn seed(&self, url: &str, docs: Vec<Value>) {
		self.collections
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.insert(url.to_string(), docs);
	}

	pub fn docs(&self, url: &str) -> Vec<Value> {
		self.collections
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.get(url)
			.cloned()
			.unwrap_or_default()
	}

	fn snapshot(&self, cfg: &Collection) -> Vec<Value> {
		self.docs(&cfg.url)
	}
}
impl IndexProvider for FakeIndex {
	fn count<'a>(&'a self, cfg: &'a Collection) -> BoxFuture<'a, nutrigraph_providers::Result<u64>> {
		let total = self.snapshot(cfg).len() as u64;

		Box::pin(async move { Ok(total) })
	}

	fn select_docs<'a>(
		&'a self,
		cfg: &'a Collection,
		rows: u32,
	) -> BoxFuture<'a, nutrigraph_providers::Result<DocPage>> {
		let docs = self.snapshot(cfg);
		let total = docs.len() as u64;
		let docs = docs.into_iter().take(rows as usize).collect();

		Box::pin(async move { Ok(DocPage { total, docs }) })
	}

	fn delete_all<'a>(
		&'a self,
		cfg: &'a Collection,
	) -> BoxFuture<'a, nutrigraph_providers::Result<()>> {
		Box::pin(async move {
			if self.fail_delete {
				return Err(nutrigraph_providers::Error::UpstreamStatus {
					status: 500,
					message: "delete rejected".to_string(),
				});
			}

			self.collections
				.lock()
				.unwrap_or_else(|err| err.into_inner())
				.insert(cfg.url.clone(), Vec::new());

			Ok(())
		})
	}

	fn add_docs<'a>(
		&'a self,
		cfg: &'a Collection,
		docs: &'a [Value],
	) -> BoxFuture<'a, nutrigraph_providers::Result<()>> {
		Box::pin(async move {
			if self.fail_add {
				return Err(nutrigraph_providers::Error::UpstreamStatus {
					status: 500,
					message: "add rejected".to_string(),
				});
			}

			self.collections
				.lock()
				.unwrap_or_else(|err| err.into_inner())
				.entry(cfg.url.clone())
				.or_default()
				.extend(docs.iter().cloned());

			Ok(())
		})
	}
}
