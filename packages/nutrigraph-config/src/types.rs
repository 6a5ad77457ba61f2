use std::path::PathBuf;

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub service: Service,
	pub graph: Graph,
	pub index: Index,
	pub assets: Assets,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { http_bind: "0.0.0.0:5000".to_string(), log_level: "info".to_string() }
	}
}

/// The graph engine of record. `query_url` points at a SPARQL 1.1 endpoint
/// that answers SELECT and ASK queries with JSON results.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Graph {
	pub query_url: String,
	pub timeout_ms: u64,
}
impl Default for Graph {
	fn default() -> Self {
		Self {
			query_url: "http://fuseki:3030/food_disease_kg/sparql".to_string(),
			timeout_ms: default_timeout_ms(),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Index {
	#[serde(default = "default_food_collection")]
	pub food: Collection,
	#[serde(default = "default_disease_collection")]
	pub disease: Collection,
	/// Upper bound on documents fetched per listing read.
	pub fetch_rows: u32,
}
impl Default for Index {
	fn default() -> Self {
		Self {
			food: default_food_collection(),
			disease: default_disease_collection(),
			fetch_rows: 1_000,
		}
	}
}

/// One Solr collection. The client derives `/select` and `/update` from the
/// base URL.
#[derive(Clone, Debug, Deserialize)]
pub struct Collection {
	pub url: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Assets {
	pub images_dir: PathBuf,
	pub documents_dir: PathBuf,
}
impl Default for Assets {
	fn default() -> Self {
		Self {
			images_dir: PathBuf::from("assets/images"),
			documents_dir: PathBuf::from("assets/documents"),
		}
	}
}

fn default_food_collection() -> Collection {
	Collection { url: "http://solr:8983/solr/food_collection".to_string(), timeout_ms: default_timeout_ms() }
}

fn default_disease_collection() -> Collection {
	Collection {
		url: "http://solr:8983/solr/disease_collection".to_string(),
		timeout_ms: default_timeout_ms(),
	}
}

fn default_timeout_ms() -> u64 {
	10_000
}
