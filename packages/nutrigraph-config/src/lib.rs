mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Assets, Collection, Config, Graph, Index, Service};

use std::{env, fs, path::Path};

/// Builds the effective configuration: hardcoded defaults, overlaid with an
/// optional TOML file, overlaid with environment variables.
pub fn load(path: Option<&Path>) -> Result<Config> {
	let mut cfg = match path {
		Some(path) => {
			let raw = fs::read_to_string(path)
				.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

			toml::from_str(&raw)
				.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?
		},
		None => Config::default(),
	};

	apply_env(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.graph.query_url.trim().is_empty() {
		return Err(Error::Validation { message: "graph.query_url must be non-empty.".to_string() });
	}
	if cfg.graph.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "graph.timeout_ms must be greater than zero.".to_string(),
		});
	}
	for (label, collection) in [("index.food", &cfg.index.food), ("index.disease", &cfg.index.disease)]
	{
		if collection.url.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label}.url must be non-empty.") });
		}
		if collection.timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("{label}.timeout_ms must be greater than zero."),
			});
		}
	}
	if cfg.index.fetch_rows == 0 {
		return Err(Error::Validation {
			message: "index.fetch_rows must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn apply_env(cfg: &mut Config) {
	if let Ok(value) = env::var("HTTP_BIND") {
		cfg.service.http_bind = value;
	}
	if let Ok(value) = env::var("LOG_LEVEL") {
		cfg.service.log_level = value;
	}
	if let Ok(value) = env::var("SPARQL_URL") {
		cfg.graph.query_url = value;
	}
	if let Ok(value) = env::var("FOOD_SOLR_URL") {
		cfg.index.food.url = value;
	}
	if let Ok(value) = env::var("DISEASE_SOLR_URL") {
		cfg.index.disease.url = value;
	}
	if let Ok(value) = env::var("IMAGES_DIR") {
		cfg.assets.images_dir = value.into();
	}
	if let Ok(value) = env::var("DOCUMENTS_DIR") {
		cfg.assets.documents_dir = value.into();
	}
}
