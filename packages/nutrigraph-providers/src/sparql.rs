//! Thin transport for the graph engine: submit a complete query string, get
//! rows back. No interpretation of row contents happens here.

use std::time::Duration;

use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::Deserialize;

use nutrigraph_config::Graph;
use nutrigraph_domain::binding::Binding;

use crate::{Error, Result};

const RESULTS_JSON: &str = "application/sparql-results+json";

#[derive(Debug, Deserialize)]
struct SelectEnvelope {
	results: SelectResults,
}

#[derive(Debug, Deserialize)]
struct SelectResults {
	bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
struct AskEnvelope {
	boolean: bool,
}

pub async fn select(cfg: &Graph, query: &str) -> Result<Vec<Binding>> {
	let body = request(cfg, query).await?;

	parse_select(&body)
}

pub async fn ask(cfg: &Graph, query: &str) -> Result<bool> {
	let body = request(cfg, query).await?;

	parse_ask(&body)
}

async fn request(cfg: &Graph, query: &str) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let res = client
		.get(&cfg.query_url)
		.query(&[("query", query)])
		.header(ACCEPT, RESULTS_JSON)
		.send()
		.await?;
	let status = res.status();

	if status == StatusCode::BAD_REQUEST {
		let message = res.text().await.unwrap_or_default();

		return Err(Error::MalformedQuery { message });
	}
	if !status.is_success() {
		let message = res.text().await.unwrap_or_default();

		return Err(Error::UpstreamStatus { status: status.as_u16(), message });
	}

	Ok(res.text().await?)
}

fn parse_select(body: &str) -> Result<Vec<Binding>> {
	let envelope: SelectEnvelope =
		serde_json::from_str(body).map_err(|err| Error::Decode { message: err.to_string() })?;

	Ok(envelope.results.bindings)
}

fn parse_ask(body: &str) -> Result<bool> {
	let envelope: AskEnvelope =
		serde_json::from_str(body).map_err(|err| Error::Decode { message: err.to_string() })?;

	Ok(envelope.boolean)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_select_bindings() {
		let body = r#"{
			"head": { "vars": ["food", "foodName", "calories"] },
			"results": { "bindings": [
				{
					"food": { "type": "uri", "value": "urn:food:F1" },
					"foodName": { "type": "literal", "value": "Apple", "xml:lang": "en" },
					"calories": {
						"type": "typed-literal",
						"datatype": "http://www.w3.org/2001/XMLSchema#integer",
						"value": "52"
					}
				},
				{}
			] }
		}"#;
		let rows = parse_select(body).expect("parse failed");

		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0].value("food"), Some("urn:food:F1"));
		assert_eq!(rows[0].value("foodName"), Some("Apple"));
		assert_eq!(rows[0].value("calories"), Some("52"));
		assert_eq!(rows[1].value("food"), None);
	}

	#[test]
	fn rejects_bodies_that_break_the_contract() {
		assert!(parse_select(r#"{"results": {}}"#).is_err());
		assert!(parse_select("not json").is_err());
	}

	#[test]
	fn parses_ask_responses() {
		assert!(parse_ask(r#"{"head": {}, "boolean": true}"#).expect("parse failed"));
		assert!(!parse_ask(r#"{"boolean": false}"#).expect("parse failed"));
	}
}
