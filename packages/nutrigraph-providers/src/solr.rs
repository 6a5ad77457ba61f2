//! Client for the secondary document index. Reads go through `/select`;
//! the rebuild path pairs a destructive delete-by-query-all with a JSON
//! bulk add against `/update`.

use std::time::Duration;

use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;

use nutrigraph_config::Collection;

use crate::{Error, Result};

const DELETE_ALL_BODY: &str = "<delete><query>*:*</query></delete>";

#[derive(Debug, Deserialize)]
struct SelectEnvelope {
	response: SelectBody,
}

#[derive(Debug, Deserialize)]
struct SelectBody {
	#[serde(rename = "numFound")]
	num_found: u64,
	#[serde(default)]
	docs: Vec<Value>,
}

/// One page of stored documents plus the collection-wide total.
#[derive(Clone, Debug)]
pub struct DocPage {
	pub total: u64,
	pub docs: Vec<Value>,
}

/// Document count without fetching any documents.
pub async fn count(cfg: &Collection) -> Result<u64> {
	Ok(select_docs(cfg, 0).await?.total)
}

pub async fn select_docs(cfg: &Collection, rows: u32) -> Result<DocPage> {
	let client = client(cfg)?;
	let res = client
		.get(format!("{}/select", base_url(cfg)))
		.query(&[("q", "*:*"), ("rows", &rows.to_string()), ("wt", "json")])
		.send()
		.await?;
	let status = res.status();

	if !status.is_success() {
		let message = res.text().await.unwrap_or_default();

		return Err(Error::UpstreamStatus { status: status.as_u16(), message });
	}

	parse_select(&res.text().await?)
}

/// Clears the whole collection. The caller decides whether new documents
/// follow; a reader hitting the window in between sees an empty collection.
pub async fn delete_all(cfg: &Collection) -> Result<()> {
	let client = client(cfg)?;
	let res = client
		.post(format!("{}/update", base_url(cfg)))
		.query(&[("commit", "true")])
		.header(CONTENT_TYPE, "application/xml")
		.body(DELETE_ALL_BODY)
		.send()
		.await?;

	expect_success(res).await
}

pub async fn add_docs(cfg: &Collection, docs: &[Value]) -> Result<()> {
	let client = client(cfg)?;
	let res = client
		.post(format!("{}/update", base_url(cfg)))
		.query(&[("commit", "true")])
		.json(docs)
		.send()
		.await?;

	expect_success(res).await
}

fn client(cfg: &Collection) -> Result<Client> {
	Ok(Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?)
}

fn base_url(cfg: &Collection) -> &str {
	cfg.url.trim_end_matches('/')
}

async fn expect_success(res: reqwest::Response) -> Result<()> {
	let status = res.status();

	if !status.is_success() {
		let message = res.text().await.unwrap_or_default();

		return Err(Error::UpstreamStatus { status: status.as_u16(), message });
	}

	Ok(())
}

fn parse_select(body: &str) -> Result<DocPage> {
	let envelope: SelectEnvelope =
		serde_json::from_str(body).map_err(|err| Error::Decode { message: err.to_string() })?;

	Ok(DocPage { total: envelope.response.num_found, docs: envelope.response.docs })
}
