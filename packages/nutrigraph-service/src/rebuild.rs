//! Full rebuild of the secondary index from the graph store.
//!
//! Each entity kind runs its own pipeline: query, reconcile, flatten, clear
//! the collection, bulk-submit. The clear only happens once reconciliation
//! has succeeded, so a failed upstream read leaves the previous index
//! intact; a failure after the clear leaves the accepted consistency window
//! visible to readers until the next successful run. The two kinds are
//! independent: a food-side failure does not stop the disease rebuild.

use serde::Serialize;
use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use nutrigraph_domain::{
	disease::reconcile_diseases,
	docs::{disease_doc, food_doc},
	food::reconcile_foods,
	query,
};

use crate::{KgService, ServiceResult};

#[derive(Clone, Debug, Serialize)]
pub struct StageReport {
	pub indexed: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RebuildReport {
	pub foods: StageReport,
	pub diseases: StageReport,
	pub indexed_at: String,
}
impl RebuildReport {
	pub fn succeeded(&self) -> bool {
		self.foods.error.is_none() && self.diseases.error.is_none()
	}
}

impl KgService {
	/// Rebuilds both collections from scratch. Must not run concurrently
	/// with itself; the single operator-triggered indexer job is the only
	/// expected caller.
	pub async fn rebuild_index(&self) -> RebuildReport {
		let indexed_at =
			OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| String::new());
		let foods = stage(self.rebuild_foods(&indexed_at).await, "food");
		let diseases = stage(self.rebuild_diseases(&indexed_at).await, "disease");

		RebuildReport { foods, diseases, indexed_at }
	}

	async fn rebuild_foods(&self, indexed_at: &str) -> ServiceResult<u64> {
		let rows = self.providers.graph.select(&self.cfg.graph, &query::food_query()).await?;
		let foods = reconcile_foods(&rows);
		let docs: Vec<Value> = foods.iter().map(|food| food_doc(food, indexed_at)).collect();

		self.replace_collection(&self.cfg.index.food, &docs).await?;

		Ok(docs.len() as u64)
	}

	async fn rebuild_diseases(&self, indexed_at: &str) -> ServiceResult<u64> {
		let rows = self.providers.graph.select(&self.cfg.graph, &query::disease_query()).await?;
		let diseases = reconcile_diseases(&rows);
		let docs: Vec<Value> =
			diseases.iter().map(|disease| disease_doc(disease, indexed_at)).collect();

		self.replace_collection(&self.cfg.index.disease, &docs).await?;

		Ok(docs.len() as u64)
	}

	async fn replace_collection(
		&self,
		collection: &nutrigraph_config::Collection,
		docs: &[Value],
	) -> ServiceResult<()> {
		self.providers.index.delete_all(collection).await?;

		if !docs.is_empty() {
			self.providers.index.add_docs(collection, docs).await?;
		}

		Ok(())
	}
}

fn stage(result: ServiceResult<u64>, kind: &str) -> StageReport {
	match result {
		Ok(indexed) => {
			tracing::info!(kind, indexed, "Collection rebuilt.");

			StageReport { indexed, error: None }
		},
		Err(err) => {
			tracing::warn!(kind, error = %err, "Collection rebuild failed.");

			StageReport { indexed: 0, error: Some(err.to_string()) }
		},
	}
}
