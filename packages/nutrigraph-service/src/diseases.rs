use nutrigraph_domain::{
	disease::{Disease, reconcile_diseases},
	query,
};

use crate::{KgService, ServiceResult};

impl KgService {
	pub async fn list_diseases(&self) -> ServiceResult<Vec<Disease>> {
		let rows = self.providers.graph.select(&self.cfg.graph, &query::disease_query()).await?;
		let diseases = reconcile_diseases(&rows);

		tracing::debug!(rows = rows.len(), diseases = diseases.len(), "Reconciled diseases.");

		Ok(diseases)
	}
}
