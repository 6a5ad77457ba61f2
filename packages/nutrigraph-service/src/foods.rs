use nutrigraph_domain::{
	food::{Food, reconcile_foods},
	query,
};

use crate::{KgService, ServiceResult};

impl KgService {
	/// Live reconciliation against the graph store: canonical, unpaginated,
	/// every food entity.
	pub async fn list_foods(&self) -> ServiceResult<Vec<Food>> {
		let rows = self.providers.graph.select(&self.cfg.graph, &query::food_query()).await?;
		let foods = reconcile_foods(&rows);

		tracing::debug!(rows = rows.len(), foods = foods.len(), "Reconciled foods.");

		Ok(foods)
	}
}
