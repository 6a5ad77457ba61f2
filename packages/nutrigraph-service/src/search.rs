use nutrigraph_domain::{
	food::{FoodSearchHit, reconcile_search_hits},
	query,
};

use crate::{KgService, ServiceError, ServiceResult};

impl KgService {
	/// Keyword search rewritten into a server-side case-insensitive
	/// substring filter over name, ingredients, and related-disease name.
	/// Ordering and the result cap are applied by the engine.
	pub async fn search_foods(&self, term: &str) -> ServiceResult<Vec<FoodSearchHit>> {
		if term.trim().is_empty() {
			return Err(ServiceError::InvalidArgument {
				message: "Query parameter 'q' is required.".to_string(),
			});
		}

		let rows = self
			.providers
			.graph
			.select(&self.cfg.graph, &query::food_search_query(term))
			.await?;

		Ok(reconcile_search_hits(&rows))
	}
}
