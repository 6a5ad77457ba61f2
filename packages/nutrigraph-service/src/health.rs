use serde::Serialize;

use nutrigraph_domain::query;

use crate::KgService;

#[derive(Clone, Debug, Serialize)]
pub struct UpstreamHealth {
	pub ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthReport {
	pub status: String,
	pub graph: UpstreamHealth,
	pub index: UpstreamHealth,
}
impl HealthReport {
	pub fn healthy(&self) -> bool {
		self.graph.ok && self.index.ok
	}
}

impl KgService {
	/// Probes both upstreams. Never fails: errors become per-upstream
	/// detail, and the composite status is the only aggregation applied.
	pub async fn health(&self) -> HealthReport {
		let graph = match self.providers.graph.ask(&self.cfg.graph, query::HEALTH_PROBE).await {
			Ok(_) => UpstreamHealth { ok: true, detail: None },
			Err(err) => UpstreamHealth { ok: false, detail: Some(err.to_string()) },
		};
		let index = match self.providers.index.count(&self.cfg.index.food).await {
			Ok(_) => UpstreamHealth { ok: true, detail: None },
			Err(err) => UpstreamHealth { ok: false, detail: Some(err.to_string()) },
		};
		let status = if graph.ok && index.ok { "healthy" } else { "unhealthy" };

		HealthReport { status: status.to_string(), graph, index }
	}
}
