use std::sync::Arc;

use nutrigraph_service::KgService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<KgService>,
}
impl AppState {
	pub fn new(config: nutrigraph_config::Config) -> Self {
		Self { service: Arc::new(KgService::new(config)) }
	}

	pub fn with_service(service: KgService) -> Self {
		Self { service: Arc::new(service) }
	}
}
