use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use nutrigraph_domain::{disease::Disease, food::{Food, FoodSearchHit}};
use nutrigraph_service::{HealthReport, IndexedFoodsResponse, ServiceError};

use crate::{assets, state::AppState};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/api/health", get(health))
		.route("/api/foods", get(foods))
		.route("/api/foods/distinct", get(foods_from_index))
		.route("/api/diseases", get(diseases))
		.route("/api/search/foods", get(search_foods))
		.route("/images/{food}/{filename}", get(assets::image))
		.route("/documents/{*path}", get(assets::document))
		.with_state(state)
}

#[derive(Debug, Deserialize)]
struct SearchParams {
	q: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DistinctParams {
	limit: Option<u32>,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
	let report = state.service.health().await;
	let status =
		if report.healthy() { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };

	(status, Json(report))
}

async fn foods(State(state): State<AppState>) -> Result<Json<Vec<Food>>, ApiError> {
	let foods = state.service.list_foods().await?;

	Ok(Json(foods))
}

async fn diseases(State(state): State<AppState>) -> Result<Json<Vec<Disease>>, ApiError> {
	let diseases = state.service.list_diseases().await?;

	Ok(Json(diseases))
}

async fn search_foods(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<Vec<FoodSearchHit>>, ApiError> {
	let hits = state.service.search_foods(params.q.as_deref().unwrap_or_default()).await?;

	Ok(Json(hits))
}

async fn foods_from_index(
	State(state): State<AppState>,
	Query(params): Query<DistinctParams>,
) -> Result<Json<IndexedFoodsResponse>, ApiError> {
	let listing = state.service.foods_from_index(params.limit).await?;

	Ok(Json(listing))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	details: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error: String,
	details: Option<String>,
}
impl ApiError {
	pub fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
		Self { status, error: error.into(), details }
	}

	pub fn not_found(error: impl Into<String>, details: Option<String>) -> Self {
		Self::new(StatusCode::NOT_FOUND, error, details)
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidArgument { message } =>
				Self::new(StatusCode::BAD_REQUEST, message, None),
			ServiceError::NotFound { message } =>
				Self::new(StatusCode::NOT_FOUND, message, None),
			ServiceError::IndexEmpty { message } =>
				Self::new(StatusCode::NOT_FOUND, "Index empty".to_string(), Some(message)),
			ServiceError::MalformedQuery { message } => Self::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"Malformed query".to_string(),
				Some(message),
			),
			ServiceError::Unavailable { message } => Self::new(
				StatusCode::SERVICE_UNAVAILABLE,
				"Upstream unavailable".to_string(),
				Some(message),
			),
			ServiceError::Timeout { message } => Self::new(
				StatusCode::SERVICE_UNAVAILABLE,
				"Upstream timeout".to_string(),
				Some(message),
			),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.error, details: self.details };

		(self.status, Json(body)).into_response()
	}
}
