//! Static asset passthrough: image and document identifiers map to files
//! under the configured asset roots. Misses return the same JSON error
//! shape as the rest of the API.

use std::path::{Path as FsPath, PathBuf};

use axum::{
	extract::{Path, State},
	http::{StatusCode, header::CONTENT_TYPE},
	response::{IntoResponse, Response},
};

use crate::{routes::ApiError, state::AppState};

pub async fn image(
	State(state): State<AppState>,
	Path((food, filename)): Path<(String, String)>,
) -> Result<Response, ApiError> {
	let root = &state.service.cfg.assets.images_dir;
	let path = resolve(root, &[&food, &filename])
		.ok_or_else(|| ApiError::not_found("Image not found".to_string(), None))?;

	serve(&path, "Image not found").await
}

pub async fn document(
	State(state): State<AppState>,
	Path(path): Path<String>,
) -> Result<Response, ApiError> {
	let root = &state.service.cfg.assets.documents_dir;
	let segments: Vec<&str> = path.split('/').collect();
	let path = resolve(root, &segments)
		.ok_or_else(|| ApiError::not_found("Document not found".to_string(), None))?;

	serve(&path, "Document not found").await
}

/// Joins validated segments under the asset root. Empty, dot, and
/// backslash-bearing segments are rejected so the resolved path can never
/// escape the root.
fn resolve(root: &FsPath, segments: &[&str]) -> Option<PathBuf> {
	let mut path = root.to_path_buf();

	for segment in segments {
		if segment.is_empty() || *segment == "." || *segment == ".." || segment.contains('\\') {
			return None;
		}

		path.push(segment);
	}

	Some(path)
}

async fn serve(path: &FsPath, miss: &str) -> Result<Response, ApiError> {
	match tokio::fs::read(path).await {
		Ok(bytes) => Ok((
			StatusCode::OK,
			[(CONTENT_TYPE, content_type_for(path))],
			bytes,
		)
			.into_response()),
		Err(_) => Err(ApiError::not_found(
			miss.to_string(),
			Some(format!("No asset at {}.", path.display())),
		)),
	}
}

fn content_type_for(path: &FsPath) -> &'static str {
	match path.extension().and_then(|ext| ext.to_str()) {
		Some("jpg") | Some("jpeg") => "image/jpeg",
		Some("png") => "image/png",
		Some("gif") => "image/gif",
		Some("webp") => "image/webp",
		Some("svg") => "image/svg+xml",
		Some("pdf") => "application/pdf",
		Some("txt") => "text/plain",
		Some("html") => "text/html",
		Some("json") => "application/json",
		_ => "application/octet-stream",
	}
}
