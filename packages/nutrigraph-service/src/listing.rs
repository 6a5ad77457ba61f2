//! Fast listing reads against the secondary index. These see the graph as
//! of the last completed rebuild, not the current instant; an empty
//! collection is a distinct signal to run the indexer, never an empty
//! success.

use serde::Serialize;
use serde_json::Value;

use nutrigraph_domain::reconcile::OrderedSet;

use crate::{KgService, ServiceError, ServiceResult};

pub const DEFAULT_LIMIT: u32 = 10;

/// Stored documents may carry single- or multi-valued fields depending on
/// the index schema, so every field access tolerates both shapes.
#[derive(Clone, Debug, Serialize)]
pub struct IndexedFood {
	pub name: String,
	pub images: Vec<String>,
	pub calories: u32,
	#[serde(rename = "type")]
	pub food_type: String,
	pub tags: Vec<String>,
	pub categories: Vec<String>,
	pub ingredients: String,
	pub recipe: String,
	#[serde(rename = "relatedDiseases")]
	pub related_diseases: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct IndexedFoodsResponse {
	pub data: Vec<IndexedFood>,
	pub total: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub indexed_at: Option<String>,
}

impl KgService {
	pub async fn foods_from_index(&self, limit: Option<u32>) -> ServiceResult<IndexedFoodsResponse> {
		let food = &self.cfg.index.food;
		let total = self.providers.index.count(food).await?;

		if total == 0 {
			return Err(ServiceError::IndexEmpty {
				message: "No documents in the food index. Run the indexer first.".to_string(),
			});
		}

		let page = self.providers.index.select_docs(food, self.cfg.index.fetch_rows).await?;
		let limit = limit.unwrap_or(DEFAULT_LIMIT) as usize;
		let mut seen = OrderedSet::new();
		let mut data = Vec::new();
		let mut indexed_at = None;

		for doc in &page.docs {
			let uri = first_string(doc, "food_uri");

			if uri.is_empty() || !seen.insert(uri.clone()) {
				continue;
			}

			if indexed_at.is_none() {
				let stamp = first_string(doc, "indexed_at");

				if !stamp.is_empty() {
					indexed_at = Some(stamp);
				}
			}
			if data.len() < limit {
				data.push(project(doc, &uri));
			}
		}

		Ok(IndexedFoodsResponse { data, total: seen.len() as u64, indexed_at })
	}
}

fn project(doc: &Value, uri: &str) -> IndexedFood {
	let eating_time = string_field(doc, "eatingTime");
	let is_raw_or_cooked = string_field(doc, "isRawOrCooked");
	let food_location_area = string_field(doc, "foodLocationArea");
	let mut categories = Vec::new();

	if !eating_time.is_empty() {
		categories.push(format!("Meal: {eating_time}"));
	}
	if !is_raw_or_cooked.is_empty() {
		categories.push(format!("Prep: {is_raw_or_cooked}"));
	}
	if !food_location_area.is_empty() {
		categories.push(format!("Origin: {food_location_area}"));
	}

	let mut name = string_field(doc, "foodName");

	if name.is_empty() {
		name = uri.trim_end_matches('/').rsplit('/').next().unwrap_or("").to_string();
	}
	if name.is_empty() {
		name = "Unknown".to_string();
	}

	let mut images = list_field(doc, "images");

	images.truncate(nutrigraph_domain::food::MAX_FOOD_IMAGES);

	IndexedFood {
		name,
		images,
		calories: calories_field(doc),
		food_type: eating_time,
		tags: [is_raw_or_cooked, food_location_area]
			.into_iter()
			.filter(|tag| !tag.is_empty())
			.collect(),
		categories,
		ingredients: string_field(doc, "ingredients"),
		recipe: string_field(doc, "recipe"),
		related_diseases: list_field(doc, "diseaseNames"),
	}
}

fn first_string(doc: &Value, key: &str) -> String {
	match doc.get(key) {
		Some(Value::Array(items)) =>
			items.iter().find_map(|item| item.as_str()).unwrap_or_default().to_string(),
		Some(Value::String(value)) => value.clone(),
		_ => String::new(),
	}
}

fn string_field(doc: &Value, key: &str) -> String {
	match doc.get(key) {
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(|item| item.as_str())
			.filter(|item| !item.is_empty())
			.collect::<Vec<_>>()
			.join(", "),
		Some(Value::String(value)) => value.clone(),
		Some(Value::Number(value)) => value.to_string(),
		_ => String::new(),
	}
}

fn list_field(doc: &Value, key: &str) -> Vec<String> {
	match doc.get(key) {
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(|item| item.as_str())
			.filter(|item| !item.is_empty())
			.map(str::to_string)
			.collect(),
		Some(Value::String(value)) if !value.is_empty() => vec![value.clone()],
		_ => Vec::new(),
	}
}

fn calories_field(doc: &Value) -> u32 {
	match doc.get("calories") {
		Some(Value::Number(value)) => value.as_u64().unwrap_or(0) as u32,
		Some(Value::String(value)) => value.parse().unwrap_or(0),
		Some(Value::Array(items)) => match items.first() {
			Some(Value::Number(value)) => value.as_u64().unwrap_or(0) as u32,
			Some(Value::String(value)) => value.parse().unwrap_or(0),
			_ => 0,
		},
		_ => 0,
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn string_fields_tolerate_multi_valued_storage() {
		let doc = json!({ "ingredients": ["flour", "water"], "recipe": "bake" });

		assert_eq!(string_field(&doc, "ingredients"), "flour, water");
		assert_eq!(string_field(&doc, "recipe"), "bake");
		assert_eq!(string_field(&doc, "missing"), "");
	}

	#[test]
	fn calories_tolerate_numbers_strings_and_lists() {
		assert_eq!(calories_field(&json!({ "calories": 52 })), 52);
		assert_eq!(calories_field(&json!({ "calories": "52" })), 52);
		assert_eq!(calories_field(&json!({ "calories": [52] })), 52);
		assert_eq!(calories_field(&json!({ "calories": "plenty" })), 0);
		assert_eq!(calories_field(&json!({ "calories": -3 })), 0);
		assert_eq!(calories_field(&json!({})), 0);
	}

	#[test]
	fn projection_builds_categories_from_scalars() {
		let doc = json!({
			"food_uri": "urn:food:F1",
			"foodName": "Apple",
			"eatingTime": "breakfast",
			"isRawOrCooked": "raw",
			"images": ["a", "b", "c", "d", "e", "f"]
		});
		let food = project(&doc, "urn:food:F1");

		assert_eq!(food.name, "Apple");
		assert_eq!(food.food_type, "breakfast");
		assert_eq!(food.tags, ["raw"]);
		assert_eq!(food.categories, ["Meal: breakfast", "Prep: raw"]);
		assert_eq!(food.images.len(), 5);
	}

	#[test]
	fn nameless_documents_fall_back_to_the_uri_segment() {
		let food = project(&json!({}), "http://example.org/kg/Apple");

		assert_eq!(food.name, "Apple");
	}
}
