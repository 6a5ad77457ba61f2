//! Flat document projections submitted to the secondary index.
//!
//! Nested collections become plain arrays and optional scalars are simply
//! omitted, so the index schema stays schemaless-friendly. Every document
//! carries the rebuild stamp of the run that produced it.

use serde_json::{Map, Value, json};

use crate::{
	disease::Disease,
	food::Food,
	reconcile::OrderedSet,
};

pub fn food_doc(food: &Food, indexed_at: &str) -> Value {
	let mut doc = Map::new();
	let mut disease_uris = OrderedSet::new();
	let mut disease_names = OrderedSet::new();

	for disease in food.related_diseases.items() {
		disease_uris.insert(disease.uri.clone());
		disease_names.insert(disease.name.clone());
	}

	doc.insert("id".to_string(), json!(food.uri));
	doc.insert("food_uri".to_string(), json!(food.uri));
	doc.insert("foodName".to_string(), json!(food.name));
	doc.insert("images".to_string(), json!(food.images.items()));
	doc.insert("diseases".to_string(), json!(disease_uris.items()));
	doc.insert("diseaseNames".to_string(), json!(disease_names.items()));

	for (key, value) in [
		("ingredients", &food.ingredients),
		("recipe", &food.recipe),
		("eatingTime", &food.eating_time),
		("foodLocationArea", &food.food_location_area),
		("isRawOrCooked", &food.is_raw_or_cooked),
	] {
		if let Some(value) = value {
			doc.insert(key.to_string(), json!(value));
		}
	}
	if let Some(calories) = food.calories {
		doc.insert("calories".to_string(), json!(calories));
	}

	doc.insert("indexed_at".to_string(), json!(indexed_at));

	Value::Object(doc)
}

pub fn disease_doc(disease: &Disease, indexed_at: &str) -> Value {
	let mut doc = Map::new();

	doc.insert("id".to_string(), json!(disease_doc_id(&disease.uri)));
	doc.insert("type".to_string(), json!("disease"));
	doc.insert("disease_uri".to_string(), json!(disease.uri));
	doc.insert("diseaseName".to_string(), json!(disease.name));
	doc.insert("symptoms".to_string(), json!(disease.symptoms));
	doc.insert("sex".to_string(), json!(disease.sex));
	doc.insert("mostCommonSubjectKind".to_string(), json!(disease.most_common_subject_kind));
	doc.insert("familyName".to_string(), json!(disease.family_name));
	doc.insert("documents".to_string(), json!(disease.documents.items()));
	doc.insert("treatmentProtocols".to_string(), json!(disease.treatment_protocols.items()));
	doc.insert("indexed_at".to_string(), json!(indexed_at));

	Value::Object(doc)
}

/// Disease documents share the index namespace with foods, so their ids are
/// prefixed derivatives of the URI rather than the URI itself.
pub fn disease_doc_id(uri: &str) -> String {
	let segment = uri.trim_end_matches('/').rsplit('/').next().unwrap_or(uri);

	format!("disease_{segment}")
}
