use serde::Serialize;

use crate::{
	binding::Binding,
	reconcile::{OrderedSet, first_write, fold_bindings},
};

/// Foods keep at most this many image URLs; additional rows are dropped in
/// arrival order. Other collections are uncapped.
pub const MAX_FOOD_IMAGES: usize = 5;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
	pub uri: String,
	pub name: String,
	pub images: OrderedSet<String>,
	pub related_diseases: OrderedSet<DiseaseRef>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ingredients: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipe: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub eating_time: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub food_location_area: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_raw_or_cooked: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub calories: Option<u32>,
}

/// A related disease as seen from a food. Deduplicated by the full
/// (uri, name) pair: one URI observed under two names surfaces twice, which
/// is an upstream data-quality artifact we surface rather than hide.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct DiseaseRef {
	pub uri: String,
	pub name: String,
}

/// The reduced projection returned by keyword search.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchHit {
	pub uri: String,
	pub name: String,
	pub images: OrderedSet<String>,
	pub ingredients: String,
	pub calories: u32,
}

pub fn reconcile_foods(rows: &[Binding]) -> Vec<Food> {
	fold_bindings(rows, "food", new_food, merge_food)
}

pub fn reconcile_search_hits(rows: &[Binding]) -> Vec<FoodSearchHit> {
	fold_bindings(rows, "food", new_search_hit, merge_search_hit)
}

fn new_food(uri: &str, row: &Binding) -> Food {
	Food {
		uri: uri.to_string(),
		name: row.value("foodName").unwrap_or("Unknown").to_string(),
		images: OrderedSet::with_cap(MAX_FOOD_IMAGES),
		related_diseases: OrderedSet::new(),
		ingredients: None,
		recipe: None,
		eating_time: None,
		food_location_area: None,
		is_raw_or_cooked: None,
		calories: None,
	}
}

fn merge_food(food: &mut Food, row: &Binding) {
	first_write(&mut food.ingredients, row.value("ingredients"));
	first_write(&mut food.recipe, row.value("recipe"));
	first_write(&mut food.eating_time, row.value("eatingTime"));
	first_write(&mut food.food_location_area, row.value("foodLocationArea"));
	first_write(&mut food.is_raw_or_cooked, row.value("isRawOrCooked"));

	if food.calories.is_none()
		&& let Some(raw) = row.value("calories")
	{
		food.calories = Some(parse_calories(raw));
	}
	if let Some(url) = row.value("imageUrl") {
		food.images.insert(url.to_string());
	}
	if let (Some(uri), Some(name)) = (row.value("disease"), row.value("diseaseName")) {
		food.related_diseases.insert(DiseaseRef { uri: uri.to_string(), name: name.to_string() });
	}
}

fn new_search_hit(uri: &str, row: &Binding) -> FoodSearchHit {
	FoodSearchHit {
		uri: uri.to_string(),
		name: row.value("foodName").unwrap_or("Unknown").to_string(),
		images: OrderedSet::with_cap(MAX_FOOD_IMAGES),
		ingredients: String::new(),
		calories: 0,
	}
}

fn merge_search_hit(hit: &mut FoodSearchHit, row: &Binding) {
	if hit.ingredients.is_empty()
		&& let Some(value) = row.value("ingredients")
	{
		hit.ingredients = value.to_string();
	}
	if hit.calories == 0
		&& let Some(raw) = row.value("calories")
	{
		hit.calories = parse_calories(raw);
	}
	if let Some(url) = row.value("imageUrl") {
		hit.images.insert(url.to_string());
	}
}

/// Calorie literals come from hand-authored metadata and are not trusted:
/// anything that does not parse as a non-negative integer degrades to 0
/// without failing the entity.
pub fn parse_calories(raw: &str) -> u32 {
	raw.trim().parse().unwrap_or(0)
}
