use nutrigraph_domain::{
	binding::{Binding, Term},
	disease::reconcile_diseases,
	docs::{disease_doc, food_doc},
	food::{reconcile_foods, reconcile_search_hits},
};

fn row(pairs: &[(&str, Term)]) -> Binding {
	let mut binding = Binding::default();

	for (var, term) in pairs {
		binding.0.insert(var.to_string(), term.clone());
	}

	binding
}

#[test]
fn folds_cartesian_rows_into_one_food() {
	let rows = vec![
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("imageUrl", Term::literal("http://img/1.jpg")),
		]),
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("imageUrl", Term::literal("http://img/2.jpg")),
		]),
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("disease", Term::uri("urn:disease:D1")),
			("diseaseName", Term::literal("Scurvy")),
		]),
	];
	let foods = reconcile_foods(&rows);

	assert_eq!(foods.len(), 1);

	let food = &foods[0];

	assert_eq!(food.uri, "urn:food:F1");
	assert_eq!(food.name, "Apple");
	assert_eq!(food.images.items(), ["http://img/1.jpg", "http://img/2.jpg"]);
	assert_eq!(food.related_diseases.len(), 1);
	assert_eq!(food.related_diseases.items()[0].uri, "urn:disease:D1");
	assert_eq!(food.related_diseases.items()[0].name, "Scurvy");
}

#[test]
fn one_record_per_distinct_identity() {
	let rows = vec![
		row(&[("food", Term::uri("urn:food:F1")), ("foodName", Term::literal("Apple"))]),
		row(&[("food", Term::uri("urn:food:F2")), ("foodName", Term::literal("Bread"))]),
		row(&[("food", Term::uri("urn:food:F1")), ("foodName", Term::literal("Apple"))]),
		row(&[("food", Term::uri("urn:food:F2")), ("foodName", Term::literal("Bread"))]),
		row(&[("food", Term::uri("urn:food:F2")), ("foodName", Term::literal("Bread"))]),
	];
	let foods = reconcile_foods(&rows);

	assert_eq!(foods.len(), 2);
	assert_eq!(foods[0].uri, "urn:food:F1");
	assert_eq!(foods[1].uri, "urn:food:F2");
}

#[test]
fn rows_without_the_identity_variable_are_dropped() {
	let rows = vec![
		row(&[("foodName", Term::literal("Orphan"))]),
		row(&[("food", Term::uri("urn:food:F1")), ("foodName", Term::literal("Apple"))]),
	];

	assert_eq!(reconcile_foods(&rows).len(), 1);
}

#[test]
fn caps_images_at_five_in_arrival_order() {
	let rows: Vec<Binding> = (1..=7)
		.map(|i| {
			row(&[
				("food", Term::uri("urn:food:F1")),
				("foodName", Term::literal("Apple")),
				("imageUrl", Term::literal(format!("http://img/{i}.jpg"))),
			])
		})
		.collect();
	let foods = reconcile_foods(&rows);

	assert_eq!(foods.len(), 1);
	assert_eq!(
		foods[0].images.items(),
		[
			"http://img/1.jpg",
			"http://img/2.jpg",
			"http://img/3.jpg",
			"http://img/4.jpg",
			"http://img/5.jpg"
		]
	);
}

#[test]
fn duplicate_images_collapse_before_the_cap_applies() {
	let urls = ["a", "b", "a", "c", "b", "d"];
	let rows: Vec<Binding> = urls
		.iter()
		.map(|url| {
			row(&[
				("food", Term::uri("urn:food:F1")),
				("foodName", Term::literal("Apple")),
				("imageUrl", Term::literal(*url)),
			])
		})
		.collect();
	let foods = reconcile_foods(&rows);

	assert_eq!(foods[0].images.items(), ["a", "b", "c", "d"]);
}

#[test]
fn malformed_calories_degrade_to_zero_without_failing_the_batch() {
	let rows = vec![
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("calories", Term::literal("not-a-number")),
		]),
		row(&[
			("food", Term::uri("urn:food:F2")),
			("foodName", Term::literal("Bread")),
			("calories", Term::literal("250")),
		]),
	];
	let foods = reconcile_foods(&rows);

	assert_eq!(foods.len(), 2);
	assert_eq!(foods[0].calories, Some(0));
	assert_eq!(foods[1].calories, Some(250));
}

#[test]
fn absent_calories_stay_absent() {
	let rows = vec![row(&[("food", Term::uri("urn:food:F1")), ("foodName", Term::literal("Apple"))])];

	assert_eq!(reconcile_foods(&rows)[0].calories, None);
}

#[test]
fn single_valued_fields_are_first_write_wins() {
	let rows = vec![
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("ingredients", Term::literal("apples")),
		]),
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("ingredients", Term::literal("something else entirely")),
		]),
	];

	assert_eq!(reconcile_foods(&rows)[0].ingredients.as_deref(), Some("apples"));
}

#[test]
fn same_disease_uri_with_two_names_surfaces_twice() {
	// Known upstream data-quality artifact: dedup is by (uri, name) pair.
	let rows = vec![
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("disease", Term::uri("urn:disease:D1")),
			("diseaseName", Term::literal("Scurvy")),
		]),
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("disease", Term::uri("urn:disease:D1")),
			("diseaseName", Term::literal("scurvy (historic)")),
		]),
	];

	assert_eq!(reconcile_foods(&rows)[0].related_diseases.len(), 2);
}

#[test]
fn disease_without_bound_name_is_not_recorded() {
	let rows = vec![row(&[
		("food", Term::uri("urn:food:F1")),
		("foodName", Term::literal("Apple")),
		("disease", Term::uri("urn:disease:D1")),
	])];

	assert!(reconcile_foods(&rows)[0].related_diseases.is_empty());
}

#[test]
fn reconciles_diseases_with_deduped_document_lists() {
	let base = [
		("disease", Term::uri("urn:disease:D1")),
		("name", Term::literal("Scurvy")),
		("symptoms", Term::literal("fatigue, gum disease")),
		("sex", Term::literal("any")),
		("subjectKind", Term::literal("sailor")),
		("family", Term::uri("urn:family:deficiency")),
		("familyName", Term::literal("Deficiency")),
	];
	let mut with_doc1 = base.to_vec();

	with_doc1.push(("docUrl", Term::literal("http://docs/scurvy-1.pdf")));

	let mut with_doc2 = base.to_vec();

	with_doc2.push(("docUrl", Term::literal("http://docs/scurvy-2.pdf")));
	with_doc2.push(("treatmentUrl", Term::literal("http://docs/vitamin-c.pdf")));

	let mut with_dup = base.to_vec();

	with_dup.push(("docUrl", Term::literal("http://docs/scurvy-1.pdf")));

	let rows = vec![row(&with_doc1), row(&with_doc2), row(&with_dup)];
	let diseases = reconcile_diseases(&rows);

	assert_eq!(diseases.len(), 1);

	let disease = &diseases[0];

	assert_eq!(disease.name, "Scurvy");
	assert_eq!(disease.family_name, "Deficiency");
	assert_eq!(
		disease.documents.items(),
		["http://docs/scurvy-1.pdf", "http://docs/scurvy-2.pdf"]
	);
	assert_eq!(disease.treatment_protocols.items(), ["http://docs/vitamin-c.pdf"]);
}

#[test]
fn missing_family_name_falls_back_to_unknown() {
	let rows = vec![row(&[
		("disease", Term::uri("urn:disease:D1")),
		("name", Term::literal("Scurvy")),
		("symptoms", Term::literal("fatigue")),
		("sex", Term::literal("any")),
		("subjectKind", Term::literal("sailor")),
		("family", Term::uri("urn:family:deficiency")),
	])];
	let diseases = reconcile_diseases(&rows);

	assert_eq!(diseases.len(), 1);
	assert_eq!(diseases[0].family_name, "Unknown");
}

#[test]
fn search_hits_use_the_reduced_projection() {
	let rows = vec![
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Tofu")),
			("imageUrl", Term::literal("http://img/tofu.jpg")),
		]),
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Tofu")),
			("ingredients", Term::literal("soybeans")),
			("calories", Term::literal("76")),
		]),
	];
	let hits = reconcile_search_hits(&rows);

	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0].name, "Tofu");
	assert_eq!(hits[0].ingredients, "soybeans");
	assert_eq!(hits[0].calories, 76);
	assert_eq!(hits[0].images.items(), ["http://img/tofu.jpg"]);
}

#[test]
fn food_doc_flattens_nested_collections() {
	let rows = vec![
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("imageUrl", Term::literal("http://img/1.jpg")),
			("disease", Term::uri("urn:disease:D1")),
			("diseaseName", Term::literal("Scurvy")),
		]),
		row(&[
			("food", Term::uri("urn:food:F1")),
			("foodName", Term::literal("Apple")),
			("disease", Term::uri("urn:disease:D2")),
			("diseaseName", Term::literal("Anemia")),
		]),
	];
	let foods = reconcile_foods(&rows);
	let doc = food_doc(&foods[0], "2025-06-03T00:00:00Z");

	assert_eq!(doc["id"], "urn:food:F1");
	assert_eq!(doc["food_uri"], "urn:food:F1");
	assert_eq!(doc["foodName"], "Apple");
	assert_eq!(doc["images"][0], "http://img/1.jpg");
	assert_eq!(doc["diseases"][0], "urn:disease:D1");
	assert_eq!(doc["diseases"][1], "urn:disease:D2");
	assert_eq!(doc["diseaseNames"][1], "Anemia");
	assert_eq!(doc["indexed_at"], "2025-06-03T00:00:00Z");
	assert!(doc.get("ingredients").is_none());
}

#[test]
fn disease_doc_uses_the_prefixed_id() {
	let rows = vec![row(&[
		("disease", Term::uri("http://example.org/kg/Scurvy")),
		("name", Term::literal("Scurvy")),
		("symptoms", Term::literal("fatigue")),
		("sex", Term::literal("any")),
		("subjectKind", Term::literal("sailor")),
		("family", Term::uri("urn:family:deficiency")),
		("familyName", Term::literal("Deficiency")),
	])];
	let diseases = reconcile_diseases(&rows);
	let doc = disease_doc(&diseases[0], "2025-06-03T00:00:00Z");

	assert_eq!(doc["id"], "disease_Scurvy");
	assert_eq!(doc["type"], "disease");
	assert_eq!(doc["disease_uri"], "http://example.org/kg/Scurvy");
	assert_eq!(doc["familyName"], "Deficiency");
}
