use serde::Serialize;

use crate::{
	binding::Binding,
	reconcile::{OrderedSet, fold_bindings},
};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
	pub uri: String,
	pub name: String,
	pub symptoms: String,
	pub sex: String,
	pub most_common_subject_kind: String,
	pub family: String,
	/// Defaults to "Unknown" only when the family name is genuinely unbound;
	/// the disease itself is never dropped over it.
	pub family_name: String,
	pub documents: OrderedSet<String>,
	pub treatment_protocols: OrderedSet<String>,
}

pub fn reconcile_diseases(rows: &[Binding]) -> Vec<Disease> {
	fold_bindings(rows, "disease", new_disease, merge_disease)
}

fn new_disease(uri: &str, row: &Binding) -> Disease {
	Disease {
		uri: uri.to_string(),
		name: row.value("name").unwrap_or_default().to_string(),
		symptoms: row.value("symptoms").unwrap_or_default().to_string(),
		sex: row.value("sex").unwrap_or_default().to_string(),
		most_common_subject_kind: row.value("subjectKind").unwrap_or_default().to_string(),
		family: row.value("family").unwrap_or_default().to_string(),
		family_name: row.value("familyName").unwrap_or("Unknown").to_string(),
		documents: OrderedSet::new(),
		treatment_protocols: OrderedSet::new(),
	}
}

fn merge_disease(disease: &mut Disease, row: &Binding) {
	if let Some(url) = row.value("docUrl") {
		disease.documents.insert(url.to_string());
	}
	if let Some(url) = row.value("treatmentUrl") {
		disease.treatment_protocols.insert(url.to_string());
	}
}
