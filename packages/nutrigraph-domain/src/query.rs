//! The fixed SPARQL templates this service runs. Query construction lives
//! with the reconciler so the adapter stays a dumb transport: variables
//! named here are the variables the fold callbacks read.

/// Ontology namespace of the food/disease dataset.
pub const ONTOLOGY_PREFIX: &str =
	"PREFIX ex: <http://www.semanticweb.org/gedeon/ontologies/2025/4/foods-diseases/>";

/// Trivial always-true pattern used as the graph-engine health probe.
pub const HEALTH_PROBE: &str = "ASK {}";

/// Results ordering and cap applied to keyword search, server-side.
pub const SEARCH_LIMIT: u32 = 20;

pub fn food_query() -> String {
	format!(
		"\
{ONTOLOGY_PREFIX}
SELECT ?food ?foodName ?imageUrl ?ingredients ?recipe ?calories ?eatingTime ?foodLocationArea ?isRawOrCooked ?disease ?diseaseName
WHERE {{
	?food a ex:Food ;
	      ex:foodName ?foodName .
	OPTIONAL {{
		?imageObj ex:isImageOf ?food ;
		          ex:imageUrl ?imageUrl .
	}}
	OPTIONAL {{ ?food ex:ingredients ?ingredients . }}
	OPTIONAL {{ ?food ex:recipe ?recipe . }}
	OPTIONAL {{ ?food ex:calorieIntake ?calories . }}
	OPTIONAL {{ ?food ex:eatingTime ?eatingTime . }}
	OPTIONAL {{ ?food ex:foodLocationArea ?foodLocationArea . }}
	OPTIONAL {{ ?food ex:isRawOrCooked ?isRawOrCooked . }}
	OPTIONAL {{
		?food ex:isRelatedTo ?disease .
		?disease ex:diseaseName ?diseaseName .
	}}
}}"
	)
}

pub fn disease_query() -> String {
	format!(
		"\
{ONTOLOGY_PREFIX}
SELECT ?disease ?name ?symptoms ?sex ?subjectKind ?family ?familyName ?doc ?docUrl ?treatment ?treatmentUrl
WHERE {{
	?disease a ex:Disease ;
	         ex:diseaseName ?name ;
	         ex:symptoms ?symptoms ;
	         ex:sex ?sex ;
	         ex:mostCommonSubjectKind ?subjectKind ;
	         ex:belongTo ?family .
	?family ex:diseaseFamilyName ?familyName .
	OPTIONAL {{
		?disease ex:isDocumentedBy ?doc .
		?doc ex:documentUrl ?docUrl .
	}}
	OPTIONAL {{
		?disease ex:hasTreatmentProtocol ?treatment .
		?treatment ex:documentUrl ?treatmentUrl .
	}}
}}"
	)
}

/// Case-insensitive substring search over food name, ingredients, and
/// related-disease name. The caller is responsible for rejecting blank
/// terms; the term is escaped here before interpolation.
pub fn food_search_query(term: &str) -> String {
	let term = sanitize_term(term);

	format!(
		"\
{ONTOLOGY_PREFIX}
SELECT DISTINCT ?food ?foodName ?imageUrl ?ingredients ?calories
WHERE {{
	?food a ex:Food ;
	      ex:foodName ?foodName .
	OPTIONAL {{
		?imageObj ex:isImageOf ?food ;
		          ex:imageUrl ?imageUrl .
	}}
	OPTIONAL {{ ?food ex:ingredients ?ingredients . }}
	OPTIONAL {{ ?food ex:calorieIntake ?calories . }}
	OPTIONAL {{
		?food ex:isRelatedTo ?disease .
		?disease ex:diseaseName ?diseaseName .
	}}
	FILTER (
		CONTAINS(LCASE(?foodName), LCASE(\"{term}\")) ||
		(BOUND(?ingredients) && CONTAINS(LCASE(?ingredients), LCASE(\"{term}\"))) ||
		(BOUND(?diseaseName) && CONTAINS(LCASE(?diseaseName), LCASE(\"{term}\")))
	)
}}
ORDER BY ?foodName
LIMIT {SEARCH_LIMIT}"
	)
}

/// Escapes the characters that would break out of the quoted literal the
/// term is interpolated into. A narrow guard, not a parser-level one; the
/// engine's native parameterization is the hardening path if this surface
/// ever takes untrusted traffic at scale.
pub fn sanitize_term(term: &str) -> String {
	term.replace('\\', "\\\\").replace('"', "\\\"").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sanitize_escapes_quotes_and_newlines() {
		assert_eq!(sanitize_term(r#"to"fu"#), r#"to\"fu"#);
		assert_eq!(sanitize_term("a\nb\rc"), "a b c");
		assert_eq!(sanitize_term(r"back\slash"), r"back\\slash");
	}

	#[test]
	fn search_query_embeds_the_escaped_term() {
		let query = food_search_query("bread\" }");

		assert!(query.contains(r#"LCASE("bread\" }")"#));
		assert!(query.contains("ORDER BY ?foodName"));
		assert!(query.contains("LIMIT 20"));
	}
}
