use std::collections::HashMap;

use serde::Deserialize;

/// One RDF term as encoded by the SPARQL 1.1 JSON results format. Language
/// tags and datatypes are accepted on the wire and ignored; reconciliation
/// only ever looks at the lexical value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum TermKind {
	Uri,
	Literal,
	TypedLiteral,
	Bnode,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Term {
	#[serde(rename = "type")]
	pub kind: TermKind,
	pub value: String,
}
impl Term {
	pub fn uri(value: impl Into<String>) -> Self {
		Self { kind: TermKind::Uri, value: value.into() }
	}

	pub fn literal(value: impl Into<String>) -> Self {
		Self { kind: TermKind::Literal, value: value.into() }
	}
}

/// One result row: a mapping from query variable to the term bound in that
/// row. Variables left unbound by an OPTIONAL block are simply absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Binding(pub HashMap<String, Term>);
impl Binding {
	/// The non-empty lexical value bound to `var`, if any. An empty string
	/// counts as unbound, matching how the upstream serializes missing
	/// optionals.
	pub fn value(&self, var: &str) -> Option<&str> {
		self.0.get(var).map(|term| term.value.as_str()).filter(|value| !value.is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_values_count_as_unbound() {
		let mut row = Binding::default();

		row.0.insert("name".to_string(), Term::literal(""));

		assert_eq!(row.value("name"), None);
		assert_eq!(row.value("missing"), None);
	}
}
