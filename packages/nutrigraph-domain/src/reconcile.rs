//! Folding flat binding rows into one record per entity.
//!
//! A graph SELECT with independent OPTIONAL blocks returns the Cartesian
//! product of the multi-valued relations, so one food with three images and
//! two diseases arrives as up to six rows. `fold_bindings` is the streaming
//! group-by that undoes that expansion: entities keep their first-seen
//! order, and per-field merge policies decide what each additional row
//! contributes.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::binding::Binding;

/// Reduces rows sharing `id_var` into one record per distinct identity.
///
/// `new_entity` runs once per identity with the first row that carries it;
/// `merge` runs for every row, including that first one. Rows where `id_var`
/// is unbound are dropped.
pub fn fold_bindings<T>(
	rows: &[Binding],
	id_var: &str,
	mut new_entity: impl FnMut(&str, &Binding) -> T,
	mut merge: impl FnMut(&mut T, &Binding),
) -> Vec<T> {
	let mut slots = AHashMap::new();
	let mut entities = Vec::new();

	for row in rows {
		let Some(id) = row.value(id_var) else {
			continue;
		};
		let slot = match slots.get(id) {
			Some(&slot) => slot,
			None => {
				entities.push(new_entity(id, row));
				slots.insert(id.to_string(), entities.len() - 1);

				entities.len() - 1
			},
		};

		merge(&mut entities[slot], row);
	}

	entities
}

/// First-write-wins policy for single-valued optional fields: later rows
/// carrying a different value are ignored.
pub fn first_write(slot: &mut Option<String>, value: Option<&str>) {
	if slot.is_none()
		&& let Some(value) = value
	{
		*slot = Some(value.to_string());
	}
}

/// An insertion-ordered set with an optional capacity cap. Duplicate and
/// past-cap inserts are no-ops, so membership checks stay O(1) instead of
/// rescanning the collection per row.
#[derive(Clone, Debug, Default)]
pub struct OrderedSet<T> {
	items: Vec<T>,
	seen: AHashSet<T>,
	cap: Option<usize>,
}
impl<T> OrderedSet<T>
where
	T: Clone + Eq + Hash,
{
	pub fn new() -> Self {
		Self { items: Vec::new(), seen: AHashSet::new(), cap: None }
	}

	pub fn with_cap(cap: usize) -> Self {
		Self { items: Vec::new(), seen: AHashSet::new(), cap: Some(cap) }
	}

	pub fn insert(&mut self, value: T) -> bool {
		if self.cap.map(|cap| self.items.len() >= cap).unwrap_or(false) {
			return false;
		}
		if !self.seen.insert(value.clone()) {
			return false;
		}

		self.items.push(value);

		true
	}

	pub fn items(&self) -> &[T] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn into_vec(self) -> Vec<T> {
		self.items
	}
}
impl<T> serde::Serialize for OrderedSet<T>
where
	T: serde::Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		self.items.serialize(serializer)
	}
}
