use crate::fragments::Fragment;
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Merge `overlay` into `base`.
///
/// Two mappings are merged key by key: keys found only in `base` are kept,
/// keys found only in `overlay` are appended and keys found in both are
/// merged recursively. Any other pair of values is resolved by replacing
/// `base` with `overlay`, so sequences and scalars are never concatenated.
pub fn deep_merge(base: &mut Value, overlay: Value) {
	match (base, overlay) {
		(Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
			for (key, value) in overlay_map {
				match base_map.get_mut(&key) {
					Some(existing) => deep_merge(existing, value),
					None => {
						base_map.insert(key, value);
					}
				}
			}
		}
		(base, overlay) => *base = overlay,
	}
}

/// Fold documents into one, later documents taking precedence.
///
/// Null documents (empty files) are skipped. No documents at all yield an
/// empty mapping.
pub fn merge_documents<I>(documents: I) -> Value
where
	I: IntoIterator<Item = Value>,
{
	let mut merged = Value::Mapping(Mapping::new());
	for document in documents {
		if document.is_null() {
			continue;
		}
		deep_merge(&mut merged, document);
	}
	merged
}

/// Merge loaded fragments in the order given.
pub fn merge_fragments(fragments: Vec<Fragment>) -> Value {
	merge_documents(fragments.into_iter().map(|fragment| {
		debug!(file = %fragment.path.display(), "merging fragment");
		fragment.document
	}))
}
