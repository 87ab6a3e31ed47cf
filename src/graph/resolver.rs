use crate::model::{InterfaceEntry, InterfaceTable};
use std::collections::BTreeSet;
use tracing::debug;

/// Names in the related closure of `seeds`.
///
/// Repeats full passes over `table` until one adds nothing. An entry already
/// in the closure pulls in every link target; an entry outside it joins when
/// one of its targets is in it. Seeds that `table` does not declare are
/// ignored. Link targets that `table` does not declare are still part of the
/// closure.
pub fn related_names<'a, I>(table: &InterfaceTable, seeds: I) -> BTreeSet<String>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut closure: BTreeSet<String> = seeds
		.into_iter()
		.filter(|name| table.contains(name))
		.map(str::to_string)
		.collect();

	let mut pass = 0;
	loop {
		pass += 1;
		let mut added = false;

		for entry in table.iter() {
			let targets = entry.links.targets();
			if closure.contains(&entry.name) {
				for target in targets {
					added |= closure.insert(target.clone());
				}
			} else if targets.iter().any(|target| closure.contains(target)) {
				closure.insert(entry.name.clone());
				added = true;
			}
		}

		debug!(pass, size = closure.len(), "related closure pass");
		if !added {
			break;
		}
	}

	closure
}

/// Every interface structurally related to `seeds`, in either direction.
///
/// Undeclared link targets appear as implicit entries.
pub fn related_closure<'a, I>(table: &InterfaceTable, seeds: I) -> InterfaceTable
where
	I: IntoIterator<Item = &'a str>,
{
	related_names(table, seeds)
		.into_iter()
		.map(|name| match table.get(&name) {
			Some(entry) => entry.clone(),
			None => InterfaceEntry::implicit(name),
		})
		.collect()
}

/// The physical interfaces backing `seeds`.
///
/// Takes the related closure and keeps hardware kinds plus implicit entries.
pub fn physical_closure<'a, I>(table: &InterfaceTable, seeds: I) -> InterfaceTable
where
	I: IntoIterator<Item = &'a str>,
{
	related_closure(table, seeds)
		.iter()
		.filter(|entry| entry.is_physical())
		.cloned()
		.collect()
}
