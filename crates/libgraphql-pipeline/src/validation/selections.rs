//! Traversals over selection sets that follow fragment spreads into the
//! named fragments they target.
//!
//! Each traversal explores a named fragment at most once. Results for a
//! fragment are memoized, and a spread back into a fragment that is still
//! being explored is cut, so cycles never loop.

use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use std::collections::HashMap;
use std::collections::HashSet;

/// The distinct names of the fragments spread anywhere below `id`, in the
/// order they first appear. Does not follow the spreads.
pub(super) fn spread_names(document: &QueryDocument, id: PartId) -> Vec<&str> {
    let mut seen = HashSet::new();
    document.descendants(id)
        .into_iter()
        .filter_map(|desc_id| match document.part(desc_id).data() {
            PartData::FragmentSpread { fragment_name } => Some(fragment_name.as_str()),
            _ => None,
        })
        .filter(|fragment_name| seen.insert(*fragment_name))
        .collect()
}

/// Every named fragment reachable from `id` through spreads, transitively,
/// in the order they are first reached.
pub(super) fn reachable_fragments(document: &QueryDocument, id: PartId) -> Vec<PartId> {
    let mut seen = HashSet::new();
    let mut reachable = vec![];
    let mut pending = spread_names(document, id);
    pending.reverse();
    while let Some(fragment_name) = pending.pop() {
        if !seen.insert(fragment_name) {
            continue;
        }
        let Some(fragment) = document.named_fragment(fragment_name) else {
            continue;
        };
        reachable.push(fragment.id());
        let mut next = spread_names(document, fragment.id());
        next.reverse();
        pending.extend(next);
    }
    reachable
}

/// Every `VariableReference` used by an operation: those within the
/// operation itself and those within every fragment it reaches.
pub(super) fn variable_usages(document: &QueryDocument, operation: PartId) -> Vec<PartId> {
    std::iter::once(operation)
        .chain(reachable_fragments(document, operation))
        .flat_map(|id| document.descendants(id))
        .filter(|id| document.part(*id).kind() == DocumentPartKind::VariableReference)
        .collect()
}

/// The field selections that make up a selection set once inline fragments
/// and fragment spreads are flattened away, memoized by the part owning the
/// selection set. A fragment spread many times is only collected once.
///
/// A field reached more than once through different spreads is listed
/// once, at its first position.
#[derive(Debug, Default)]
pub(super) struct CollectedFields {
    by_owner: HashMap<PartId, Vec<PartId>>,
    in_progress: HashSet<PartId>,
}
impl CollectedFields {
    pub(super) fn of(&mut self, document: &QueryDocument, id: PartId) -> &[PartId] {
        if !self.by_owner.contains_key(&id) {
            self.in_progress.insert(id);
            let mut seen = HashSet::new();
            let mut fields = vec![];
            self.collect_into(document, id, &mut seen, &mut fields);
            self.in_progress.remove(&id);
            self.by_owner.insert(id, fields);
        }
        self.by_owner.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    fn collect_into(
        &mut self,
        document: &QueryDocument,
        id: PartId,
        seen: &mut HashSet<PartId>,
        fields: &mut Vec<PartId>,
    ) {
        for child_id in document.children(id).iter() {
            match document.part(child_id).data() {
                PartData::FieldSelection { .. } => {
                    if seen.insert(child_id) {
                        fields.push(child_id);
                    }
                },
                PartData::InlineFragment { .. } =>
                    self.collect_into(document, child_id, seen, fields),
                PartData::FragmentSpread { fragment_name } => {
                    let Some(fragment) = document.named_fragment(fragment_name) else {
                        continue;
                    };
                    let fragment_id = fragment.id();
                    if self.in_progress.contains(&fragment_id) {
                        continue;
                    }
                    for field_id in self.of(document, fragment_id) {
                        if seen.insert(*field_id) {
                            fields.push(*field_id);
                        }
                    }
                },
                _ => (),
            }
        }
    }
}

/// How many levels of field selections are nested below a part, memoized
/// per named fragment.
///
/// `{ a }` has depth 1, `{ a { b } }` has depth 2. Fragments count toward
/// the depth of the selection they are spread into.
#[derive(Debug, Default)]
pub(super) struct SelectionDepths {
    by_fragment: HashMap<PartId, usize>,
    in_progress: HashSet<PartId>,
}
impl SelectionDepths {
    pub(super) fn of(&mut self, document: &QueryDocument, id: PartId) -> usize {
        let mut depth = 0;
        for child_id in document.children(id).iter() {
            let child_depth = match document.part(child_id).data() {
                PartData::FieldSelection { .. } => 1 + self.of(document, child_id),
                PartData::InlineFragment { .. } => self.of(document, child_id),
                PartData::FragmentSpread { fragment_name } => {
                    let Some(fragment) = document.named_fragment(fragment_name) else {
                        continue;
                    };
                    self.of_fragment(document, fragment.id())
                },
                _ => continue,
            };
            depth = depth.max(child_depth);
        }
        depth
    }

    fn of_fragment(&mut self, document: &QueryDocument, fragment_id: PartId) -> usize {
        if let Some(depth) = self.by_fragment.get(&fragment_id) {
            return *depth;
        }
        if !self.in_progress.insert(fragment_id) {
            return 0;
        }
        let depth = self.of(document, fragment_id);
        self.in_progress.remove(&fragment_id);
        self.by_fragment.insert(fragment_id, depth);
        depth
    }
}

/// Every cycle formed by fragment spreads among the named fragments of
/// `document`.
///
/// Each cycle is listed once, rotated so it starts at its lexicographically
/// smallest fragment name and closed by repeating that name at the end
/// (e.g. `["A", "B", "A"]`).
pub(super) fn fragment_cycles(document: &QueryDocument) -> Vec<Vec<String>> {
    let mut search = CycleSearch {
        cycles: vec![],
        document,
        explored: HashSet::new(),
        path: vec![],
        seen_cycles: HashSet::new(),
    };
    for fragment_name in document.named_fragments().keys() {
        if !search.explored.contains(fragment_name.as_str()) {
            search.explore(fragment_name);
        }
    }
    search.cycles
}

/// Depth-first search that enters each fragment once. A spread into a
/// fragment on the current path closes a cycle. A spread into a fragment
/// explored earlier cannot close a new one through this path.
struct CycleSearch<'d> {
    cycles: Vec<Vec<String>>,
    document: &'d QueryDocument,
    explored: HashSet<&'d str>,
    path: Vec<&'d str>,
    seen_cycles: HashSet<Vec<String>>,
}
impl<'d> CycleSearch<'d> {
    fn explore(&mut self, fragment_name: &'d str) {
        let Some(fragment) = self.document.named_fragment(fragment_name) else {
            return;
        };
        self.explored.insert(fragment_name);
        self.path.push(fragment_name);
        for spread_name in spread_names(self.document, fragment.id()) {
            if let Some(start) = self.path.iter().position(|name| *name == spread_name) {
                let cycle = normalize_cycle(&self.path[start..]);
                if self.seen_cycles.insert(cycle.clone()) {
                    self.cycles.push(cycle);
                }
            } else if !self.explored.contains(spread_name) {
                self.explore(spread_name);
            }
        }
        self.path.pop();
    }
}

/// Rotate `cycle` (given without its closing repeat) so it starts at its
/// smallest name, then close it.
fn normalize_cycle(cycle: &[&str]) -> Vec<String> {
    let min_idx =
        cycle.iter()
            .enumerate()
            .min_by_key(|(_, name)| **name)
            .map(|(idx, _)| idx)
            .unwrap_or(0);

    let mut normalized: Vec<String> =
        cycle[min_idx..].iter()
            .chain(cycle[..min_idx].iter())
            .map(|name| name.to_string())
            .collect();
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}
