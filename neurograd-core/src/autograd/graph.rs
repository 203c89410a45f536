use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Builds a topological sort of the computation graph rooted at `root`.
///
/// Returns every node reachable through parent references exactly once, in
/// post-order: a node is appended only after all of its parents. Iterating the
/// result from the end is a valid order for running backward rules.
///
/// Uses a `HashSet` keyed by [`NodeId`] (node address) so shared subexpressions
/// are visited once. The traversal keeps an explicit stack instead of recursing,
/// so long accumulation chains cannot overflow the call stack.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, parents_done): a node is pushed a second time once its parents are queued.
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, parents_done)) = stack.pop() {
        if parents_done {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let parents = node.parents();
        stack.push((node, true));
        // Reverse so the first operand is explored first.
        for parent in parents.into_iter().rev() {
            if !visited.contains(&parent.id()) {
                stack.push((parent, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
