use std::collections::HashSet;

use log::debug;

use crate::diff::result::{DiffEntry, DiffReport};
use crate::unique::{NodeWrapper, UniquePathOptions, UniquePaths};
use crate::XmlNode;

/// Diff two XML trees, deriving unique paths for both with `opts`.
pub fn compare_trees(left: &XmlNode, right: &XmlNode, opts: &UniquePathOptions) -> DiffReport {
    let left_paths = UniquePaths::build(left, opts);
    let right_paths = UniquePaths::build(right, opts);
    compare(&left_paths, &right_paths)
}

/// Reconcile two path maps built with the same options.
///
/// Paths present on one side only are reported with that side's elements.
/// Shared paths are reported with both sides when their elements differ as
/// sets: order is ignored and duplicates collapse, so a path holding `{a, a}`
/// on one side and `{a}` on the other is not a difference.
pub fn compare(left: &UniquePaths, right: &UniquePaths) -> DiffReport {
    let mut report = DiffReport::default();
    let (mut only_left, mut only_right, mut changed) = (0usize, 0usize, 0usize);

    for (path, nodes) in left.paths() {
        match right.get(path) {
            None => {
                only_left += 1;
                report.insert(DiffEntry::OnlyLeft {
                    path: path.clone(),
                    nodes: nodes.clone(),
                });
            }
            Some(right_nodes) if !same_content(nodes, right_nodes) => {
                changed += 1;
                report.insert(DiffEntry::Changed {
                    path: path.clone(),
                    left: nodes.clone(),
                    right: right_nodes.to_vec(),
                });
            }
            Some(_) => {}
        }
    }

    for (path, nodes) in right.paths() {
        if left.get(path).is_none() {
            only_right += 1;
            report.insert(DiffEntry::OnlyRight {
                path: path.clone(),
                nodes: nodes.clone(),
            });
        }
    }

    debug!("compare: only_left={only_left} only_right={only_right} changed={changed}");
    report
}

fn same_content(left: &[NodeWrapper], right: &[NodeWrapper]) -> bool {
    let left: HashSet<&NodeWrapper> = left.iter().collect();
    let right: HashSet<&NodeWrapper> = right.iter().collect();
    left == right
}
