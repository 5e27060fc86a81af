// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document structure rules - headings and the page title

use crate::analyzers::predicates::{has_heading, has_title, is_element, is_heading};
use crate::analyzers::Rule;
use crate::dom::{NodeId, NodeRef};
use crate::issues::{IssueKey, IssueKind, IssueSet};
use std::collections::HashMap;

/// Nodes containing a heading whose parent holds no `title`.
///
/// Every ancestor of a heading is a candidate, the root included; the
/// root has no parent and therefore never sees a title.
pub struct HeadingTitleRule;

impl Rule for HeadingTitleRule {
    fn name(&self) -> &str {
        "heading-title"
    }

    fn description(&self) -> &str {
        "Content with headings must be accompanied by a title element"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if has_heading(node) && !node.parent().is_some_and(has_title) {
            issues.record(IssueKey::new(IssueKind::HeadingWithoutTitle));
        }
    }

    /// Same occurrences as `check_node` on every node, computed bottom-up
    /// so each subtree is searched once.
    fn check(&self, start: NodeRef<'_>, issues: &mut IssueSet) {
        let order: Vec<NodeRef<'_>> = start.descendants().collect();
        let mut contains: HashMap<NodeId, Contains> = HashMap::with_capacity(order.len());

        // Reverse pre-order visits every child before its parent
        for node in order.iter().rev() {
            let mut here = Contains {
                heading: is_heading(*node),
                title: is_element(*node, "title"),
            };
            for child in node.children() {
                if let Some(below) = contains.get(&child.id()) {
                    here.heading |= below.heading;
                    here.title |= below.title;
                }
            }
            contains.insert(node.id(), here);
        }

        for node in &order {
            if !contains.get(&node.id()).is_some_and(|c| c.heading) {
                continue;
            }
            // The start node's parent lies outside the pass
            let titled = node.parent().is_some_and(|parent| match contains.get(&parent.id()) {
                Some(c) => c.title,
                None => has_title(parent),
            });
            if !titled {
                issues.record(IssueKey::new(IssueKind::HeadingWithoutTitle));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Contains {
    heading: bool,
    title: bool,
}

/// `title` elements outside `head`
pub struct TitleInHeadRule;

impl Rule for TitleInHeadRule {
    fn name(&self) -> &str {
        "title-in-head"
    }

    fn description(&self) -> &str {
        "Title elements must be direct children of head"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "title") && !node.parent().is_some_and(|p| is_element(p, "head")) {
            issues.record(IssueKey::new(IssueKind::TitleOutsideHead));
        }
    }
}
