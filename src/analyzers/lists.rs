// SPDX-License-Identifier: PMPL-1.0-or-later
//! List structure rules
//!
//! Checks:
//! - `ul`/`ol` contain list items and a label
//! - `li` sits somewhere below a `ul`/`ol` reachable from its parent
//! - Nested items are introduced consistently at every enclosing level

use crate::analyzers::predicates::{has_label, has_list, has_list_item, is_element, is_list};
use crate::analyzers::Rule;
use crate::dom::{NodeKind, NodeRef};
use crate::issues::{IssueKey, IssueKind, IssueSet};

/// Lists with no `li` inside them
pub struct ListItemsRule;

impl Rule for ListItemsRule {
    fn name(&self) -> &str {
        "list-items"
    }

    fn description(&self) -> &str {
        "Lists must contain list item elements"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_list(node) && !has_list_item(node) {
            issues.record(IssueKey::new(IssueKind::ListWithoutItems).with_subject(node.tag()));
        }
    }
}

/// List items whose parent subtree holds no list
pub struct ListItemParentRule;

impl Rule for ListItemParentRule {
    fn name(&self) -> &str {
        "list-item-parent"
    }

    fn description(&self) -> &str {
        "List items must belong to an ol or ul element"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "li") && !node.parent().is_some_and(has_list) {
            issues.record(IssueKey::new(IssueKind::ListItemWithoutList));
        }
    }
}

/// Lists with no label inside them
pub struct ListLabelRule;

impl Rule for ListLabelRule {
    fn name(&self) -> &str {
        "list-label"
    }

    fn description(&self) -> &str {
        "Lists must contain a label element"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_list(node) && !has_label(node) {
            issues.record(IssueKey::new(IssueKind::ListWithoutLabel).with_subject(node.tag()));
        }
    }
}

/// Nested list items whose enclosing items do not follow a sibling item.
///
/// An item's depth is the number of `li` elements above it. For each of
/// those enclosing items (one per level) that is not preceded by another
/// `li`, one occurrence is recorded against the item's own list.
pub struct ListIndentationRule;

impl Rule for ListIndentationRule {
    fn name(&self) -> &str {
        "list-indentation"
    }

    fn description(&self) -> &str {
        "Nested list items must be introduced by sibling items at every level"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if !is_element(node, "li") {
            return;
        }
        let Some(list) = node.parent().filter(|p| is_list(*p)) else {
            return;
        };

        for enclosing in node.ancestors().filter(|n| is_element(*n, "li")) {
            if !follows_list_item(enclosing) {
                issues.record(IssueKey::new(IssueKind::ListIndentation).with_subject(list.tag()));
            }
        }
    }
}

/// The nearest previous sibling, ignoring whitespace-only text, is an `li`
fn follows_list_item(item: NodeRef<'_>) -> bool {
    item.preceding_siblings()
        .find(|sibling| !is_blank_text(*sibling))
        .is_some_and(|sibling| is_element(sibling, "li"))
}

fn is_blank_text(node: NodeRef<'_>) -> bool {
    node.kind() == NodeKind::Text && node.text().trim().is_empty()
}
