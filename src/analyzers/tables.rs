// SPDX-License-Identifier: PMPL-1.0-or-later
//! Table header rules

use crate::analyzers::predicates::{has_descendant, has_scope, is_element};
use crate::analyzers::Rule;
use crate::dom::NodeRef;
use crate::issues::{IssueKey, IssueKind, IssueSet};

/// `th` cells whose parent holds no other header cell
pub struct HeaderParentRule;

impl Rule for HeaderParentRule {
    fn name(&self) -> &str {
        "table-header-parent"
    }

    fn description(&self) -> &str {
        "Header cells must sit next to other header cells"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if !is_element(node, "th") {
            return;
        }

        let cell = node.id();
        let has_other_header = node.parent().is_some_and(|parent| {
            has_descendant(parent, |n| n.id() != cell && is_element(n, "th"))
        });

        if !has_other_header {
            issues.record(IssueKey::new(IssueKind::HeaderCellWithoutParent));
        }
    }
}

/// `th` cells without the expected `scope` value
pub struct HeaderScopeRule {
    scope: &'static str,
}

impl HeaderScopeRule {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }
}

impl Rule for HeaderScopeRule {
    fn name(&self) -> &str {
        "table-header-scope"
    }

    fn description(&self) -> &str {
        "Header cells must declare their scope"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "th") && !has_scope(node, self.scope) {
            issues.record(IssueKey::new(IssueKind::HeaderCellWithoutScope).with_subject(self.scope));
        }
    }
}
