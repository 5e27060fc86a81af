// SPDX-License-Identifier: PMPL-1.0-or-later
//! Location-carrying rules and the `line` marker lookup.
//!
//! These two rules look only at the node they are started on, which the
//! engine sets to the document root. Their messages end with the location
//! of the nearest preceding element that carries a `line` attribute, so
//! occurrences at different locations are reported separately.

use crate::analyzers::predicates::has_attribute;
use crate::analyzers::{Rule, Scope};
use crate::dom::NodeRef;
use crate::issues::{IssueKey, IssueKind, IssueSet};
use std::iter;

/// Find the nearest `line` marker at or before `node`.
///
/// Checks the node and its previous siblings, nearest first, then repeats
/// from the parent upwards. Renders `tag:value`, or an empty string when no
/// marker exists.
pub fn locate(node: NodeRef<'_>) -> String {
    let mut cursor = Some(node);

    while let Some(current) = cursor {
        let marker = iter::once(current)
            .chain(current.preceding_siblings())
            .find_map(|n| n.attr("line").map(|line| format!("{}:{}", n.tag(), line)));
        if let Some(marker) = marker {
            return marker;
        }
        cursor = current.parent();
    }

    String::new()
}

/// Start node without `alt`
pub struct RootImageAltRule;

impl Rule for RootImageAltRule {
    fn name(&self) -> &str {
        "root-img-alt"
    }

    fn description(&self) -> &str {
        "The starting node must carry an alt attribute (reported with its location)"
    }

    fn scope(&self) -> Scope {
        Scope::Node
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if !has_attribute(node, "alt") {
            issues.record(IssueKey::new(IssueKind::ImageWithoutAltAt).at(&locate(node)));
        }
    }
}

/// Start node without `href`
pub struct RootAnchorHrefRule;

impl Rule for RootAnchorHrefRule {
    fn name(&self) -> &str {
        "root-anchor-href"
    }

    fn description(&self) -> &str {
        "The starting node must carry an href attribute (reported with its location)"
    }

    fn scope(&self) -> Scope {
        Scope::Node
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if !has_attribute(node, "href") {
            issues.record(IssueKey::new(IssueKind::AnchorWithoutHrefAt).at(&locate(node)));
        }
    }
}
