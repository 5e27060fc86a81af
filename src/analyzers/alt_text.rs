// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text rule
//!
//! Every `<img>` must carry an `alt` attribute. An empty `alt=""` counts as
//! present: decorative images are allowed.

use crate::analyzers::predicates::{has_attribute, is_element};
use crate::analyzers::Rule;
use crate::dom::NodeRef;
use crate::issues::{IssueKey, IssueKind, IssueSet};

/// Rule for `<img>` elements without `alt`
pub struct ImageAltRule;

impl Rule for ImageAltRule {
    fn name(&self) -> &str {
        "img-alt"
    }

    fn description(&self) -> &str {
        "Image elements must have an alt attribute"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "img") && !has_attribute(node, "alt") {
            issues.record(IssueKey::new(IssueKind::ImageWithoutAlt));
        }
    }
}
