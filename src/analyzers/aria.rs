// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA attribute rule
//!
//! An ARIA attribute on its own does not make an element accessible. This
//! rule looks for elements that carry one ARIA attribute but are missing the
//! companion the attribute relies on:
//! - `img[aria-label]` still needs `alt`
//! - `button[aria-controls]` needs `aria-label`
//! - `input[aria-placeholder]`, `select[aria-label]`, `textarea[aria-placeholder]` need a label
//! - `table[aria-label]` needs a `caption`
//! - `audio`/`video` with `aria-description` need `aria-label`

use crate::analyzers::predicates::{has_aria_attribute, has_attribute, has_caption, has_label};
use crate::analyzers::Rule;
use crate::dom::NodeRef;
use crate::issues::{IssueKey, IssueKind, IssueSet};

/// ARIA companion-attribute rule
pub struct AriaRule;

impl Rule for AriaRule {
    fn name(&self) -> &str {
        "aria"
    }

    fn description(&self) -> &str {
        "ARIA attributes must be backed by the attributes or elements they rely on"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if !node.is_element() {
            return;
        }

        let kind = match node.tag() {
            "img" if has_aria_attribute(node, "label") && !has_attribute(node, "alt") => {
                IssueKind::AriaImageWithoutAlt
            }
            "button"
                if has_aria_attribute(node, "controls") && !has_aria_attribute(node, "label") =>
            {
                IssueKind::AriaButtonWithoutLabel
            }
            "input" if has_aria_attribute(node, "placeholder") && !has_label(node) => {
                IssueKind::AriaInputWithoutLabel
            }
            "select" if has_aria_attribute(node, "label") && !has_label(node) => {
                IssueKind::AriaSelectWithoutLabel
            }
            "textarea" if has_aria_attribute(node, "placeholder") && !has_label(node) => {
                IssueKind::AriaTextareaWithoutLabel
            }
            "table" if has_aria_attribute(node, "label") && !has_caption(node) => {
                IssueKind::AriaTableWithoutCaption
            }
            "audio" | "video"
                if has_aria_attribute(node, "description") && !has_aria_attribute(node, "label") =>
            {
                issues.record(IssueKey::new(IssueKind::AriaMediaWithoutLabel).with_subject(node.tag()));
                return;
            }
            _ => return,
        };

        issues.record(IssueKey::new(kind));
    }
}
