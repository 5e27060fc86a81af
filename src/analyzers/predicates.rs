// SPDX-License-Identifier: PMPL-1.0-or-later
//! Reusable boolean tree queries shared by the rules.
//!
//! Subtree searches include the starting node itself and walk its subtree
//! pre-order; the "local" queries only look at the node's own attributes.

use crate::dom::NodeRef;

/// Heading tags, `h1` through `h6`
const HEADING_LEVELS: &[u8] = b"123456";

/// True if `node` is an element with this tag
pub fn is_element(node: NodeRef<'_>, tag: &str) -> bool {
    node.is_element() && node.tag() == tag
}

/// True for `ul` and `ol` elements
pub fn is_list(node: NodeRef<'_>) -> bool {
    is_element(node, "ul") || is_element(node, "ol")
}

/// True for `h1`..`h6` elements
pub fn is_heading(node: NodeRef<'_>) -> bool {
    match node.tag().as_bytes() {
        [b'h', level] => node.is_element() && HEADING_LEVELS.contains(level),
        _ => false,
    }
}

/// Local: any attribute has exactly this key
pub fn has_attribute(node: NodeRef<'_>, key: &str) -> bool {
    node.attributes().iter().any(|a| a.key == key)
}

/// Local: any attribute has exactly this key and value
pub fn has_attribute_value(node: NodeRef<'_>, key: &str, value: &str) -> bool {
    node.attributes()
        .iter()
        .any(|a| a.key == key && a.value == value)
}

/// Local: any attribute is `aria-<suffix>`, compared exactly
pub fn has_aria_attribute(node: NodeRef<'_>, suffix: &str) -> bool {
    node.attributes()
        .iter()
        .any(|a| a.key.strip_prefix("aria-") == Some(suffix))
}

/// `node` or any node below it satisfies `predicate`
pub fn has_descendant<F>(node: NodeRef<'_>, predicate: F) -> bool
where
    F: Fn(NodeRef<'_>) -> bool,
{
    node.descendants().any(predicate)
}

pub fn has_label(node: NodeRef<'_>) -> bool {
    has_descendant(node, |n| is_element(n, "label"))
}

pub fn has_list_item(node: NodeRef<'_>) -> bool {
    has_descendant(node, |n| is_element(n, "li"))
}

pub fn has_caption(node: NodeRef<'_>) -> bool {
    has_descendant(node, |n| is_element(n, "caption"))
}

pub fn has_heading(node: NodeRef<'_>) -> bool {
    has_descendant(node, is_heading)
}

pub fn has_title(node: NodeRef<'_>) -> bool {
    has_descendant(node, |n| is_element(n, "title"))
}

pub fn has_list(node: NodeRef<'_>) -> bool {
    has_descendant(node, is_list)
}

/// Direct children only: an `input type="submit"` child
pub fn has_submit_button(form: NodeRef<'_>) -> bool {
    form.children()
        .any(|child| is_element(child, "input") && has_attribute_value(child, "type", "submit"))
}

/// Local: `novalidate` always wins, otherwise a `validate` attribute is required
pub fn has_form_validation_marker(form: NodeRef<'_>) -> bool {
    if has_attribute(form, "novalidate") {
        return false;
    }
    has_attribute(form, "validate")
}

/// Local: a `scope` attribute equal to `value`
pub fn has_scope(cell: NodeRef<'_>, value: &str) -> bool {
    has_attribute_value(cell, "scope", value)
}
