// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form rules - labels, submit buttons and form attributes
//!
//! Checks:
//! - Form controls and button-role elements contain a label
//! - Hidden, image and submit inputs contain a label
//! - Forms contain at least one label (checked by two independent rules)
//! - Forms have a direct submit input, `method`, `enctype` and a validation marker

use crate::analyzers::predicates::{
    has_attribute, has_attribute_value, has_form_validation_marker, has_label,
    has_submit_button, is_element,
};
use crate::analyzers::Rule;
use crate::dom::NodeRef;
use crate::issues::{IssueKey, IssueKind, IssueSet};

/// Elements that need a label of their own
const LABELLED_CONTROLS: &[&str] = &["input", "select", "textarea"];

/// `input`, `select` and `textarea` without a label inside them
pub struct ControlLabelRule;

impl Rule for ControlLabelRule {
    fn name(&self) -> &str {
        "control-label"
    }

    fn description(&self) -> &str {
        "Form controls must contain a label element"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if node.is_element() && LABELLED_CONTROLS.contains(&node.tag()) && !has_label(node) {
            issues.record(IssueKey::new(IssueKind::ControlWithoutLabel).with_subject(node.tag()));
        }
    }
}

/// Elements with `role="button"` without a label
pub struct ButtonRoleLabelRule;

impl Rule for ButtonRoleLabelRule {
    fn name(&self) -> &str {
        "button-role-label"
    }

    fn description(&self) -> &str {
        "Elements with role=button must contain a label element"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if node.is_element() && has_attribute_value(node, "role", "button") && !has_label(node) {
            issues.record(IssueKey::new(IssueKind::ButtonWithoutLabel));
        }
    }
}

/// Forms without any label.
///
/// Registered twice under different names; both instances count.
pub struct FormLabelRule {
    name: &'static str,
}

impl FormLabelRule {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Rule for FormLabelRule {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Forms must contain at least one label element"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "form") && !has_label(node) {
            issues.record(IssueKey::new(IssueKind::FormWithoutLabels));
        }
    }
}

/// Inputs of one `type` without a label
pub struct InputTypeLabelRule {
    input_type: &'static str,
    name: String,
}

impl InputTypeLabelRule {
    pub fn new(input_type: &'static str) -> Self {
        Self {
            input_type,
            name: format!("{}-input-label", input_type),
        }
    }
}

impl Rule for InputTypeLabelRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Inputs of this type must contain a label element"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "input")
            && has_attribute_value(node, "type", self.input_type)
            && !has_label(node)
        {
            issues.record(
                IssueKey::new(IssueKind::InputTypeWithoutLabel).with_subject(self.input_type),
            );
        }
    }
}

/// Forms without a submit input among their direct children
pub struct FormSubmitRule;

impl Rule for FormSubmitRule {
    fn name(&self) -> &str {
        "form-submit"
    }

    fn description(&self) -> &str {
        "Forms must have an input type=submit as a direct child"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "form") && !has_submit_button(node) {
            issues.record(IssueKey::new(IssueKind::FormWithoutSubmit));
        }
    }
}

pub struct FormMethodRule;

impl Rule for FormMethodRule {
    fn name(&self) -> &str {
        "form-method"
    }

    fn description(&self) -> &str {
        "Forms must declare a method attribute"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "form") && !has_attribute(node, "method") {
            issues.record(IssueKey::new(IssueKind::FormWithoutMethod));
        }
    }
}

pub struct FormEnctypeRule;

impl Rule for FormEnctypeRule {
    fn name(&self) -> &str {
        "form-enctype"
    }

    fn description(&self) -> &str {
        "Forms must declare an enctype attribute"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "form") && !has_attribute(node, "enctype") {
            issues.record(IssueKey::new(IssueKind::FormWithoutEnctype));
        }
    }
}

/// Forms that opt out of validation or never opt in
pub struct FormValidationRule;

impl Rule for FormValidationRule {
    fn name(&self) -> &str {
        "form-validation"
    }

    fn description(&self) -> &str {
        "Forms must carry a validate attribute and no novalidate attribute"
    }

    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet) {
        if is_element(node, "form") && !has_form_validation_marker(node) {
            issues.record(IssueKey::new(IssueKind::FormWithoutValidation));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::run_rule;
    use crate::dom::Document;

    fn check(rule: &dyn Rule, html: &str) -> IssueSet {
        let doc = Document::parse_html(html);
        let mut issues = IssueSet::new();
        run_rule(rule, doc.root(), &mut issues);
        issues
    }

    #[test]
    fn test_unlabelled_controls() {
        let issues = check(
            &ControlLabelRule,
            r#"<form><input type="text"><select></select><textarea></textarea><input></form>"#,
        );
        assert_eq!(
            issues.count_message("input element without a corresponding label element."),
            2
        );
        assert_eq!(
            issues.count_message("select element without a corresponding label element."),
            1
        );
        assert_eq!(
            issues.count_message("textarea element without a corresponding label element."),
            1
        );
    }

    #[test]
    fn test_label_must_be_inside_control() {
        let mut doc = Document::new();
        let root = doc.root().id();
        let form = doc.append_element(root, "form", &[]);
        doc.append_element(form, "label", &[("for", "name")]);
        let select = doc.append_element(form, "select", &[("id", "name")]);
        doc.append_element(select, "label", &[]);
        doc.append_element(form, "textarea", &[]);

        let mut issues = IssueSet::new();
        run_rule(&ControlLabelRule, doc.root(), &mut issues);
        assert_eq!(issues.total(), 1);
        assert_eq!(
            issues.count_message("textarea element without a corresponding label element."),
            1
        );
    }

    #[test]
    fn test_button_role() {
        let issues = check(
            &ButtonRoleLabelRule,
            r#"<div role="button">Go</div><span role="button"><label>Go</label></span><div role="link"></div>"#,
        );
        assert_eq!(issues.get(&IssueKey::new(IssueKind::ButtonWithoutLabel)), 1);
    }

    #[test]
    fn test_form_without_labels() {
        let issues = check(
            &FormLabelRule::new("form-label"),
            "<form><input></form><form><div><label>x</label></div></form>",
        );
        assert_eq!(issues.get(&IssueKey::new(IssueKind::FormWithoutLabels)), 1);
    }

    #[test]
    fn test_input_type_rules() {
        let html = r#"<input type="hidden"><input type="hidden"><input type="image"><input type="text">"#;
        let hidden = check(&InputTypeLabelRule::new("hidden"), html);
        assert_eq!(
            hidden.count_message(
                "Input element with type 'hidden' without a corresponding label element."
            ),
            2
        );
        let submit = check(&InputTypeLabelRule::new("submit"), html);
        assert!(submit.is_empty());
        assert_eq!(InputTypeLabelRule::new("image").name(), "image-input-label");
    }

    #[test]
    fn test_submit_direct_child_only() {
        let issues = check(
            &FormSubmitRule,
            r#"<form id="ok"><input type="submit"></form>
               <form id="nested"><p><input type="submit"></p></form>
               <form id="button"><button type="submit">Send</button></form>"#,
        );
        assert_eq!(issues.get(&IssueKey::new(IssueKind::FormWithoutSubmit)), 2);
    }

    #[test]
    fn test_method_and_enctype() {
        let html = r#"<form method="post"></form><form enctype="multipart/form-data"></form><form></form>"#;
        let method = check(&FormMethodRule, html);
        assert_eq!(method.get(&IssueKey::new(IssueKind::FormWithoutMethod)), 2);
        let enctype = check(&FormEnctypeRule, html);
        assert_eq!(enctype.get(&IssueKey::new(IssueKind::FormWithoutEnctype)), 2);
    }

    #[test]
    fn test_validation_marker() {
        let issues = check(
            &FormValidationRule,
            r#"<form validate></form><form validate novalidate></form><form></form>"#,
        );
        assert_eq!(issues.get(&IssueKey::new(IssueKind::FormWithoutValidation)), 2);
    }
}
