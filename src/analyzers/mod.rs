// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rules and the engine that runs them.
//!
//! Every rule is an independent check. The engine gives each rule its own
//! pre-order walk over the whole tree (or, for node-scoped rules, just the
//! node it was handed) and all rules write into one shared [`IssueSet`].
//! Rules never short-circuit one another.

pub mod alt_text;
pub mod aria;
pub mod forms;
pub mod lists;
pub mod location;
pub mod predicates;
pub mod semantic;
pub mod tables;

use crate::dom::{Document, NodeRef};
use crate::issues::IssueSet;
use tracing::debug;

/// Which nodes a rule is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every node of the subtree, pre-order
    Subtree,
    /// Only the node the rule is started on
    Node,
}

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Stable kebab-case name
    fn name(&self) -> &str;

    /// Short description of what this rule checks
    fn description(&self) -> &str;

    fn scope(&self) -> Scope {
        Scope::Subtree
    }

    /// Inspect one node and record any violation it triggers
    fn check_node(&self, node: NodeRef<'_>, issues: &mut IssueSet);

    /// Apply the rule from `start` according to its scope.
    ///
    /// Rules whose per-node check searches a subtree may override this with
    /// a single pass that records the same occurrences.
    fn check(&self, start: NodeRef<'_>, issues: &mut IssueSet) {
        match self.scope() {
            Scope::Subtree => {
                for node in start.descendants() {
                    self.check_node(node, issues);
                }
            }
            Scope::Node => self.check_node(start, issues),
        }
    }
}

/// The full catalogue, in evaluation order
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(forms::ControlLabelRule),
        Box::new(alt_text::ImageAltRule),
        Box::new(forms::ButtonRoleLabelRule),
        Box::new(forms::FormLabelRule::new("form-label")),
        Box::new(forms::InputTypeLabelRule::new("hidden")),
        Box::new(forms::InputTypeLabelRule::new("image")),
        Box::new(forms::InputTypeLabelRule::new("submit")),
        Box::new(tables::HeaderParentRule),
        Box::new(tables::HeaderScopeRule::new("row")),
        Box::new(lists::ListItemsRule),
        Box::new(semantic::HeadingTitleRule),
        Box::new(semantic::TitleInHeadRule),
        Box::new(forms::FormLabelRule::new("form-labels")),
        Box::new(lists::ListItemParentRule),
        Box::new(lists::ListLabelRule),
        Box::new(lists::ListIndentationRule),
        Box::new(forms::FormSubmitRule),
        Box::new(forms::FormMethodRule),
        Box::new(forms::FormEnctypeRule),
        Box::new(forms::FormValidationRule),
        Box::new(aria::AriaRule),
        Box::new(location::RootImageAltRule),
        Box::new(location::RootAnchorHrefRule),
    ]
}

/// Apply one rule starting at `start`
pub fn run_rule(rule: &dyn Rule, start: NodeRef<'_>, issues: &mut IssueSet) {
    let before = issues.total();
    rule.check(start, issues);

    debug!(
        "Rule {} recorded {} occurrence(s)",
        rule.name(),
        issues.total() - before
    );
}

/// Run every rule over the document
pub fn analyze(document: &Document) -> IssueSet {
    analyze_with(&all_rules(), document)
}

/// Run the given rules over the document, in order
pub fn analyze_with(rules: &[Box<dyn Rule>], document: &Document) -> IssueSet {
    let mut issues = IssueSet::new();
    let root = document.root();

    for rule in rules {
        run_rule(rule.as_ref(), root, &mut issues);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{IssueKey, IssueKind};

    #[test]
    fn test_rule_names_unique() {
        let rules = all_rules();
        let mut names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
        assert!(rules.iter().all(|r| !r.description().is_empty()));
    }

    #[test]
    fn test_only_location_rules_are_node_scoped() {
        let scoped: Vec<String> = all_rules()
            .iter()
            .filter(|r| r.scope() == Scope::Node)
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(scoped, vec!["root-img-alt", "root-anchor-href"]);
    }

    #[test]
    fn test_minimal_page() {
        let doc = Document::parse_html("<html><body><img></body></html>");
        let issues = analyze(&doc);

        assert_eq!(issues.get(&IssueKey::new(IssueKind::ImageWithoutAlt)), 1);
        assert_eq!(
            issues.count_message("Image element without an alt attribute. Line: "),
            1
        );
        assert_eq!(
            issues.count_message("Anchor element without an href attribute. Line: "),
            1
        );
        assert_eq!(issues.total(), 3);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let doc = Document::parse_html(
            r#"<html><body><h1>x</h1><form><input type="text"><ul></ul></form>
               <table aria-label="t"><tr><th>a</th></tr></table></body></html>"#,
        );
        assert_eq!(analyze(&doc), analyze(&doc));
    }

    #[test]
    fn test_form_label_rules_both_count() {
        let doc = Document::parse_html("<html><body><form></form></body></html>");
        let issues = analyze(&doc);
        assert_eq!(
            issues.count_message("Form element without any corresponding label elements."),
            2
        );
    }

    #[test]
    fn test_clean_body_only_root_issues() {
        let doc = Document::parse_html(
            r#"<html><head><title>Home</title></head><body><p>Hello</p><img src="a.png" alt="A"></body></html>"#,
        );
        let issues = analyze(&doc);
        let kinds: Vec<IssueKind> = issues.iter().map(|(key, _)| key.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::ImageWithoutAltAt, IssueKind::AnchorWithoutHrefAt]
        );
    }

    #[test]
    fn test_analyze_with_subset() {
        let doc = Document::parse_html("<img><img>");
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(alt_text::ImageAltRule)];
        let issues = analyze_with(&rules, &doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.total(), 2);
    }
}
