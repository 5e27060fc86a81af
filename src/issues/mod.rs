// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue identity and aggregation.
//!
//! Rules report an [`IssueKey`]: the kind of violation plus the per-occurrence
//! data its message embeds (a tag name, an input type, a location). The
//! human-readable message is derived from the key, and rendering is
//! injective, so two occurrences share a count exactly when their messages
//! are byte-identical.

use std::collections::BTreeMap;
use std::fmt;

/// Category of accessibility violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    /// Form control (subject: tag) with no label inside it
    ControlWithoutLabel,
    ImageWithoutAlt,
    ButtonWithoutLabel,
    FormWithoutLabels,
    /// Input (subject: type attribute) with no label inside it
    InputTypeWithoutLabel,
    HeaderCellWithoutParent,
    /// Header cell lacking the scope named by the subject
    HeaderCellWithoutScope,
    /// List (subject: tag) with no items
    ListWithoutItems,
    HeadingWithoutTitle,
    TitleOutsideHead,
    ListItemWithoutList,
    /// List (subject: tag) with no label inside it
    ListWithoutLabel,
    /// List (subject: tag) whose nested items do not follow a sibling item
    ListIndentation,
    FormWithoutSubmit,
    FormWithoutMethod,
    FormWithoutEnctype,
    FormWithoutValidation,
    AriaImageWithoutAlt,
    AriaButtonWithoutLabel,
    AriaInputWithoutLabel,
    AriaSelectWithoutLabel,
    AriaTextareaWithoutLabel,
    AriaTableWithoutCaption,
    /// Media element (subject: tag) described but not labelled
    AriaMediaWithoutLabel,
    /// Image check carrying a location
    ImageWithoutAltAt,
    /// Anchor check carrying a location
    AnchorWithoutHrefAt,
}

impl IssueKind {
    /// Stable identifier used by machine-readable reports
    pub fn id(&self) -> &'static str {
        match self {
            IssueKind::ControlWithoutLabel => "control-without-label",
            IssueKind::ImageWithoutAlt => "image-without-alt",
            IssueKind::ButtonWithoutLabel => "button-without-label",
            IssueKind::FormWithoutLabels => "form-without-labels",
            IssueKind::InputTypeWithoutLabel => "input-type-without-label",
            IssueKind::HeaderCellWithoutParent => "header-cell-without-parent",
            IssueKind::HeaderCellWithoutScope => "header-cell-without-scope",
            IssueKind::ListWithoutItems => "list-without-items",
            IssueKind::HeadingWithoutTitle => "heading-without-title",
            IssueKind::TitleOutsideHead => "title-outside-head",
            IssueKind::ListItemWithoutList => "list-item-without-list",
            IssueKind::ListWithoutLabel => "list-without-label",
            IssueKind::ListIndentation => "list-indentation",
            IssueKind::FormWithoutSubmit => "form-without-submit",
            IssueKind::FormWithoutMethod => "form-without-method",
            IssueKind::FormWithoutEnctype => "form-without-enctype",
            IssueKind::FormWithoutValidation => "form-without-validation",
            IssueKind::AriaImageWithoutAlt => "aria-image-without-alt",
            IssueKind::AriaButtonWithoutLabel => "aria-button-without-label",
            IssueKind::AriaInputWithoutLabel => "aria-input-without-label",
            IssueKind::AriaSelectWithoutLabel => "aria-select-without-label",
            IssueKind::AriaTextareaWithoutLabel => "aria-textarea-without-label",
            IssueKind::AriaTableWithoutCaption => "aria-table-without-caption",
            IssueKind::AriaMediaWithoutLabel => "aria-media-without-label",
            IssueKind::ImageWithoutAltAt => "image-without-alt-at",
            IssueKind::AnchorWithoutHrefAt => "anchor-without-href-at",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Aggregation key for one reported violation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueKey {
    pub kind: IssueKind,
    /// Tag name, input type or scope value embedded in the message
    pub subject: Option<String>,
    /// Location suffix; present only for location-carrying checks
    pub location: Option<String>,
}

impl IssueKey {
    pub fn new(kind: IssueKind) -> Self {
        Self {
            kind,
            subject: None,
            location: None,
        }
    }

    /// Set the subject embedded in the message
    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the location suffix
    pub fn at(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Render the human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = self.subject.as_deref().unwrap_or("");
        let location = self.location.as_deref().unwrap_or("");
        match self.kind {
            IssueKind::ControlWithoutLabel => {
                write!(f, "{} element without a corresponding label element.", subject)
            }
            IssueKind::ImageWithoutAlt => f.write_str("Image element without an alt attribute."),
            IssueKind::ButtonWithoutLabel => {
                f.write_str("Button element without a corresponding label element.")
            }
            IssueKind::FormWithoutLabels => {
                f.write_str("Form element without any corresponding label elements.")
            }
            IssueKind::InputTypeWithoutLabel => write!(
                f,
                "Input element with type '{}' without a corresponding label element.",
                subject
            ),
            IssueKind::HeaderCellWithoutParent => f.write_str(
                "Table header cell without a corresponding th or td parent element.",
            ),
            IssueKind::HeaderCellWithoutScope => write!(
                f,
                "Table header cell without a '{}' scope attribute.",
                subject
            ),
            IssueKind::ListWithoutItems => write!(
                f,
                "{} element without any corresponding list item elements.",
                subject
            ),
            IssueKind::HeadingWithoutTitle => {
                f.write_str("Heading element without a corresponding title element.")
            }
            IssueKind::TitleOutsideHead => f.write_str("Title element not inside a head element."),
            IssueKind::ListItemWithoutList => f.write_str(
                "List item element without a corresponding ol or ul parent element.",
            ),
            IssueKind::ListWithoutLabel => {
                write!(f, "{} element without a corresponding label element.", subject)
            }
            IssueKind::ListIndentation => {
                write!(f, "{} element with inconsistent indentation.", subject)
            }
            IssueKind::FormWithoutSubmit => f.write_str("Form element without a submit button."),
            IssueKind::FormWithoutMethod => {
                f.write_str("Form element without a method attribute.")
            }
            IssueKind::FormWithoutEnctype => {
                f.write_str("Form element without an enctype attribute.")
            }
            IssueKind::FormWithoutValidation => {
                f.write_str("Form element without proper validation attributes.")
            }
            IssueKind::AriaImageWithoutAlt => f.write_str(
                "Image element with aria-label attribute but without an alt attribute.",
            ),
            IssueKind::AriaButtonWithoutLabel => f.write_str(
                "Button element with aria-controls attribute but without an aria-label attribute.",
            ),
            IssueKind::AriaInputWithoutLabel => f.write_str(
                "Input element with aria-placeholder attribute but without a corresponding label element.",
            ),
            IssueKind::AriaSelectWithoutLabel => f.write_str(
                "Select element with aria-label attribute but without a corresponding label element.",
            ),
            IssueKind::AriaTextareaWithoutLabel => f.write_str(
                "Textarea element with aria-placeholder attribute but without a corresponding label element.",
            ),
            IssueKind::AriaTableWithoutCaption => f.write_str(
                "Table element with aria-label attribute but without a corresponding caption element.",
            ),
            IssueKind::AriaMediaWithoutLabel => write!(
                f,
                "{} element with aria-description attribute but without an aria-label attribute.",
                subject
            ),
            IssueKind::ImageWithoutAltAt => {
                write!(f, "Image element without an alt attribute. Line: {}", location)
            }
            IssueKind::AnchorWithoutHrefAt => {
                write!(f, "Anchor element without an href attribute. Line: {}", location)
            }
        }
    }
}

/// Occurrence counts per issue for one scan.
///
/// Created empty, filled by every rule in turn, read once by the reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueSet {
    counts: BTreeMap<IssueKey, usize>,
}

impl IssueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `key`
    pub fn record(&mut self, key: IssueKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Occurrences recorded for `key`
    pub fn get(&self, key: &IssueKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Occurrences whose rendered message equals `message`
    pub fn count_message(&self, message: &str) -> usize {
        self.counts
            .iter()
            .filter(|(key, _)| key.message() == message)
            .map(|(_, count)| *count)
            .sum()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct issues
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Issues ordered by key
    pub fn iter(&self) -> impl Iterator<Item = (&IssueKey, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}
