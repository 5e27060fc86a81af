// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ybot - page accessibility checker
//!
//! Fetches a web page, parses its markup and runs a fixed catalogue of
//! accessibility heuristics over the tree, counting violations per message.
//!
//! ## Rules
//!
//! - **Forms**: control labels, submit buttons, method/enctype, validation markers
//! - **Images**: missing alt text
//! - **Tables**: header cell grouping and scope
//! - **Lists**: items, labels, orphan items, nested item consistency
//! - **Structure**: heading/title pairing, title placement
//! - **ARIA**: attributes missing their companion attribute or element
//! - **Location**: start-node alt/href checks reported with a `line` marker
//!
//! ## Usage
//!
//! ```rust,no_run
//! use a11ybot::{analyzers, dom::Document};
//!
//! let document = Document::parse_html("<html><body><img></body></html>");
//! let issues = analyzers::analyze(&document);
//! for (key, count) in issues.iter() {
//!     println!("- {} (x{})", key, count);
//! }
//! ```

pub mod analyzers;
pub mod dom;
pub mod error;
pub mod issues;
pub mod report;
pub mod scanner;

pub use error::{Result, ScanError};
pub use issues::{IssueKey, IssueKind, IssueSet};
