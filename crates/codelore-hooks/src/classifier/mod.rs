//! Filesystem path classification
//!
//! Decides whether a path lies inside third-party/dependency storage and, if
//! so, tries to name the library from the path shape. The test is two-stage:
//! a cheap alternation over known dependency-directory markers first, and the
//! ecosystem-specific extraction regexes only on paths that already matched.
//! "Is this dependency code" stays answerable even when the dependency cannot
//! be named.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::types::PathClassification;

/// Directory markers recognized as dependency storage across ecosystems
///
/// Joined into a single case-insensitive alternation. The list is versioned
/// with the crate; extend it here rather than at runtime.
pub const LIBRARY_PATH_MARKERS: [&str; 10] = [
    "node_modules/",
    "vendor/",
    "site-packages/",
    r"\.venv/",
    "venv/",
    "bower_components/",
    r"packages/.*/node_modules/",
    r"\.npm/",
    r"\.cargo/registry/",
    "go/pkg/mod/",
];

/// One ecosystem-specific name extraction rule
struct ExtractionRule {
    pattern: Regex,
    group: usize,
}

fn library_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        RegexBuilder::new(&LIBRARY_PATH_MARKERS.join("|"))
            .case_insensitive(true)
            .build()
            .expect("Invalid marker regex")
    })
}

/// Extraction rules in priority order, first capture wins
///
/// Shapes covered: an npm package (optionally `@scope/name`) after
/// `node_modules/`, a Python distribution after `site-packages/`, a vendored
/// package after `vendor/`, a cargo registry crate truncated at its version
/// number, and a Go module terminated at its `@version` suffix.
fn extraction_rules() -> &'static [ExtractionRule] {
    static RULES: OnceLock<Vec<ExtractionRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"node_modules/(@[^/]+/[^/]+|[^/]+)", 1),
            (r"site-packages/([^/]+)", 1),
            (r"vendor/([^/]+)", 1),
            (r"\.cargo/registry/[^/]+/([^/]+)-\d", 1),
            (r"go/pkg/mod/([^@]+)@", 1),
        ]
        .into_iter()
        .map(|(pattern, group)| ExtractionRule {
            pattern: Regex::new(pattern).expect("Invalid extraction regex"),
            group,
        })
        .collect()
    })
}

/// Classifies paths as project code vs. dependency code
pub struct PathClassifier;

impl PathClassifier {
    /// Classify a path, extracting a library name when the shape allows
    ///
    /// Pure function of the path string; paths that match the marker
    /// alternation but none of the extraction rules classify as library code
    /// with no name.
    pub fn classify(path: &str) -> PathClassification {
        if !library_marker_regex().is_match(path) {
            return PathClassification::not_library();
        }

        let library = extraction_rules().iter().find_map(|rule| {
            rule.pattern
                .captures(path)
                .and_then(|caps| caps.get(rule.group))
                .map(|m| m.as_str().to_string())
        });

        PathClassification {
            is_library: true,
            library,
        }
    }

    /// Whether the path lies inside dependency storage
    pub fn is_library_path(path: &str) -> bool {
        library_marker_regex().is_match(path)
    }
}
