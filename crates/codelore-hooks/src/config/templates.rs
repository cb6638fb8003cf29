//! Built-in starter rule document
//!
//! Shipped so `lore init-rules` can scaffold a working document instead of
//! leaving new installations with an empty rule set. Loading behavior is
//! unchanged: an absent document still means no rules, the template is only
//! written on explicit request.

use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::types::RuleDocument;

/// Starter rule document JSON
const STARTER_RULES: &str = r#"{
  "skills": [
    {
      "name": "knowledge-search",
      "description": "Query indexed library and documentation stores semantically",
      "triggers": [
        {"keyword": "how does", "weight": 1},
        {"keyword": "search", "weight": 2},
        {"keyword": "documentation", "weight": 2},
        {"regex": "how (do|can|should) I use", "weight": 2},
        {"keyword": "library", "weight": 1}
      ],
      "exclusions": [
        {"keyword": "knowledge-search"}
      ]
    },
    {
      "name": "when-to-query",
      "description": "Decide when a semantic query beats reading files directly",
      "triggers": [
        {"keyword": "where is", "weight": 1},
        {"keyword": "find the", "weight": 1},
        {"regex": "what (does|is) .* (do|for)", "weight": 2}
      ],
      "exclusions": []
    },
    {
      "name": "search-optimization",
      "description": "Refine queries that return too much or too little",
      "triggers": [
        {"keyword": "too many results", "weight": 3},
        {"keyword": "no results", "weight": 3},
        {"keyword": "refine", "weight": 1}
      ],
      "exclusions": []
    },
    {
      "name": "store-lifecycle",
      "description": "Create, index, and retire knowledge stores",
      "triggers": [
        {"keyword": "index this repo", "weight": 3},
        {"keyword": "add a store", "weight": 3},
        {"keyword": "reindex", "weight": 2}
      ],
      "exclusions": [
        {"keyword": "already indexed"}
      ]
    }
  ],
  "threshold": 2,
  "globalExclusions": [
    {"keyword": "no skill suggestions"}
  ]
}
"#;

/// Built-in rule document templates
pub struct RuleTemplates;

impl RuleTemplates {
    /// The starter document as JSON text, ready to write to disk
    pub fn starter_json() -> &'static str {
        STARTER_RULES
    }

    /// The starter document parsed into the typed model
    pub fn starter_document() -> Result<RuleDocument> {
        ConfigLoader::parse_rules(STARTER_RULES)
    }
}
