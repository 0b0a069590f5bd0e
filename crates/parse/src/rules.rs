use serde::Deserialize;
use thiserror::Error;

/// One keyword → label rule. The keyword is matched as a lowercase
/// substring of the cleaned description.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub label: String,
}

#[derive(Error, Debug)]
pub enum RuleTableError {
    #[error("failed to parse category rules: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Ordered first-match keyword table.
///
/// Iteration order is rule precedence: overlapping keywords are resolved by
/// whichever rule appears first in the curated table, so the order must be
/// preserved verbatim when the table is loaded or edited.
#[derive(Debug, Clone)]
pub struct CategoryRuleTable {
    rules: Vec<CategoryRule>,
}

impl CategoryRuleTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.keyword = rule.keyword.to_lowercase();
                rule
            })
            .collect();
        Self { rules }
    }

    /// Load a table from TOML (`[[rules]]` with `keyword` and `label`).
    /// Array order in the file becomes precedence order.
    pub fn from_toml(content: &str) -> Result<Self, RuleTableError> {
        #[derive(Deserialize)]
        struct RuleFile {
            rules: Vec<CategoryRule>,
        }
        let file: RuleFile = toml::from_str(content)?;
        Ok(Self::new(file.rules))
    }

    /// The curated table bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_toml(include_str!("../data/categories.toml"))
            .expect("bundled category rules are valid TOML")
    }

    /// First rule whose keyword the lowercased description contains.
    /// `None` is normal: many transactions are legitimately uncategorized.
    pub fn resolve(&self, description: &str) -> Option<&str> {
        let description = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| description.contains(&rule.keyword))
            .map(|rule| rule.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
