//! Keyword registry: which words and phrases point at which category.
//!
//! The registry is plain declarative data (an ordered list of
//! [`CategoryRule`]s) compiled once into case-insensitive, word-boundary
//! regexes. It never changes after construction, so a single instance can be
//! shared by every categorization in a run.

use regex::Regex;
use serde::Serialize;

use crate::category::Category;
use crate::config::KeywordConfig;
use crate::error::{ConfigError, CoreError, Result};

/// Keywords and tie-break rank for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    pub category: Category,
    /// Lower wins when two categories score the same.
    pub priority: u8,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Rule with the category's default priority.
    pub fn new<I, S>(category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            priority: category.priority(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single compiled keyword.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    keyword: String,
    regex: Regex,
}

impl KeywordPattern {
    /// Compile `keyword` for whole-word / whole-phrase matching.
    ///
    /// `\b` is only asserted at an end that is a word character, so keywords
    /// like `1:1` or `<>` still match between spaces.
    pub fn compile(keyword: &str) -> Result<Self> {
        let keyword = normalize_keyword(keyword)?;
        let mut pattern = String::from("(?i)");
        if keyword.chars().next().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(&keyword));
        if keyword.chars().last().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        let regex = Regex::new(&pattern).map_err(|source| CoreError::Pattern {
            keyword: keyword.clone(),
            source,
        })?;
        Ok(Self { keyword, regex })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn normalize_keyword(keyword: &str) -> Result<String> {
    let normalized = keyword.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "keywords".to_string(),
            message: "keyword must not be empty".to_string(),
        }
        .into());
    }
    Ok(normalized)
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: CategoryRule,
    patterns: Vec<KeywordPattern>,
}

/// Compiled keyword table.
#[derive(Debug, Clone)]
pub struct KeywordRegistry {
    rules: Vec<CompiledRule>,
}

impl Default for KeywordRegistry {
    fn default() -> Self {
        Self::new(builtin_rules()).expect("built-in keyword table compiles")
    }
}

impl KeywordRegistry {
    /// Build a registry from an explicit rule list.
    ///
    /// Keywords are lowercased and deduplicated per category. Rules for
    /// `Uncategorized` are ignored since that category is the no-match result.
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self> {
        let mut compiled: Vec<CompiledRule> = Vec::with_capacity(rules.len());
        for rule in rules {
            if rule.category == Category::Uncategorized {
                tracing::warn!("ignoring keyword rule for the uncategorized category");
                continue;
            }

            let mut keywords: Vec<String> = Vec::with_capacity(rule.keywords.len());
            let mut patterns = Vec::with_capacity(rule.keywords.len());
            for keyword in &rule.keywords {
                let pattern = KeywordPattern::compile(keyword)?;
                if keywords.iter().any(|k| k == pattern.keyword()) {
                    continue;
                }
                keywords.push(pattern.keyword().to_string());
                patterns.push(pattern);
            }

            // A category listed twice merges into the first entry.
            if let Some(existing) = compiled.iter_mut().find(|c| c.rule.category == rule.category) {
                for pattern in patterns {
                    if !existing.rule.keywords.iter().any(|k| k == pattern.keyword()) {
                        existing.rule.keywords.push(pattern.keyword().to_string());
                        existing.patterns.push(pattern);
                    }
                }
                continue;
            }

            compiled.push(CompiledRule {
                rule: CategoryRule {
                    category: rule.category,
                    priority: rule.priority,
                    keywords,
                },
                patterns,
            });
        }

        Ok(Self { rules: compiled })
    }

    /// Built-in table adjusted by user configuration.
    ///
    /// With `replace = false` configured keywords are added to the built-ins;
    /// with `replace = true` a non-empty configured list replaces that
    /// category's built-in list.
    pub fn with_overrides(config: &KeywordConfig) -> Result<Self> {
        let rules = builtin_rules()
            .into_iter()
            .map(|mut rule| {
                let extra = config.keywords_for(rule.category);
                if config.replace && !extra.is_empty() {
                    rule.keywords = extra.to_vec();
                } else {
                    rule.keywords.extend(extra.iter().cloned());
                }
                rule
            })
            .collect();
        Self::new(rules)
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter().map(|c| &c.rule)
    }

    pub fn rule(&self, category: Category) -> Option<&CategoryRule> {
        self.rules().find(|r| r.category == category)
    }

    /// Compiled patterns for one category (empty if it has no rule).
    pub fn patterns(&self, category: Category) -> &[KeywordPattern] {
        self.rules
            .iter()
            .find(|c| c.rule.category == category)
            .map(|c| c.patterns.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn compiled(&self) -> impl Iterator<Item = (&CategoryRule, &[KeywordPattern])> {
        self.rules.iter().map(|c| (&c.rule, c.patterns.as_slice()))
    }
}

/// The default keyword table.
pub fn builtin_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            Category::CompanyWide,
            [
                // company indicators
                "company", "corporate", "organization", "enterprise",
                // large meetings
                "all hands", "all-hands", "town hall", "townhall",
                "summit", "quarterly", "annual", "yearly",
                // company-wide events
                "announcement", "update", "briefing", "showcase",
                "celebration", "awards", "recognition",
                // executive
                "executive", "leadership", "ceo", "cfo", "cto",
                // culture
                "culture", "values", "mission", "vision",
                // performance
                "earnings", "results", "performance", "strategy",
            ],
        ),
        CategoryRule::new(
            Category::StaffTeam,
            [
                "team", "staff", "squad", "crew", "group",
                // recurring cadence
                "standup", "sync", "check-in", "touchbase", "touch-base",
                "daily", "weekly", "biweekly", "monthly",
                // small groups
                "1:1", "one on one", "one-on-one", "<>",
                "catchup", "catch-up",
                "huddle", "scrum", "alignment", "coordination",
                "status", "update", "collaboration",
                // roles
                "lead", "manager", "supervisor", "coordinator", "peer",
            ],
        ),
        CategoryRule::new(
            Category::Department,
            [
                "engineering", "software", "development", "devops",
                "sales", "marketing", "finance", "accounting",
                "hr", "human resources", "support", "customer service",
                "operations", "it", "infrastructure", "security",
                "product", "design", "research", "qa",
                // department rituals
                "retrospective", "retro", "planning", "review",
                "sprint", "backlog", "roadmap", "strategy",
                "architecture", "deployment", "release",
                "department", "division", "unit", "branch",
                "initiative", "project", "program", "workflow",
                "debrief", "analysis", "assessment", "evaluation",
                "quarterly review", "milestone", "objectives",
                "goals", "metrics", "kpi",
            ],
        ),
        CategoryRule::new(
            Category::Onboarding,
            [
                "onboarding", "orientation", "introduction", "intro",
                "new hire", "new-hire", "first day", "first week",
                "training", "welcome", "overview", "setup",
                "documentation", "paperwork", "benefits",
                "getting started", "kickoff", "kick-off",
                "mentor", "buddy", "guide", "tour",
                "handbook", "manual", "policies", "procedures",
                "system access", "credentials",
                "hr meeting", "employee", "i9",
                "direct deposit", "enrollment",
            ],
        ),
    ]
}
