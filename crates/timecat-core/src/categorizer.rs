//! Keyword scoring and category resolution.
//!
//! A category's score is the number of its distinct keywords present in
//! the meeting's searchable text (subject, then organizer). The highest
//! score wins; ties go to the category with the lowest priority rank; a
//! zero top score yields [`Category::Uncategorized`].

use serde::Serialize;
use std::collections::BTreeMap;

use crate::category::Category;
use crate::meeting::{self, MeetingRecord};
use crate::registry::KeywordRegistry;

/// Per-category match details for one meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: usize,
    pub matched: Vec<String>,
}

/// Outcome of categorizing one meeting, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    /// Scores for every keyword-bearing category, in registry order.
    pub scores: Vec<CategoryScore>,
    /// True when more than one category reached the top score.
    pub tie_broken: bool,
}

impl Classification {
    pub fn top_score(&self) -> usize {
        self.scores.iter().map(|s| s.score).max().unwrap_or(0)
    }

    pub fn score_for(&self, category: Category) -> usize {
        self.scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.score)
            .unwrap_or(0)
    }
}

/// Meetings grouped by category. Every category key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedCollection {
    groups: BTreeMap<Category, Vec<MeetingRecord>>,
}

impl Default for CategorizedCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorizedCollection {
    pub fn new() -> Self {
        Self {
            groups: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, category: Category, meeting: MeetingRecord) {
        self.groups.entry(category).or_default().push(meeting);
    }

    pub fn get(&self, category: Category) -> &[MeetingRecord] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All categories in listing order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[MeetingRecord])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Only categories holding at least one meeting.
    pub fn populated(&self) -> impl Iterator<Item = (Category, &[MeetingRecord])> {
        self.iter().filter(|(_, meetings)| !meetings.is_empty())
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assigns meetings to categories using a [`KeywordRegistry`].
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    registry: KeywordRegistry,
}

impl Categorizer {
    pub fn new(registry: KeywordRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    /// Category for a single meeting.
    pub fn categorize(&self, meeting: &MeetingRecord) -> Category {
        self.explain(meeting).category
    }

    /// Category for a single meeting along with per-category scores.
    pub fn explain(&self, meeting: &MeetingRecord) -> Classification {
        self.classify_text(&meeting.searchable_text())
    }

    /// Classify a subject and organizer that are not part of a record.
    pub fn classify_parts(&self, subject: &str, organizer: &str) -> Classification {
        self.classify_text(&meeting::searchable_text(subject, organizer))
    }

    /// Score arbitrary text the same way a meeting's searchable text is scored.
    pub fn classify_text(&self, text: &str) -> Classification {
        let mut scores = Vec::new();
        let mut best: Option<(usize, u8, Category)> = None;
        let mut top_count = 0usize;

        for (rule, patterns) in self.registry.compiled() {
            let matched: Vec<String> = patterns
                .iter()
                .filter(|p| p.is_match(text))
                .map(|p| p.keyword().to_string())
                .collect();
            let score = matched.len();

            if score > 0 {
                match best {
                    Some((best_score, _, _)) if score < best_score => {}
                    Some((best_score, best_priority, _)) if score == best_score => {
                        top_count += 1;
                        if rule.priority < best_priority {
                            best = Some((score, rule.priority, rule.category));
                        }
                    }
                    _ => {
                        best = Some((score, rule.priority, rule.category));
                        top_count = 1;
                    }
                }
            }

            scores.push(CategoryScore {
                category: rule.category,
                score,
                matched,
            });
        }

        let category = best.map(|(_, _, c)| c).unwrap_or(Category::Uncategorized);
        tracing::debug!(
            text,
            category = category.key(),
            tie = top_count > 1,
            "categorized meeting"
        );

        Classification {
            category,
            scores,
            tie_broken: top_count > 1,
        }
    }

    /// Categorize each meeting independently and group by category,
    /// preserving input order within each group.
    pub fn categorize_batch<'a, I>(&self, meetings: I) -> CategorizedCollection
    where
        I: IntoIterator<Item = &'a MeetingRecord>,
    {
        let mut collection = CategorizedCollection::new();
        for meeting in meetings {
            collection.push(self.categorize(meeting), meeting.clone());
        }
        collection
    }
}
