//! Meeting categories and their tie-break priority.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organizational category a meeting is assigned to.
///
/// Every meeting lands in exactly one category. `Uncategorized` is only
/// produced when no keyword matched at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CompanyWide,
    StaffTeam,
    Department,
    Onboarding,
    Uncategorized,
}

/// Explicit tie-break ranks (lower wins). Kept separate from the variant
/// order so reordering the enum cannot change classification.
const PRIORITY_TABLE: [(Category, u8); 5] = [
    (Category::StaffTeam, 1),
    (Category::Department, 2),
    (Category::CompanyWide, 3),
    (Category::Onboarding, 4),
    (Category::Uncategorized, 5),
];

impl Category {
    /// All categories in listing order.
    pub const ALL: [Category; 5] = [
        Category::CompanyWide,
        Category::StaffTeam,
        Category::Department,
        Category::Onboarding,
        Category::Uncategorized,
    ];

    /// Categories that carry keywords.
    pub const SCORED: [Category; 4] = [
        Category::CompanyWide,
        Category::StaffTeam,
        Category::Department,
        Category::Onboarding,
    ];

    /// Tie-break rank; lower wins.
    pub fn priority(self) -> u8 {
        PRIORITY_TABLE
            .iter()
            .find(|(c, _)| *c == self)
            .map(|(_, rank)| *rank)
            .unwrap_or(u8::MAX)
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Category::CompanyWide => "Company-Wide",
            Category::StaffTeam => "Team/Staff",
            Category::Department => "Department",
            Category::Onboarding => "Onboarding",
            Category::Uncategorized => "Uncategorized",
        }
    }

    /// Stable snake_case key, matching the serde representation and config sections.
    pub fn key(self) -> &'static str {
        match self {
            Category::CompanyWide => "company_wide",
            Category::StaffTeam => "staff_team",
            Category::Department => "department",
            Category::Onboarding => "onboarding",
            Category::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '/', ' '], "_");
        match normalized.as_str() {
            "company_wide" | "company" => Ok(Category::CompanyWide),
            "staff_team" | "team_staff" | "team" | "staff" => Ok(Category::StaffTeam),
            "department" | "dept" => Ok(Category::Department),
            "onboarding" => Ok(Category::Onboarding),
            "uncategorized" => Ok(Category::Uncategorized),
            _ => Err(format!(
                "Invalid category: '{s}'. Use company_wide, staff_team, department, onboarding or uncategorized"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_follows_rank_table() {
        assert_eq!(Category::StaffTeam.priority(), 1);
        assert_eq!(Category::Department.priority(), 2);
        assert_eq!(Category::CompanyWide.priority(), 3);
        assert_eq!(Category::Onboarding.priority(), 4);
        assert_eq!(Category::Uncategorized.priority(), 5);
    }

    #[test]
    fn every_category_has_a_rank() {
        for category in Category::ALL {
            assert!(category.priority() < u8::MAX, "{category:?} has no rank");
        }
    }

    #[test]
    fn labels_match_report_wording() {
        assert_eq!(Category::CompanyWide.to_string(), "Company-Wide");
        assert_eq!(Category::StaffTeam.to_string(), "Team/Staff");
    }

    #[test]
    fn parse_accepts_labels_and_keys() {
        assert_eq!("Team/Staff".parse::<Category>().unwrap(), Category::StaffTeam);
        assert_eq!("company-wide".parse::<Category>().unwrap(), Category::CompanyWide);
        assert_eq!("department".parse::<Category>().unwrap(), Category::Department);
        assert!("meetings".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&Category::StaffTeam).unwrap();
        assert_eq!(json, "\"staff_team\"");
    }
}
