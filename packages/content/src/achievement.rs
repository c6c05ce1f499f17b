use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::ContentRecord;

/// Summary record for a contest result or award.
///
/// The `id` string doubles as the record's slug: achievements are authored
/// with URL-safe identifiers and routed by them directly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub team_name: Option<String>,
    pub rank: u32,
    pub total_teams: Option<u32>,
    pub problems_solved: Option<u32>,
    pub category: AchievementCategory,
    pub organizer: String,
    pub location: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub official_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub featured: bool,
    pub details_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AchievementCategory {
    #[serde(rename = "Programming Contest")]
    ProgrammingContest,
    Hackathon,
    Award,
    Certification,
    Other,
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AchievementCategory::ProgrammingContest => "Programming Contest",
            AchievementCategory::Hackathon => "Hackathon",
            AchievementCategory::Award => "Award",
            AchievementCategory::Certification => "Certification",
            AchievementCategory::Other => "Other",
        };
        f.write_str(s)
    }
}

/// Extended companion to an [`Achievement`], keyed by `details_file`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AchievementDetail {
    pub slug: String,
    pub overview: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub team_members: Vec<String>,
    pub problems_attempted: Option<u32>,
    pub problems_solved: Option<u32>,
    pub contest_duration: Option<String>,
    pub reflection: Option<String>,
}

impl ContentRecord for Achievement {
    fn slug(&self) -> &str {
        &self.id
    }

    fn id_key(&self) -> String {
        self.id.clone()
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn details_file(&self) -> Option<&str> {
        self.details_file.as_deref()
    }
}
