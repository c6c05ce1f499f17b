use chrono::NaiveDate;
use content::achievement::{Achievement, AchievementDetail};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;

#[derive(Serialize, ToSchema)]
pub struct AchievementResponse {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub team_name: Option<String>,
    pub rank: u32,
    pub total_teams: Option<u32>,
    pub problems_solved: Option<u32>,
    /// One of: `Programming Contest`, `Hackathon`, `Award`, `Certification`,
    /// `Other`.
    #[schema(example = "Programming Contest")]
    pub category: String,
    pub organizer: String,
    pub location: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub official_link: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
}

#[derive(Serialize, ToSchema)]
pub struct AchievementDetailResponse {
    pub slug: String,
    pub overview: Option<String>,
    pub highlights: Vec<String>,
    pub challenges: Vec<String>,
    pub team_members: Vec<String>,
    pub problems_attempted: Option<u32>,
    pub problems_solved: Option<u32>,
    pub contest_duration: Option<String>,
    pub reflection: Option<String>,
}

/// Resolved achievement page; `detail: null` is the fallback path.
#[derive(Serialize, ToSchema)]
pub struct AchievementPageResponse {
    pub achievement: AchievementResponse,
    pub detail: Option<AchievementDetailResponse>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AchievementListQuery {
    /// Keep only records whose featured flag matches.
    pub featured: Option<bool>,
    /// Case-insensitive substring match over tags.
    pub tag: Option<String>,
    /// Explicit re-sort; the only accepted value is `date` (newest first).
    /// Without it, declared order is preserved.
    pub sort: Option<String>,
}

pub fn validate_achievement_query(query: &AchievementListQuery) -> Result<(), AppError> {
    match query.sort.as_deref() {
        None | Some("date") => Ok(()),
        Some(_) => Err(AppError::Validation("sort must be one of: date".into())),
    }
}

impl From<&Achievement> for AchievementResponse {
    fn from(a: &Achievement) -> Self {
        Self {
            id: a.id.clone(),
            title: a.title.clone(),
            date: a.date,
            team_name: a.team_name.clone(),
            rank: a.rank,
            total_teams: a.total_teams,
            problems_solved: a.problems_solved,
            category: a.category.to_string(),
            organizer: a.organizer.clone(),
            location: a.location.clone(),
            description: a.description.clone(),
            image: a.image.clone(),
            official_link: a.official_link.clone(),
            tags: a.tags.clone(),
            featured: a.featured,
        }
    }
}

impl From<&AchievementDetail> for AchievementDetailResponse {
    fn from(d: &AchievementDetail) -> Self {
        Self {
            slug: d.slug.clone(),
            overview: d.overview.clone(),
            highlights: d.highlights.clone(),
            challenges: d.challenges.clone(),
            team_members: d.team_members.clone(),
            problems_attempted: d.problems_attempted,
            problems_solved: d.problems_solved,
            contest_duration: d.contest_duration.clone(),
            reflection: d.reflection.clone(),
        }
    }
}
