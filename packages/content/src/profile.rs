use serde::{Deserialize, Serialize};

/// The author profile served verbatim on the about surface. A single record
/// with no lookup semantics.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub university: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub bio: String,
    pub status: Option<String>,
    pub looking: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    pub education: Option<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub duration: String,
    #[serde(default)]
    pub relevant_courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}
