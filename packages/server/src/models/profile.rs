use content::profile::Profile;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub name: String,
    pub title: String,
    pub university: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub bio: String,
    pub status: Option<String>,
    pub looking: Option<String>,
    pub skills: Vec<SkillGroupResponse>,
    pub education: Option<EducationResponse>,
    pub experience: Vec<ExperienceResponse>,
    pub social_links: Vec<SocialLinkResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct SkillGroupResponse {
    pub name: String,
    pub skills: Vec<SkillResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct SkillResponse {
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
}

#[derive(Serialize, ToSchema)]
pub struct EducationResponse {
    pub degree: String,
    pub university: String,
    pub duration: String,
    pub relevant_courses: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub title: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
}

#[derive(Serialize, ToSchema)]
pub struct SocialLinkResponse {
    pub name: String,
    pub url: String,
}

impl From<&Profile> for ProfileResponse {
    fn from(p: &Profile) -> Self {
        Self {
            name: p.name.clone(),
            title: p.title.clone(),
            university: p.university.clone(),
            email: p.email.clone(),
            location: p.location.clone(),
            bio: p.bio.clone(),
            status: p.status.clone(),
            looking: p.looking.clone(),
            skills: p
                .skills
                .iter()
                .map(|g| SkillGroupResponse {
                    name: g.name.clone(),
                    skills: g
                        .skills
                        .iter()
                        .map(|s| SkillResponse {
                            name: s.name.clone(),
                            level: s.level,
                        })
                        .collect(),
                })
                .collect(),
            education: p.education.as_ref().map(|e| EducationResponse {
                degree: e.degree.clone(),
                university: e.university.clone(),
                duration: e.duration.clone(),
                relevant_courses: e.relevant_courses.clone(),
            }),
            experience: p
                .experience
                .iter()
                .map(|e| ExperienceResponse {
                    title: e.title.clone(),
                    organization: e.organization.clone(),
                    duration: e.duration.clone(),
                    description: e.description.clone(),
                })
                .collect(),
            social_links: p
                .social_links
                .iter()
                .map(|l| SocialLinkResponse {
                    name: l.name.clone(),
                    url: l.url.clone(),
                })
                .collect(),
        }
    }
}
