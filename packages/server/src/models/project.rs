use content::project::{Project, ProjectDetail};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub tech: Vec<String>,
    pub github: String,
    pub live: Option<String>,
    pub category: String,
    pub featured: bool,
    /// One of: `Completed`, `In Progress`, `Planning`.
    #[schema(example = "Completed")]
    pub status: String,
    pub image: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    pub slug: String,
    pub title: String,
    /// Markdown narrative.
    pub content: String,
}

/// Resolved project page: the summary record plus the extended record when
/// one exists. `detail: null` is the fallback rendering path, not an error.
#[derive(Serialize, ToSchema)]
pub struct ProjectPageResponse {
    pub project: ProjectResponse,
    pub detail: Option<ProjectDetailResponse>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectListQuery {
    /// Keep only records whose featured flag matches.
    pub featured: Option<bool>,
    /// Exact category match; `All` disables the filter.
    pub category: Option<String>,
}

impl From<&Project> for ProjectResponse {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            slug: p.slug.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            long_description: p.long_description.clone(),
            tech: p.tech.clone(),
            github: p.github.clone(),
            live: p.live.clone(),
            category: p.category.clone(),
            featured: p.featured,
            status: p.status.to_string(),
            image: p.image.clone(),
        }
    }
}

impl From<&ProjectDetail> for ProjectDetailResponse {
    fn from(d: &ProjectDetail) -> Self {
        Self {
            slug: d.slug.clone(),
            title: d.title.clone(),
            content: d.content.clone(),
        }
    }
}
