use chrono::NaiveDate;
use content::blog::{BlogDetail, BlogPost};
use content::text;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Excerpts derived from detail content are truncated to this many characters.
const EXCERPT_LENGTH: usize = 150;

#[derive(Serialize, ToSchema)]
pub struct BlogPostResponse {
    pub id: u32,
    pub slug: String,
    pub title: String,
    /// Authored excerpt, or one derived from the detail content.
    pub excerpt: Option<String>,
    pub date: NaiveDate,
    /// Authored reading time, or one computed from the detail content.
    #[schema(example = "8 min read")]
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub author: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct BlogDetailResponse {
    pub slug: String,
    pub title: String,
    /// Markdown narrative.
    pub content: String,
    pub table_of_contents: Vec<TocEntryResponse>,
    pub code_examples: Vec<CodeExampleResponse>,
    pub related_topics: Vec<String>,
    pub practice_problems: Vec<PracticeProblemResponse>,
    pub references: Vec<ReferenceResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct TocEntryResponse {
    pub title: String,
    pub anchor: String,
    pub level: u8,
}

#[derive(Serialize, ToSchema)]
pub struct CodeExampleResponse {
    pub title: String,
    pub language: String,
    pub code: String,
    pub explanation: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PracticeProblemResponse {
    pub title: String,
    pub platform: String,
    pub difficulty: String,
    pub link: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReferenceResponse {
    pub title: String,
    pub url: String,
}

/// Resolved blog page; `detail: null` is the fallback path.
#[derive(Serialize, ToSchema)]
pub struct BlogPageResponse {
    pub post: BlogPostResponse,
    pub detail: Option<BlogDetailResponse>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogListQuery {
    /// Keep only records whose featured flag matches.
    pub featured: Option<bool>,
    /// Case-insensitive substring match over tags.
    pub tag: Option<String>,
    /// Exact category match; `All` disables the filter.
    pub category: Option<String>,
}

impl BlogPostResponse {
    /// Build the summary DTO, deriving `excerpt` and `read_time` from the
    /// detail content when the record doesn't carry them.
    pub fn from_parts(post: &BlogPost, detail: Option<&BlogDetail>) -> Self {
        let excerpt = post
            .excerpt
            .clone()
            .or_else(|| detail.map(|d| text::plain_excerpt(&d.content, EXCERPT_LENGTH)));
        let read_time = post
            .read_time
            .clone()
            .or_else(|| detail.map(|d| text::reading_time(&d.content)));

        Self {
            id: post.id,
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt,
            date: post.date,
            read_time,
            tags: post.tags.clone(),
            category: post.category.clone(),
            featured: post.featured,
            author: post.author.clone(),
            image: post.image.clone(),
        }
    }
}

impl From<&BlogDetail> for BlogDetailResponse {
    fn from(d: &BlogDetail) -> Self {
        Self {
            slug: d.slug.clone(),
            title: d.title.clone(),
            content: d.content.clone(),
            table_of_contents: d
                .table_of_contents
                .iter()
                .map(|t| TocEntryResponse {
                    title: t.title.clone(),
                    anchor: t.anchor.clone(),
                    level: t.level,
                })
                .collect(),
            code_examples: d
                .code_examples
                .iter()
                .map(|c| CodeExampleResponse {
                    title: c.title.clone(),
                    language: c.language.clone(),
                    code: c.code.clone(),
                    explanation: c.explanation.clone(),
                })
                .collect(),
            related_topics: d.related_topics.clone(),
            practice_problems: d
                .practice_problems
                .iter()
                .map(|p| PracticeProblemResponse {
                    title: p.title.clone(),
                    platform: p.platform.clone(),
                    difficulty: p.difficulty.clone(),
                    link: p.link.clone(),
                })
                .collect(),
            references: d
                .references
                .iter()
                .map(|r| ReferenceResponse {
                    title: r.title.clone(),
                    url: r.url.clone(),
                })
                .collect(),
        }
    }
}
