use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::ContentRecord;

/// Summary record for a blog post.
///
/// `excerpt` and `read_time` may be omitted by the author; the serving layer
/// derives them from the detail content when present.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub date: NaiveDate,
    pub read_time: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub published: bool,
    pub details_file: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
}

/// Extended companion to a [`BlogPost`], keyed by `details_file`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlogDetail {
    pub slug: String,
    pub title: String,
    /// Markdown narrative. Rendering is the consumer's concern.
    pub content: String,
    #[serde(default)]
    pub table_of_contents: Vec<TocEntry>,
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,
    #[serde(default)]
    pub related_topics: Vec<String>,
    #[serde(default)]
    pub practice_problems: Vec<PracticeProblem>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CodeExample {
    pub title: String,
    pub language: String,
    pub code: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PracticeProblem {
    pub title: String,
    pub platform: String,
    pub difficulty: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
}

impl ContentRecord for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn id_key(&self) -> String {
        self.id.to_string()
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn details_file(&self) -> Option<&str> {
        self.details_file.as_deref()
    }
}
