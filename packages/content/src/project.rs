use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::ContentRecord;

/// Summary record for a portfolio project.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
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
    pub status: ProjectStatus,
    pub image: Option<String>,
    pub details_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planning,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planning => "Planning",
        };
        f.write_str(s)
    }
}

/// Extended long-form companion to a [`Project`], keyed by `details_file`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectDetail {
    pub slug: String,
    pub title: String,
    /// Markdown narrative. Rendering is the consumer's concern.
    pub content: String,
}

impl ContentRecord for Project {
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
