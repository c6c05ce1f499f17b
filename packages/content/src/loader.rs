use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::achievement::{Achievement, AchievementDetail};
use crate::blog::{BlogDetail, BlogPost};
use crate::details::DetailStore;
use crate::profile::Profile;
use crate::project::{Project, ProjectDetail};
use crate::record::ContentRecord;
use crate::registry::{Registry, RegistryError};
use crate::site::Site;

/// Startup failure while loading the content tree. None of these can occur
/// at request time: a site that loads serves only the data it validated.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("details file '{key}' referenced by {category} '{slug}' does not exist")]
    DanglingDetailsKey {
        category: &'static str,
        slug: String,
        key: String,
    },
}

#[derive(Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct AchievementsFile {
    #[serde(default)]
    achievements: Vec<Achievement>,
}

#[derive(Deserialize)]
struct BlogFile {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

/// Load the content tree under `dir`:
///
/// ```text
/// dir/
///   projects.toml            achievements.toml        blog.toml
///   profile.toml
///   project-details/*.toml   achievement-details/*.toml   blog-details/*.toml
/// ```
pub fn load_site(dir: &Path, strict: bool) -> Result<Site, LoadError> {
    let projects: ProjectsFile = parse_file(&dir.join("projects.toml"))?;
    let achievements: AchievementsFile = parse_file(&dir.join("achievements.toml"))?;
    let blog: BlogFile = parse_file(&dir.join("blog.toml"))?;
    let profile: Profile = parse_file(&dir.join("profile.toml"))?;

    let projects = Registry::new("project", projects.projects)?;
    let achievements = Registry::new("achievement", achievements.achievements)?;
    let blog = Registry::new("blog", blog.posts)?;

    let project_details = DetailStore::new(
        "project",
        load_detail_dir(&dir.join("project-details"))?,
    );
    let achievement_details = DetailStore::new(
        "achievement",
        load_detail_dir(&dir.join("achievement-details"))?,
    );
    let blog_details = DetailStore::new("blog", load_detail_dir(&dir.join("blog-details"))?);

    check_detail_keys(&projects, &project_details, strict)?;
    check_detail_keys(&achievements, &achievement_details, strict)?;
    check_detail_keys(&blog, &blog_details, strict)?;

    info!(
        projects = projects.len(),
        achievements = achievements.len(),
        posts = blog.len(),
        "content loaded"
    );

    Ok(Site {
        projects,
        achievements,
        blog,
        project_details,
        achievement_details,
        blog_details,
        profile,
    })
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every `*.toml` file in `dir` into a key → record map, keyed by file
/// stem. A missing directory is an empty namespace, not an error; a
/// malformed file is rejected here rather than at request time.
fn load_detail_dir<D: DeserializeOwned>(dir: &Path) -> Result<HashMap<String, D>, LoadError> {
    let mut records = HashMap::new();
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no details directory");
        return Ok(records);
    }

    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let record: D = parse_file(&path)?;
        records.insert(stem.to_string(), record);
    }

    Ok(records)
}

/// Startup sweep over every `details_file` reference. Dangling keys are
/// warnings by default so a typo degrades one page instead of the whole
/// site; strict mode turns them into load failures for CI.
fn check_detail_keys<T: ContentRecord, D>(
    registry: &Registry<T>,
    details: &DetailStore<D>,
    strict: bool,
) -> Result<(), LoadError> {
    for record in registry.all() {
        if let Some(key) = record.details_file()
            && details.resolve(key).is_none()
        {
            if strict {
                return Err(LoadError::DanglingDetailsKey {
                    category: registry.category(),
                    slug: record.slug().to_string(),
                    key: key.to_string(),
                });
            }
            warn!(
                category = registry.category(),
                slug = record.slug(),
                key,
                "details file key does not resolve"
            );
        }
    }
    Ok(())
}
