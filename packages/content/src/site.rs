use std::path::Path;

use crate::achievement::{Achievement, AchievementDetail};
use crate::blog::{BlogDetail, BlogPost};
use crate::details::DetailStore;
use crate::loader::{self, LoadError};
use crate::profile::Profile;
use crate::project::{Project, ProjectDetail};
use crate::registry::Registry;
use crate::resolver::{self, Resolution};

/// The whole site's content, loaded once at startup and immutable after.
/// Resolution over it is pure and safe to share across requests.
#[derive(Debug)]
pub struct Site {
    pub projects: Registry<Project>,
    pub achievements: Registry<Achievement>,
    pub blog: Registry<BlogPost>,
    pub project_details: DetailStore<ProjectDetail>,
    pub achievement_details: DetailStore<AchievementDetail>,
    pub blog_details: DetailStore<BlogDetail>,
    pub profile: Profile,
}

impl Site {
    /// Load and validate all content under `dir`. Integrity violations are
    /// load errors; dangling `details_file` keys are warnings unless
    /// `strict` is set.
    pub fn load(dir: &Path, strict: bool) -> Result<Self, LoadError> {
        loader::load_site(dir, strict)
    }

    pub fn resolve_project(&self, slug: &str) -> Resolution<'_, Project, ProjectDetail> {
        resolver::resolve(&self.projects, &self.project_details, slug)
    }

    pub fn resolve_achievement(&self, slug: &str) -> Resolution<'_, Achievement, AchievementDetail> {
        resolver::resolve(&self.achievements, &self.achievement_details, slug)
    }

    /// Resolve a blog slug. Unpublished posts are invisible here: their
    /// slugs resolve to `NotFound`, the same as slugs that never existed.
    pub fn resolve_blog(&self, slug: &str) -> Resolution<'_, BlogPost, BlogDetail> {
        match self.blog.get(slug) {
            Some(post) if !post.published => Resolution::NotFound,
            Some(_) => resolver::resolve(&self.blog, &self.blog_details, slug),
            None => Resolution::NotFound,
        }
    }

    /// Published posts in declaration order.
    pub fn published_posts(&self) -> impl Iterator<Item = &BlogPost> {
        self.blog.all().iter().filter(|p| p.published)
    }
}
