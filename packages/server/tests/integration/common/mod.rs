use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use content::Site;
use reqwest::Client;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{AppConfig, ContentConfig, CorsConfig, ServerConfig};
use server::state::AppState;

pub mod routes {
    pub const PROJECTS: &str = "/api/v1/projects";
    pub const ACHIEVEMENTS: &str = "/api/v1/achievements";
    pub const BLOG: &str = "/api/v1/blog";
    pub const PROFILE: &str = "/api/v1/profile";
    pub const CONTACT: &str = "/api/v1/contact";

    pub fn project(slug: &str) -> String {
        format!("{PROJECTS}/{slug}")
    }

    pub fn achievement(slug: &str) -> String {
        format!("{ACHIEVEMENTS}/{slug}")
    }

    pub fn blog_post(slug: &str) -> String {
        format!("{BLOG}/{slug}")
    }
}

/// A running test server over a fixture content tree.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    _content_dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let content_dir = tempfile::tempdir().expect("create content dir");
        write_fixture_content(content_dir.path());

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            content: ContentConfig {
                dir: content_dir.path().to_path_buf(),
                strict: false,
            },
        };

        let site = Site::load(&config.content.dir, config.content.strict)
            .expect("fixture content should load");
        let state = AppState {
            site: Arc::new(site),
            config,
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            _content_dir: content_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }
}

const PROJECTS: &str = r#"
[[projects]]
id = 1
slug = "alpha-app"
title = "Alpha App"
description = "A unified dashboard for tracking things."
long_description = "Alpha App aggregates several feeds into one dashboard."
tech = ["Rust", "Axum", "PostgreSQL"]
github = "https://github.com/example/alpha-app"
category = "Web Development"
featured = true
status = "Completed"
details_file = "alpha-app"

[[projects]]
id = 2
slug = "beta-tool"
title = "Beta Tool"
description = "A command-line helper."
tech = ["Rust", "Clap"]
github = "https://github.com/example/beta-tool"
category = "Tooling"
featured = false
status = "In Progress"
details_file = "beta-tool.md"

[[projects]]
id = 3
slug = "gamma-site"
title = "Gamma Site"
description = "A static site."
tech = ["HTML", "CSS"]
github = "https://github.com/example/gamma-site"
category = "Web Development"
featured = true
status = "Planning"
"#;

const ALPHA_DETAIL: &str = r#"
slug = "alpha-app"
title = "Alpha App"
content = """
# Alpha App

Long-form overview of the dashboard, its feeds and its architecture.
"""
"#;

const ACHIEVEMENTS: &str = r#"
[[achievements]]
id = "regional-2023"
title = "Regional Contest 2023"
date = "2023-11-15"
team_name = "long_shot"
rank = 26
category = "Programming Contest"
organizer = "Example University"
description = "Secured 26th position among the top teams."
tags = ["Regional", "Team Contest"]
featured = true

[[achievements]]
id = "national-2024"
title = "National Contest 2024"
date = "2024-12-10"
team_name = "oblivion"
rank = 37
category = "Programming Contest"
organizer = "Another University"
description = "Represented the university at the national round."
tags = ["National", "Team Contest"]
featured = true

[[achievements]]
id = "campus-2025"
title = "Campus Contest 2025"
date = "2025-02-15"
rank = 20
category = "Programming Contest"
organizer = "Campus Club"
description = "Top twenty finish at the campus round."
tags = ["Campus"]
featured = false

[[achievements]]
id = "industry-2025"
title = "Industry Code Contest 2025"
date = "2025-05-12"
rank = 9
problems_solved = 5
category = "Programming Contest"
organizer = "Example R&D Institute"
description = "Ninth place in the onsite round."
tags = ["Industry", "Top 10"]
featured = true
details_file = "industry-2025"
"#;

const INDUSTRY_DETAIL: &str = r#"
slug = "industry-2025"
overview = "Onsite round with industry-relevant problem sets."
highlights = [
  "Solved five problems",
  "Finished ninth overall",
]
challenges = ["Tight time pressure"]
problems_attempted = 7
problems_solved = 5
contest_duration = "4 hours"
reflection = "Consistent practice paid off."
"#;

const BLOG: &str = r#"
[[posts]]
id = 1
slug = "dp-guide"
title = "Dynamic Programming Guide"
date = "2024-03-15"
tags = ["Dynamic Programming", "Algorithms"]
category = "Tutorial"
featured = true
published = true
details_file = "dp-guide"
author = "Test Author"

[[posts]]
id = 2
slug = "contest-tips"
title = "Contest Tips"
excerpt = "Hand-written excerpt about contest strategy."
date = "2024-03-05"
read_time = "6 min read"
tags = ["Strategy"]
category = "Strategy"
featured = false
published = true
details_file = "missing-post"

[[posts]]
id = 3
slug = "draft-notes"
title = "Draft Notes"
excerpt = "Not ready yet."
date = "2024-02-01"
tags = ["Meta"]
category = "Personal"
featured = false
published = false
"#;

const DP_GUIDE_DETAIL: &str = r#"
slug = "dp-guide"
title = "Dynamic Programming Guide"
content = """
# Dynamic Programming Guide

Dynamic programming solves complex problems by breaking them into
overlapping subproblems and storing intermediate results.

## When to use it

Look for optimal substructure and overlapping subproblems.
"""

[[table_of_contents]]
title = "When to use it"
anchor = "when-to-use-it"
level = 2

[[code_examples]]
title = "Fibonacci with memoization"
language = "rust"
code = '''
fn fib(n: u64, memo: &mut Vec<Option<u64>>) -> u64 {
    if n <= 1 {
        return n;
    }
    if let Some(v) = memo[n as usize] {
        return v;
    }
    let v = fib(n - 1, memo) + fib(n - 2, memo);
    memo[n as usize] = Some(v);
    v
}
'''
explanation = "Memoization turns the exponential recursion linear."

[[references]]
title = "Introduction to Algorithms"
url = "https://example.com/clrs"
"#;

const PROFILE: &str = r#"
name = "Test Author"
title = "Software Engineer"
university = "Example University"
email = "author@example.com"
location = "Dhaka, Bangladesh"
bio = "Builds content services and writes about algorithms."

[[skills]]
name = "Programming Languages"

[[skills.skills]]
name = "Rust"
level = 90

[[skills.skills]]
name = "C++"
level = 85

[education]
degree = "BSc in Computer Science"
university = "Example University"
duration = "2021 - 2025"
relevant_courses = ["Algorithms", "Operating Systems"]

[[experience]]
title = "Mentor"
organization = "Programming Club"
duration = "2023 - Present"
description = "Mentors junior students in algorithms."

[[social_links]]
name = "github"
url = "https://github.com/example"
"#;

fn write_fixture_content(dir: &Path) {
    fs::write(dir.join("projects.toml"), PROJECTS).unwrap();
    fs::write(dir.join("achievements.toml"), ACHIEVEMENTS).unwrap();
    fs::write(dir.join("blog.toml"), BLOG).unwrap();
    fs::write(dir.join("profile.toml"), PROFILE).unwrap();

    fs::create_dir(dir.join("project-details")).unwrap();
    fs::write(dir.join("project-details/alpha-app.toml"), ALPHA_DETAIL).unwrap();

    fs::create_dir(dir.join("achievement-details")).unwrap();
    fs::write(
        dir.join("achievement-details/industry-2025.toml"),
        INDUSTRY_DETAIL,
    )
    .unwrap();

    fs::create_dir(dir.join("blog-details")).unwrap();
    fs::write(dir.join("blog-details/dp-guide.toml"), DP_GUIDE_DETAIL).unwrap();
}
