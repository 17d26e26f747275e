use anyhow::Result;
use log::info;
use serde_json::{Value, json};

use crate::db::store::ContentRepository;
use crate::models::content::ContentBlock;

/// Its presence marks the content collection as already seeded.
const SENTINEL_TYPE: &str = "developers";

pub const CONTENT_LIST_LIMIT: i64 = 100;

/// Placeholder content shown until an admin edits it.
pub fn default_content() -> Vec<ContentBlock> {
    vec![
        ContentBlock::new("developers", default_developers()),
        ContentBlock::new("projects", default_projects()),
        ContentBlock::new(
            "navItems",
            json!([
                { "label": "Home", "link": "/", "ariaLabel": "Go to home page" },
                { "label": "About", "link": "/about", "ariaLabel": "Learn about us" },
                { "label": "Projects", "link": "/projects", "ariaLabel": "View our projects" },
                { "label": "Contact", "link": "/contact", "ariaLabel": "Get in touch" }
            ]),
        ),
        ContentBlock::new(
            "socialLinks",
            json!([
                { "label": "GitHub", "link": "https://github.com" },
                { "label": "LinkedIn", "link": "https://linkedin.com" },
                { "label": "Twitter", "link": "https://twitter.com" }
            ]),
        ),
    ]
}

fn default_developers() -> Value {
    json!([
        {
            "id": "gokay",
            "name": "Gökay Gülüstán",
            "role": "Full Stack Developer",
            "avatar": "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=160&h=160&fit=crop&crop=face",
            "bio": "Passionate full-stack developer with expertise in building scalable web applications.",
            "techStack": ["React", "Node.js", "TypeScript", "PostgreSQL", "AWS", "Docker", "Python", "MongoDB"],
            "social": {
                "github": "https://github.com/placeholder-gokay",
                "linkedin": "https://linkedin.com/in/placeholder-gokay",
                "email": "gokay@example.com"
            },
            "experience": "5+ years",
            "location": "Istanbul, Turkey"
        },
        {
            "id": "mithat",
            "name": "Mithat Sadedartar",
            "role": "Frontend Developer",
            "avatar": "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=160&h=160&fit=crop&crop=face",
            "bio": "Creative frontend developer focused on crafting beautiful, intuitive user interfaces.",
            "techStack": ["React", "Vue.js", "TypeScript", "Tailwind CSS", "Framer Motion", "GSAP", "Figma"],
            "social": {
                "github": "https://github.com/placeholder-mithat",
                "linkedin": "https://linkedin.com/in/placeholder-mithat",
                "email": "mithat@example.com"
            },
            "experience": "4+ years",
            "location": "Istanbul, Turkey"
        }
    ])
}

fn default_projects() -> Value {
    json!([
        {
            "id": "1",
            "title": "iOS-Style Dashboard",
            "description": "A comprehensive analytics dashboard",
            "stack": ["React", "TypeScript"],
            "role": "Full Stack",
            "developer": "gokay",
            "year": 2024,
            "url": "https://example.com/dashboard",
            "repo": "https://github.com/example/dashboard",
            "coverImage": "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
            "category": "Dashboard"
        },
        {
            "id": "2",
            "title": "Insurance Automation Platform",
            "description": "End-to-end insurance processing system",
            "stack": ["Node.js", "Python"],
            "role": "Full Stack",
            "developer": "gokay",
            "year": 2024,
            "url": "https://example.com/insurance",
            "repo": "https://github.com/example/insurance",
            "coverImage": "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=600&h=400&fit=crop",
            "category": "Web App"
        }
    ])
}

/// Write the default blocks unless the sentinel block exists.
///
/// Returns whether anything was written. Safe to call on every start.
pub async fn seed_default_content<S>(store: &S) -> Result<bool>
where
    S: ContentRepository + ?Sized,
{
    if store.find_content(SENTINEL_TYPE).await?.is_some() {
        return Ok(false);
    }

    let defaults = default_content();
    for block in &defaults {
        store.upsert_content(block).await?;
    }
    info!("Seeded {} default content blocks", defaults.len());
    Ok(true)
}

/// Stored block for `content_type`, or an empty one.
pub async fn get_content<S>(store: &S, content_type: &str) -> Result<ContentBlock>
where
    S: ContentRepository + ?Sized,
{
    Ok(store
        .find_content(content_type)
        .await?
        .unwrap_or_else(|| ContentBlock::empty(content_type)))
}

/// Replace the payload for `content_type` wholesale.
pub async fn put_content<S>(store: &S, content_type: &str, data: Value) -> Result<()>
where
    S: ContentRepository + ?Sized,
{
    store
        .upsert_content(&ContentBlock::new(content_type, data))
        .await
}
