//! Built-in skill table and JSON loading for page-supplied items.

use super::config::ConfigError;
use super::item::{CarouselItem, SkillLevel};
use std::collections::BTreeMap;

const IMAGE_QUERY: &str = "?auto=compress&cs=tinysrgb&w=400";

fn tech(
    id: &str,
    title: &str,
    description: &str,
    photo: u32,
    category: &str,
    level: SkillLevel,
    years: u32,
) -> CarouselItem {
    CarouselItem {
        id: id.into(),
        title: Some(title.to_string()),
        description: description.to_string(),
        image: Some(format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{IMAGE_QUERY}"
        )),
        category: category.to_string(),
        level: Some(level),
        years_of_experience: years,
        extra: BTreeMap::new(),
    }
}

/// Default tech stack shown when the page does not supply its own.
pub fn tech_items() -> Vec<CarouselItem> {
    use SkillLevel::*;
    vec![
        tech(
            "react",
            "React",
            "A JavaScript library for building user interfaces with component-based architecture and virtual DOM for optimal performance.",
            11035380,
            "Frontend",
            Expert,
            4,
        ),
        tech(
            "typescript",
            "TypeScript",
            "A strongly typed programming language that builds on JavaScript, giving you better tooling at any scale.",
            270348,
            "Language",
            Expert,
            3,
        ),
        tech(
            "nodejs",
            "Node.js",
            "A JavaScript runtime built on Chrome's V8 engine for building scalable network applications and server-side development.",
            1181263,
            "Backend",
            Advanced,
            3,
        ),
        tech(
            "python",
            "Python",
            "A versatile programming language perfect for web development, data science, AI, and automation with clean syntax.",
            1181671,
            "Language",
            Expert,
            5,
        ),
        tech(
            "aws",
            "AWS",
            "Amazon Web Services cloud platform providing scalable computing, storage, and networking infrastructure solutions.",
            1181298,
            "Cloud",
            Intermediate,
            2,
        ),
        tech(
            "docker",
            "Docker",
            "Containerization platform that enables developers to package applications with their dependencies for consistent deployment.",
            1181244,
            "DevOps",
            Advanced,
            2,
        ),
        tech(
            "mongodb",
            "MongoDB",
            "A NoSQL document database that provides high performance, high availability, and easy scalability for modern applications.",
            1181316,
            "Database",
            Advanced,
            3,
        ),
        tech(
            "git",
            "Git",
            "Distributed version control system for tracking changes in source code during software development projects.",
            1181354,
            "Tools",
            Expert,
            5,
        ),
    ]
}

/// Parse a JSON array of items (camelCase keys, unknown keys kept in `extra`).
///
/// Only a document that is not an array is an error. Entries without an `id`
/// take their position as id; an entry that still fails to parse is skipped
/// with a warning and the rest of the list is kept.
pub fn parse_items(json: &str) -> Result<Vec<CarouselItem>, ConfigError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, mut value)| {
            if let Some(obj) = value.as_object_mut() {
                if obj.get("id").map_or(true, serde_json::Value::is_null) {
                    obj.insert("id".to_string(), index.into());
                }
            }
            match serde_json::from_value::<CarouselItem>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("[carousel] skipping item {}: {}", index, e);
                    None
                }
            }
        })
        .collect())
}

/// Page-supplied items when present and well formed, the built-in table otherwise.
pub fn items_or_default(json: Option<&str>) -> Vec<CarouselItem> {
    match json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match parse_items(raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("[carousel] {e}; using built-in items");
                tech_items()
            }
        },
        None => tech_items(),
    }
}
