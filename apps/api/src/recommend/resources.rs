//! Generated resource links attached to each suggestion. These are
//! local placeholder entries; no AI provider is called to produce them.

use crate::models::project::{GeneratedResource, ProjectTemplate, ResourceKind};

/// Builds the placeholder resource list for one suggestion: a tutorial,
/// a documentation reference named after the first matching skill, a
/// repository pointer, and a best-practices article.
pub fn build_resources(template: &ProjectTemplate, matched: &[String]) -> Vec<GeneratedResource> {
    let slug = slugify(&template.title);
    let mut resources = vec![GeneratedResource {
        kind: ResourceKind::Tutorial,
        title: format!("Building a {}: a step-by-step guide", template.title),
        url: format!("https://tutorials.example.com/{slug}"),
    }];

    if let Some(first_skill) = matched.first() {
        resources.push(GeneratedResource {
            kind: ResourceKind::Documentation,
            title: format!("{first_skill} official documentation"),
            url: format!("https://docs.example.com/{}", slugify(first_skill)),
        });
    }

    resources.push(GeneratedResource {
        kind: ResourceKind::Repository,
        title: format!("Community implementations of {}", template.title),
        url: format!("https://github.com/topics/{slug}"),
    });
    resources.push(GeneratedResource {
        kind: ResourceKind::Article,
        title: format!("{} best practices", template.category),
        url: format!("https://articles.example.com/{}", slugify(&template.category)),
    });

    resources
}

/// Lowercases and collapses non-alphanumeric runs to single hyphens.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Difficulty;

    fn make_template() -> ProjectTemplate {
        ProjectTemplate {
            title: "Weather Forecast App".to_string(),
            description: "A forecast dashboard".to_string(),
            skills: vec!["React".to_string(), "APIs".to_string()],
            category: "Web Development".to_string(),
            difficulty: Difficulty::Beginner,
            time_estimate: "10-15 hours".to_string(),
        }
    }

    #[test]
    fn test_four_resources_with_documentation_first_skill() {
        let resources = build_resources(&make_template(), &["React".to_string()]);
        assert_eq!(resources.len(), 4);
        assert_eq!(resources[0].kind, ResourceKind::Tutorial);
        assert_eq!(resources[1].kind, ResourceKind::Documentation);
        assert!(resources[1].title.starts_with("React"));
        assert_eq!(resources[2].kind, ResourceKind::Repository);
        assert_eq!(resources[3].kind, ResourceKind::Article);
    }

    #[test]
    fn test_no_matched_skills_skips_documentation() {
        let resources = build_resources(&make_template(), &[]);
        assert_eq!(resources.len(), 3);
        assert!(resources.iter().all(|r| r.kind != ResourceKind::Documentation));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Weather Forecast App"), "weather-forecast-app");
        assert_eq!(slugify("C++ & Rust!"), "c-rust");
        assert_eq!(slugify("  spaced  "), "spaced");
    }
}
