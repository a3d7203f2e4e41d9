//! The compiled-in project template catalog.
//!
//! Catalog order matters: the scorer's sort is stable, so equal-score
//! templates surface in the order they appear here.

use crate::models::project::{Difficulty, ProjectTemplate};

fn template(
    title: &str,
    description: &str,
    skills: &[&str],
    category: &str,
    difficulty: Difficulty,
    time_estimate: &str,
) -> ProjectTemplate {
    ProjectTemplate {
        title: title.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        category: category.to_string(),
        difficulty,
        time_estimate: time_estimate.to_string(),
    }
}

pub fn default_catalog() -> Vec<ProjectTemplate> {
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        template(
            "Personal Portfolio Website",
            "Design and build a responsive personal site showcasing your work, with a project gallery and contact form",
            &["HTML", "CSS", "React"],
            "Web Development",
            Beginner,
            "10-15 hours",
        ),
        template(
            "Weather Forecast App",
            "Fetch live weather data from a public API and render a five-day forecast dashboard with icons and charts",
            &["React", "JavaScript", "APIs"],
            "Web Development",
            Beginner,
            "10-15 hours",
        ),
        template(
            "To-Do List Manager",
            "A task manager with due dates, filtering, and drag-and-drop reordering, persisted to browser storage",
            &["JavaScript", "HTML", "CSS"],
            "Web Development",
            Beginner,
            "8-12 hours",
        ),
        template(
            "Command-Line Quiz Game",
            "A terminal quiz game that loads questions from a file, tracks scores, and shows per-category statistics",
            &["Python"],
            "Games",
            Beginner,
            "6-10 hours",
        ),
        template(
            "Recipe Finder",
            "Search recipes by ingredient using a public food API, with favorites and a weekly meal planner view",
            &["JavaScript", "APIs", "CSS"],
            "Web Development",
            Beginner,
            "10-14 hours",
        ),
        template(
            "Machine Learning Model Visualization",
            "Train a small classifier and build interactive visualizations of its decision boundaries and training curves",
            &["Python", "TensorFlow", "Matplotlib"],
            "Data Science",
            Intermediate,
            "20-30 hours",
        ),
        template(
            "Real-Time Chat Application",
            "A chat app with rooms, typing indicators, and message history over WebSockets",
            &["React", "Node.js", "WebSockets"],
            "Web Development",
            Intermediate,
            "25-35 hours",
        ),
        template(
            "Expense Tracker with Charts",
            "Track spending by category with monthly budgets and interactive charts backed by a relational database",
            &["React", "TypeScript", "SQL"],
            "Web Development",
            Intermediate,
            "20-30 hours",
        ),
        template(
            "REST API for a Book Library",
            "A versioned REST API with authentication, pagination, and search over a book collection",
            &["Python", "Flask", "SQL"],
            "Backend",
            Intermediate,
            "18-25 hours",
        ),
        template(
            "Web Scraper Dashboard",
            "Scrape product prices on a schedule and chart their history in a small dashboard with alerting",
            &["Python", "BeautifulSoup", "SQL"],
            "Data Science",
            Intermediate,
            "20-28 hours",
        ),
        template(
            "E-commerce Platform",
            "A full storefront with product catalog, cart, checkout, payment integration, and an admin panel",
            &["React", "Node.js", "PostgreSQL", "Stripe"],
            "Web Development",
            Advanced,
            "60-80 hours",
        ),
        template(
            "Distributed Task Queue",
            "A job queue with worker pools, retries, and a monitoring dashboard, deployable with containers",
            &["Python", "Redis", "Docker"],
            "Backend",
            Advanced,
            "40-60 hours",
        ),
        template(
            "Recommendation Engine",
            "A collaborative-filtering recommendation engine trained on an open dataset, served behind an API",
            &["Python", "TensorFlow", "SQL"],
            "Data Science",
            Advanced,
            "50-70 hours",
        ),
        template(
            "Collaborative Document Editor",
            "A multi-user document editor with live cursors and conflict-free merging of concurrent edits",
            &["React", "TypeScript", "WebSockets"],
            "Web Development",
            Advanced,
            "60-80 hours",
        ),
        template(
            "Container Deployment Pipeline",
            "A continuous deployment pipeline that builds, tests, and rolls out containerized services with health checks",
            &["Docker", "Kubernetes", "Go"],
            "DevOps",
            Advanced,
            "40-60 hours",
        ),
    ]
}
