//! Encyclopedia Generator
//!
//! Renders a world detail page as a markdown article: title, landscape image,
//! overview, then one section per tab in fixed order.
//!
//! Public API (consumed by generate_sample_worlds.rs):
//! - EncyclopediaGenerator::new() -> Self
//! - EncyclopediaGenerator::generate(page) -> String
//! - article_file_name(world_id) -> String

use crate::encyclopedia::view_models::{DetailViewModel, TabContent, WorldOverview, WorldPageData};

/// Encyclopedia generator - stateless markdown generator.
pub struct EncyclopediaGenerator;

impl EncyclopediaGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a complete markdown article for one world page.
    pub fn generate(&self, page: &WorldPageData) -> String {
        let mut sections = vec![generate_overview(&page.overview)];

        for block in page.tabs.iter() {
            let mut section = format!("## {}\n\n", block.key);
            section.push_str(&generate_tab_content(&block.content));
            sections.push(section.trim_end().to_string());
        }

        let mut result = sections.join("\n\n---\n\n");
        result.push('\n');
        result
    }
}

impl Default for EncyclopediaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// File name for a world's article. Characters outside `[A-Za-z0-9_-]` become
/// `_`, so ids such as `../x` cannot leave the output directory.
pub fn article_file_name(world_id: &str) -> String {
    let safe: String = world_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("world_{}.md", safe)
}

fn generate_overview(overview: &WorldOverview) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {}", overview.name));
    lines.push(String::new());
    lines.push(format!("![{}]({})", overview.landscape_alt, overview.landscape));
    lines.push(String::new());

    for row in &overview.geo {
        lines.push(format!("- **{}** {}", row.label, row.value));
    }
    lines.push(String::new());

    for panel in [&overview.magic, &overview.technology] {
        lines.push(format!("**{}** ({})", panel.title, panel.level_display()));
        if let Some(details) = panel.details.as_deref().filter(|d| !d.is_empty()) {
            lines.push(String::new());
            lines.push(details.to_string());
        }
        lines.push(String::new());
    }

    lines.push(overview.description.clone());
    lines.join("\n")
}

fn generate_tab_content(content: &TabContent) -> String {
    match content {
        TabContent::Details(cards) => cards
            .iter()
            .map(generate_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
        TabContent::Paragraphs(paragraphs) => paragraphs.join("\n\n"),
        TabContent::Unknown(message) => format!("*{}*", message),
    }
}

fn generate_card(card: &DetailViewModel) -> String {
    let mut lines = vec![
        format!("### {}", card.name),
        String::new(),
        format!("![{}]({})", card.image_alt, card.image),
        String::new(),
    ];
    for detail in &card.additional_details {
        lines.push(format!("- {}", detail));
    }
    if !card.lore.is_empty() {
        lines.push(String::new());
        lines.push(card.lore.clone());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encyclopedia::types::World;
    use crate::encyclopedia::view_builder::build_world_page;
    use serde_json::json;

    fn make_test_page() -> WorldPageData {
        let world: World = serde_json::from_value(json!({
            "id": 1,
            "name": "Orun",
            "img": { "landscape": "orun.png" },
            "description": "Dust and rings.",
            "geoDynamics": { "shape": "Ring", "size": "Huge", "climate": "Arid" },
            "magicTechnology": { "magicLvl": 1, "techLvl": 5, "magic": [], "technology": ["lasers", "AI"] },
            "events": [{ "id": 7, "name": "First Light", "time": "Dawn", "age": "Glass" }],
            "lore": ["It was quiet."]
        }))
        .unwrap();
        build_world_page(&world)
    }

    #[test]
    fn test_article_has_title_and_all_tabs_in_order() {
        let article = EncyclopediaGenerator::new().generate(&make_test_page());
        assert!(article.starts_with("# Orun"));

        let positions: Vec<usize> = ["## Inhabitants", "## Locations", "## Characters", "## Events", "## History"]
            .iter()
            .map(|h| article.find(h).expect("missing tab heading"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_article_file_name_stays_in_directory() {
        assert_eq!(article_file_name("42"), "world_42.md");
        assert_eq!(article_file_name("../etc/passwd"), "world____etc_passwd.md");
        assert_eq!(article_file_name("a/b"), "world_a_b.md");
    }

    #[test]
    fn test_article_contains_fallbacks_and_details() {
        let article = EncyclopediaGenerator::new().generate(&make_test_page());
        assert!(article.contains("*This world's inhabitants is unknown.*"));
        assert!(article.contains("- Dawn in the age of Glass"));
        assert!(article.contains("It was quiet."));
        assert!(article.contains("Lasers and ai"));
    }
}
