//! Plain-text rendering, used when the PDF cannot be produced.

use worldsmith_core::{ImageResult, SCENARIO_ARCHETYPES, WorldAggregate};

/// Render `world` as plain text. No pagination, no images.
///
/// Character and scenario sections always list six and three entries.
pub fn render_text(world: &WorldAggregate) -> String {
    let mut out = String::new();
    let title = format!("{} World", world.category());
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
    out.push_str(world.idea());
    out.push_str("\n\n");

    section(&mut out, "The World");
    out.push_str(world.narrative());
    out.push_str("\n\n");

    if let Some(concept) = world.concept_image() {
        section(&mut out, "Concept Art");
        describe_image(&mut out, concept);
    }

    section(&mut out, "Characters");
    for (index, character) in world.display_characters().iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({})\n   {}\n",
            index + 1,
            character.name,
            character.role,
            character.description
        ));
        if let Some(image) = world.character_image(index) {
            out.push_str("   ");
            describe_image(&mut out, image);
        }
    }
    out.push('\n');

    section(&mut out, "Scenarios");
    for (index, scenario) in SCENARIO_ARCHETYPES.iter().enumerate() {
        out.push_str(&format!(
            "{} [{}]\n   {}\n",
            scenario.title, scenario.tag, scenario.description
        ));
        if let Some(image) = world.scenario_image(index) {
            out.push_str("   ");
            describe_image(&mut out, image);
        }
    }
    out.push('\n');

    if !world.ideas().is_empty() {
        section(&mut out, "Story Ideas");
        for idea in world.ideas() {
            out.push_str(&format!("- {}: {}\n", idea.title, idea.synopsis));
        }
        out.push('\n');
    }

    if !world.customizations().is_empty() {
        section(&mut out, "Customization");
        for option in world.customizations() {
            out.push_str(&format!("- {}: {}\n", option.feature, option.description));
        }
        out.push('\n');
    }

    for region in world.regions() {
        section(&mut out, &region.title);
        for part in &region.sections {
            out.push_str(&part.heading);
            out.push('\n');
            if !part.body.is_empty() {
                out.push_str(&part.body);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out.push_str(crate::layout::ATTRIBUTION);
    out.push('\n');
    out
}

fn section(out: &mut String, heading: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
}

fn describe_image(out: &mut String, image: &ImageResult) {
    match image {
        ImageResult::Image { .. } => out.push_str("[image available in the PDF export]\n"),
        ImageResult::Description { text, .. } => {
            out.push_str("Art direction: ");
            out.push_str(text);
            out.push('\n');
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldsmith_core::WorldAggregateBuilder;

    #[test]
    fn lists_every_slot_even_when_empty() {
        let world = WorldAggregateBuilder::default()
            .idea("a city in a whale")
            .category("Mythological")
            .narrative("It swims.")
            .build()
            .unwrap();
        let text = render_text(&world);
        assert!(text.starts_with("Mythological World\n"));
        assert!(text.contains("6. Unnamed Figure 6"));
        for scenario in SCENARIO_ARCHETYPES {
            assert!(text.contains(scenario.title));
        }
        assert!(!text.contains("Story Ideas"));
    }
}
