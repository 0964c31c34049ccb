//! Page layout.
//!
//! [`DocumentPlan::layout`] turns a [`WorldAggregate`] into pages of
//! positioned elements. Coordinates are millimetres from the top-left corner
//! of an A4 page; text `y` is the baseline. Nothing here touches a PDF
//! library, so the plan can be inspected directly.

use crate::wrap::{MM_PER_PT, line_height, wrap, wrap_capped};
use derive_getters::Getters;
use serde::Serialize;
use worldsmith_core::{
    CHARACTER_SLOTS, CharacterRecord, ImageResult, SCENARIO_ARCHETYPES, ScenarioArchetype,
    WorldAggregate,
};

/// A4 width.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 height.
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Outer margin on every side.
pub const MARGIN_MM: f32 = 15.0;
/// Height reserved at the bottom of each page for the footer.
pub const FOOTER_HEIGHT_MM: f32 = 12.0;
/// Height of the branded band on the first page.
pub const HEADER_BAND_MM: f32 = 32.0;
/// Lines a character card description may use.
pub const CHARACTER_DESCRIPTION_LINES: usize = 2;
/// Attribution printed in every footer.
pub const ATTRIBUTION: &str = "Generated with Worldsmith";

const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const CONTENT_BOTTOM_MM: f32 = PAGE_HEIGHT_MM - MARGIN_MM - FOOTER_HEIGHT_MM;

const TITLE_PT: f32 = 22.0;
const HEADING_PT: f32 = 15.0;
const SUBHEADING_PT: f32 = 11.5;
const BODY_PT: f32 = 10.0;
const CARD_TITLE_PT: f32 = 10.5;
const CARD_BODY_PT: f32 = 8.5;
const FOOTER_PT: f32 = 8.0;

const GAP_MM: f32 = 4.0;
const CARD_PADDING_MM: f32 = 3.0;
const CHARACTER_CARD_HEIGHT_MM: f32 = 30.0;
const SCENARIO_CARD_HEIGHT_MM: f32 = 34.0;
const THUMBNAIL_MM: f32 = 24.0;
const CONCEPT_ART_MM: f32 = 110.0;
const SCENARIO_DESCRIPTION_LINES: usize = 4;

/// Fill and text colours used by the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shade {
    /// Body text
    Ink,
    /// Secondary text
    Muted,
    /// Header band and accents
    Brand,
    /// Card background
    Panel,
    /// Text on the brand colour
    Inverse,
}

/// Type weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weight {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
}

/// One thing painted on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    /// A single line of text.
    Text {
        /// Left edge
        x: f32,
        /// Baseline
        y: f32,
        /// Font size in points
        size_pt: f32,
        /// Weight
        weight: Weight,
        /// Colour
        shade: Shade,
        /// The line
        text: String,
    },
    /// A filled rectangle.
    Rect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
        /// Fill
        shade: Shade,
    },
    /// An image scaled to fit inside a box, keeping its aspect ratio.
    Image {
        /// Left edge of the box
        x: f32,
        /// Top edge of the box
        y: f32,
        /// Box width
        width: f32,
        /// Box height
        height: f32,
        /// Base64-encoded image bytes
        bytes: String,
    },
}

/// One page of elements, painted in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Getters)]
pub struct Page {
    elements: Vec<Element>,
}

/// Which card grid a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum CardKind {
    /// Character card
    Character,
    /// Scenario card
    Scenario,
}

/// Record of a card placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct PlacedCard {
    kind: CardKind,
    title: String,
    page: usize,
    has_image: bool,
}

/// The laid-out document.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct DocumentPlan {
    title: String,
    pages: Vec<Page>,
    cards: Vec<PlacedCard>,
}

impl DocumentPlan {
    /// Lay out `world`.
    ///
    /// Always places [`CHARACTER_SLOTS`] character cards and one card per
    /// scenario archetype, and stamps a `Page i of n` footer on every page.
    pub fn layout(world: &WorldAggregate) -> Self {
        let mut cursor = Cursor::new();
        cursor.header_band(world);

        cursor.heading("The World");
        cursor.paragraphs(world.narrative());

        if let Some(concept) = world.concept_image() {
            cursor.heading("Concept Art");
            cursor.artwork(concept);
        }

        cursor.heading("Characters");
        let characters = world.display_characters();
        for (row, pair) in characters.chunks(2).enumerate() {
            cursor.ensure(CHARACTER_CARD_HEIGHT_MM);
            for (column, character) in pair.iter().enumerate() {
                let index = row * 2 + column;
                cursor.character_card(column, character, world.character_image(index));
            }
            cursor.advance(CHARACTER_CARD_HEIGHT_MM + GAP_MM);
        }

        cursor.heading("Scenarios");
        for (index, scenario) in SCENARIO_ARCHETYPES.iter().enumerate() {
            cursor.ensure(SCENARIO_CARD_HEIGHT_MM);
            cursor.scenario_card(scenario, world.scenario_image(index));
            cursor.advance(SCENARIO_CARD_HEIGHT_MM + GAP_MM);
        }

        if !world.ideas().is_empty() {
            cursor.heading("Story Ideas");
            for idea in world.ideas() {
                cursor.entry(&idea.title, &idea.synopsis);
            }
        }

        if !world.customizations().is_empty() {
            cursor.heading("Customization");
            for option in world.customizations() {
                cursor.entry(&option.feature, &option.description);
            }
        }

        for region in world.regions() {
            cursor.heading(&region.title);
            for section in &region.sections {
                cursor.entry(&section.heading, &section.body);
            }
        }

        let mut plan = DocumentPlan {
            title: format!("{} World", world.category()),
            pages: cursor.pages,
            cards: cursor.cards,
        };
        plan.stamp_footers();
        debug_assert_eq!(
            plan.cards
                .iter()
                .filter(|c| c.kind == CardKind::Character)
                .count(),
            CHARACTER_SLOTS
        );
        plan
    }

    fn stamp_footers(&mut self) {
        let total = self.pages.len();
        let baseline = PAGE_HEIGHT_MM - MARGIN_MM;
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.elements.push(Element::Rect {
                x: MARGIN_MM,
                y: baseline - FOOTER_HEIGHT_MM + 3.0,
                width: CONTENT_WIDTH_MM,
                height: 0.3,
                shade: Shade::Muted,
            });
            page.elements.push(text(
                MARGIN_MM,
                baseline,
                FOOTER_PT,
                Weight::Regular,
                Shade::Muted,
                ATTRIBUTION,
            ));
            let label = format!("Page {} of {}", index + 1, total);
            let width = approx_width(&label, FOOTER_PT);
            page.elements.push(text(
                PAGE_WIDTH_MM - MARGIN_MM - width,
                baseline,
                FOOTER_PT,
                Weight::Regular,
                Shade::Muted,
                label,
            ));
        }
    }

    /// All text on every page, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.elements.iter())
            .filter_map(|element| match element {
                Element::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
    }
}

fn text(
    x: f32,
    y: f32,
    size_pt: f32,
    weight: Weight,
    shade: Shade,
    text: impl Into<String>,
) -> Element {
    Element::Text {
        x,
        y,
        size_pt,
        weight,
        shade,
        text: text.into(),
    }
}

fn approx_width(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * 0.5 * MM_PER_PT
}

/// Vertical cap height used to turn a top edge into a baseline.
fn ascent(size_pt: f32) -> f32 {
    size_pt * MM_PER_PT * 0.8
}

struct Cursor {
    pages: Vec<Page>,
    cards: Vec<PlacedCard>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            cards: Vec::new(),
            y: MARGIN_MM,
        }
    }

    fn page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn push(&mut self, element: Element) {
        self.page().elements.push(element);
    }

    fn advance(&mut self, height: f32) {
        self.y += height;
    }

    /// Start a new page unless `height` still fits on this one.
    fn ensure(&mut self, height: f32) {
        if self.y + height > CONTENT_BOTTOM_MM && self.y > MARGIN_MM {
            self.pages.push(Page::default());
            self.y = MARGIN_MM;
        }
    }

    fn header_band(&mut self, world: &WorldAggregate) {
        self.push(Element::Rect {
            x: 0.0,
            y: 0.0,
            width: PAGE_WIDTH_MM,
            height: HEADER_BAND_MM,
            shade: Shade::Brand,
        });
        self.push(text(
            MARGIN_MM,
            MARGIN_MM + ascent(TITLE_PT),
            TITLE_PT,
            Weight::Bold,
            Shade::Inverse,
            format!("{} World", world.category()),
        ));
        let subtitle = wrap_capped(world.idea(), CONTENT_WIDTH_MM, BODY_PT, 1);
        if let Some(line) = subtitle.into_iter().next() {
            self.push(text(
                MARGIN_MM,
                HEADER_BAND_MM - 5.0,
                BODY_PT,
                Weight::Regular,
                Shade::Inverse,
                line,
            ));
        }
        self.y = HEADER_BAND_MM + 8.0;
    }

    fn heading(&mut self, title: &str) {
        let height = line_height(HEADING_PT) + line_height(BODY_PT) * 2.0;
        self.ensure(height);
        self.y += GAP_MM;
        self.push(text(
            MARGIN_MM,
            self.y + ascent(HEADING_PT),
            HEADING_PT,
            Weight::Bold,
            Shade::Brand,
            title,
        ));
        self.y += line_height(HEADING_PT) + 1.5;
    }

    fn lines(&mut self, lines: Vec<String>, size_pt: f32, weight: Weight, shade: Shade) {
        let step = line_height(size_pt);
        for line in lines {
            self.ensure(step);
            if !line.is_empty() {
                self.push(text(
                    MARGIN_MM,
                    self.y + ascent(size_pt),
                    size_pt,
                    weight,
                    shade,
                    line,
                ));
            }
            self.y += step;
        }
    }

    fn paragraphs(&mut self, body: &str) {
        let lines = wrap(body, CONTENT_WIDTH_MM, BODY_PT);
        self.lines(lines, BODY_PT, Weight::Regular, Shade::Ink);
        self.y += GAP_MM / 2.0;
    }

    fn entry(&mut self, title: &str, body: &str) {
        self.ensure(line_height(SUBHEADING_PT) + line_height(BODY_PT));
        let title_lines = wrap(title, CONTENT_WIDTH_MM, SUBHEADING_PT);
        self.lines(title_lines, SUBHEADING_PT, Weight::Bold, Shade::Ink);
        if !body.is_empty() {
            self.paragraphs(body);
        } else {
            self.y += GAP_MM / 2.0;
        }
    }

    fn artwork(&mut self, concept: &ImageResult) {
        match concept {
            ImageResult::Image { bytes } => {
                self.ensure(CONCEPT_ART_MM);
                self.push(Element::Image {
                    x: (PAGE_WIDTH_MM - CONCEPT_ART_MM) / 2.0,
                    y: self.y,
                    width: CONCEPT_ART_MM,
                    height: CONCEPT_ART_MM,
                    bytes: bytes.clone(),
                });
                self.y += CONCEPT_ART_MM + GAP_MM;
            }
            ImageResult::Description {
                text: brief,
                truncated_prompt_echo,
            } => {
                self.paragraphs(brief);
                let echo = format!("Requested image: {truncated_prompt_echo}");
                let lines = wrap(&echo, CONTENT_WIDTH_MM, CARD_BODY_PT);
                self.lines(lines, CARD_BODY_PT, Weight::Regular, Shade::Muted);
                self.y += GAP_MM;
            }
        }
    }

    fn card_frame(&mut self, x: f32, width: f32, height: f32, image: Option<&ImageResult>) -> f32 {
        self.push(Element::Rect {
            x,
            y: self.y,
            width,
            height,
            shade: Shade::Panel,
        });
        match image {
            Some(ImageResult::Image { bytes }) => {
                self.push(Element::Image {
                    x: x + CARD_PADDING_MM,
                    y: self.y + CARD_PADDING_MM,
                    width: THUMBNAIL_MM,
                    height: THUMBNAIL_MM,
                    bytes: bytes.clone(),
                });
                x + CARD_PADDING_MM * 2.0 + THUMBNAIL_MM
            }
            _ => x + CARD_PADDING_MM,
        }
    }

    fn character_card(
        &mut self,
        column: usize,
        character: &CharacterRecord,
        image: Option<&ImageResult>,
    ) {
        let width = (CONTENT_WIDTH_MM - GAP_MM) / 2.0;
        let x = MARGIN_MM + column as f32 * (width + GAP_MM);
        let text_x = self.card_frame(x, width, CHARACTER_CARD_HEIGHT_MM, image);
        let text_width = x + width - CARD_PADDING_MM - text_x;

        let mut baseline = self.y + CARD_PADDING_MM + ascent(CARD_TITLE_PT);
        let name = wrap_capped(&character.name, text_width, CARD_TITLE_PT, 1);
        for line in name {
            self.push(text(text_x, baseline, CARD_TITLE_PT, Weight::Bold, Shade::Ink, line));
        }
        baseline += line_height(CARD_TITLE_PT);
        for line in wrap_capped(&character.role, text_width, CARD_BODY_PT, 1) {
            self.push(text(text_x, baseline, CARD_BODY_PT, Weight::Regular, Shade::Brand, line));
        }
        baseline += line_height(CARD_BODY_PT) + 1.0;
        let description = wrap_capped(
            &character.description,
            text_width,
            CARD_BODY_PT,
            CHARACTER_DESCRIPTION_LINES,
        );
        for line in description {
            self.push(text(text_x, baseline, CARD_BODY_PT, Weight::Regular, Shade::Ink, line));
            baseline += line_height(CARD_BODY_PT);
        }

        let page = self.pages.len();
        self.cards.push(PlacedCard {
            kind: CardKind::Character,
            title: character.name.clone(),
            page,
            has_image: image.is_some_and(ImageResult::is_image),
        });
    }

    fn scenario_card(&mut self, scenario: &ScenarioArchetype, image: Option<&ImageResult>) {
        let x = MARGIN_MM;
        let text_x = self.card_frame(x, CONTENT_WIDTH_MM, SCENARIO_CARD_HEIGHT_MM, image);
        let text_width = x + CONTENT_WIDTH_MM - CARD_PADDING_MM - text_x;

        let mut baseline = self.y + CARD_PADDING_MM + ascent(CARD_TITLE_PT);
        self.push(text(
            text_x,
            baseline,
            CARD_TITLE_PT,
            Weight::Bold,
            Shade::Ink,
            scenario.title,
        ));
        baseline += line_height(CARD_TITLE_PT);
        self.push(text(
            text_x,
            baseline,
            CARD_BODY_PT,
            Weight::Bold,
            Shade::Brand,
            scenario.tag.to_uppercase(),
        ));
        baseline += line_height(CARD_BODY_PT) + 1.0;
        let description = wrap_capped(
            scenario.description,
            text_width,
            CARD_BODY_PT,
            SCENARIO_DESCRIPTION_LINES,
        );
        for line in description {
            self.push(text(text_x, baseline, CARD_BODY_PT, Weight::Regular, Shade::Ink, line));
            baseline += line_height(CARD_BODY_PT);
        }

        let page = self.pages.len();
        self.cards.push(PlacedCard {
            kind: CardKind::Scenario,
            title: scenario.title.to_string(),
            page,
            has_image: image.is_some_and(ImageResult::is_image),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldsmith_core::{IdeaRecord, RegionBlock, WorldAggregateBuilder};

    fn world(characters: usize, narrative_paragraphs: usize) -> WorldAggregate {
        let narrative = vec!["A long paragraph about drifting cities and the people who keep them aloft. ".repeat(6); narrative_paragraphs]
            .join("\n\n");
        WorldAggregateBuilder::default()
            .idea("floating cities above toxic clouds")
            .category("Post-Apocalyptic")
            .narrative(narrative)
            .ideas(vec![IdeaRecord {
                title: "Ash Tide".to_string(),
                synopsis: "The sea burns.".to_string(),
            }])
            .characters(
                (0..characters)
                    .map(|i| CharacterRecord {
                        name: format!("Figure {i}"),
                        role: "Scavenger".to_string(),
                        description: "Knows the winds. ".repeat(30),
                    })
                    .collect::<Vec<_>>(),
            )
            .regions(vec![RegionBlock::parse(
                "Continental Overview",
                "Ashen Reach\nGlass plains.",
            )])
            .build()
            .unwrap()
    }

    fn elements(plan: &DocumentPlan) -> impl Iterator<Item = &Element> {
        plan.pages().iter().flat_map(|p| p.elements().iter())
    }

    #[test]
    fn always_six_character_and_three_scenario_cards() {
        for count in [0, 2, 6] {
            let plan = DocumentPlan::layout(&world(count, 1));
            let kinds: Vec<CardKind> = plan.cards().iter().map(|c| *c.kind()).collect();
            assert_eq!(kinds.iter().filter(|k| **k == CardKind::Character).count(), 6);
            assert_eq!(kinds.iter().filter(|k| **k == CardKind::Scenario).count(), 3);
        }
    }

    #[test]
    fn placeholders_fill_missing_characters() {
        let plan = DocumentPlan::layout(&world(2, 1));
        let titles: Vec<&str> = plan.cards().iter().map(|c| c.title().as_str()).collect();
        assert_eq!(titles[0], "Figure 0");
        assert_eq!(titles[2], "Unnamed Figure 3");
    }

    #[test]
    fn every_page_has_a_numbered_footer() {
        let plan = DocumentPlan::layout(&world(6, 12));
        let total = plan.pages().len();
        assert!(total > 1);
        for (i, page) in plan.pages().iter().enumerate() {
            let label = format!("Page {} of {}", i + 1, total);
            let texts: Vec<&str> = page
                .elements()
                .iter()
                .filter_map(|e| match e {
                    Element::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            assert!(texts.contains(&label.as_str()));
            assert!(texts.contains(&ATTRIBUTION));
        }
    }

    #[test]
    fn nothing_overflows_the_content_area() {
        let plan = DocumentPlan::layout(&world(6, 12));
        for element in elements(&plan) {
            if let Element::Text { y, text, .. } = element {
                if text != ATTRIBUTION && !text.starts_with("Page ") {
                    assert!(*y <= CONTENT_BOTTOM_MM, "{text} at {y}");
                }
            }
        }
    }

    #[test]
    fn header_band_only_on_the_first_page() {
        let plan = DocumentPlan::layout(&world(6, 12));
        let is_band = |e: &Element| matches!(e, Element::Rect { shade: Shade::Brand, y, .. } if *y == 0.0);
        assert!(plan.pages()[0].elements().iter().any(is_band));
        assert!(plan.pages()[1..]
            .iter()
            .all(|p| !p.elements().iter().any(is_band)));
    }

    #[test]
    fn character_descriptions_use_at_most_two_lines() {
        let plan = DocumentPlan::layout(&world(1, 1));
        let description_lines = plan
            .texts()
            .filter(|t| t.starts_with("Knows the winds"))
            .count();
        assert_eq!(description_lines, CHARACTER_DESCRIPTION_LINES);
    }
}
