//! Records decoded from generated content.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("valid blank-line pattern"));

/// A story hook for the world.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdeaRecord {
    /// Short title
    #[serde(default)]
    pub title: String,
    /// One-paragraph synopsis
    #[serde(default)]
    pub synopsis: String,
}

/// A suggestion for tailoring the world to a table or campaign.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomizationRecord {
    /// The aspect being customized
    #[serde(default)]
    pub feature: String,
    /// How to customize it
    #[serde(default)]
    pub description: String,
}

/// A notable inhabitant of the world.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Character name
    #[serde(default)]
    pub name: String,
    /// Role in the world
    #[serde(default)]
    pub role: String,
    /// Short description
    #[serde(default)]
    pub description: String,
}

impl CharacterRecord {
    /// Stand-in shown when fewer characters were generated than there are
    /// display slots. `index` is zero-based.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldsmith_core::CharacterRecord;
    ///
    /// assert_eq!(CharacterRecord::placeholder(2).name, "Unnamed Figure 3");
    /// ```
    pub fn placeholder(index: usize) -> Self {
        Self {
            name: format!("Unnamed Figure {}", index + 1),
            role: "Role yet to be revealed".to_string(),
            description: "This figure's story has not been written yet. \
                          Generate again or invent them at the table."
                .to_string(),
        }
    }
}

/// One titled section of a region description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSection {
    /// First line of the section
    pub heading: String,
    /// Remaining lines, may be empty
    pub body: String,
}

/// A region description block ("map") split into sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBlock {
    /// Block title, e.g. "Continental Overview"
    pub title: String,
    /// Sections in response order
    pub sections: Vec<RegionSection>,
}

impl RegionBlock {
    /// Split sanitized text into sections at blank lines; the first line of
    /// each section is its heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldsmith_core::RegionBlock;
    ///
    /// let block = RegionBlock::parse("Overview", "North Reach\nIce fields.\n\nSouth Marches\nBogs.");
    /// assert_eq!(block.sections.len(), 2);
    /// assert_eq!(block.sections[1].heading, "South Marches");
    /// assert_eq!(block.sections[1].body, "Bogs.");
    /// ```
    pub fn parse(title: impl Into<String>, text: &str) -> Self {
        let sections = BLANK_LINE
            .split(text)
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| {
                let (heading, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
                RegionSection {
                    heading: heading.trim().to_string(),
                    body: body.trim().to_string(),
                }
            })
            .collect();
        Self {
            title: title.into(),
            sections,
        }
    }
}
