//! Heuristic split of a product description into narrative text and bullet lists.
//!
//! Operators embed sub-sections in a single text field:
//! `Intro#Advantages* one* two#Disadvantages* three#Working: how it runs`.
//! There is no escaping, so narrative text that happens to start with
//! "Advantage..." is classified as a list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Separates sections inside a description.
pub const SECTION_DELIMITER: char = '#';
/// Separates points inside an advantages/disadvantages section.
pub const BULLET_DELIMITER: char = '*';
/// Heading given to sections that start with "working".
pub const WORKING_PRINCIPLE: &str = "Working Principle";

static ADVANTAGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^advantages?[:\s-]*").expect("valid regex"));
static DISADVANTAGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^disadvantages?[:\s-]*").expect("valid regex"));
static WORKING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^working[:\s-]*").expect("valid regex"));

/// One block of the detail view's overview text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionSection {
    pub heading: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedDescription {
    /// Narrative segments rejoined with the section delimiter.
    pub description: String,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
    /// Narrative and working-principle sections in their original order.
    pub sections: Vec<DescriptionSection>,
}

enum SegmentKind<'a> {
    Advantages(&'a str),
    Disadvantages(&'a str),
    Working(&'a str),
    Narrative,
}

fn classify(segment: &str) -> SegmentKind<'_> {
    if let Some(found) = ADVANTAGES.find(segment) {
        SegmentKind::Advantages(&segment[found.end()..])
    } else if let Some(found) = DISADVANTAGES.find(segment) {
        SegmentKind::Disadvantages(&segment[found.end()..])
    } else if let Some(found) = WORKING.find(segment) {
        SegmentKind::Working(&segment[found.end()..])
    } else {
        SegmentKind::Narrative
    }
}

/// Bullet points of a list section. A remainder without bullets is a single point.
fn points(rest: &str) -> impl Iterator<Item = String> + '_ {
    rest.split(BULLET_DELIMITER)
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .map(str::to_string)
}

/// Splits `text` on `delimiter` and sorts every segment into the matching bucket.
pub fn segment_description(text: &str, delimiter: char) -> SegmentedDescription {
    let mut segmented = SegmentedDescription::default();
    let mut narrative: Vec<&str> = Vec::new();

    for segment in text.split(delimiter).map(str::trim) {
        if segment.is_empty() {
            continue;
        }
        match classify(segment) {
            SegmentKind::Advantages(rest) => segmented.advantages.extend(points(rest)),
            SegmentKind::Disadvantages(rest) => segmented.disadvantages.extend(points(rest)),
            SegmentKind::Working(rest) => {
                let body = rest.trim();
                if !body.is_empty() {
                    segmented.sections.push(DescriptionSection {
                        heading: Some(WORKING_PRINCIPLE.to_string()),
                        body: body.to_string(),
                    });
                }
            }
            SegmentKind::Narrative => {
                narrative.push(segment);
                segmented.sections.push(DescriptionSection {
                    heading: None,
                    body: segment.to_string(),
                });
            }
        }
    }

    segmented.description = narrative.join(&delimiter.to_string());
    segmented
}

/// Display sections of a description, dropping narrative segments that merely repeat
/// the product name.
pub fn description_sections(text: &str, delimiter: char, product_name: &str) -> Vec<DescriptionSection> {
    let name = product_name.trim().to_lowercase();
    segment_description(text, delimiter)
        .sections
        .into_iter()
        .filter(|section| section.heading.is_some() || section.body.to_lowercase() != name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_lists_and_working_section() {
        let segmented = segment_description(
            "Intro text#Advantages* point one* point two#Working: runs continuously",
            SECTION_DELIMITER,
        );

        assert_eq!(segmented.description, "Intro text");
        assert_eq!(segmented.advantages, vec!["point one", "point two"]);
        assert!(segmented.disadvantages.is_empty());
        assert_eq!(
            segmented.sections,
            vec![
                DescriptionSection { heading: None, body: "Intro text".into() },
                DescriptionSection {
                    heading: Some(WORKING_PRINCIPLE.into()),
                    body: "runs continuously".into(),
                },
            ]
        );
    }

    #[test]
    fn keyword_match_is_case_insensitive_and_singular_form_counts() {
        let segmented = segment_description(
            "DISADVANTAGE: needs calibration#advantage robust frame",
            SECTION_DELIMITER,
        );
        assert_eq!(segmented.disadvantages, vec!["needs calibration"]);
        assert_eq!(segmented.advantages, vec!["robust frame"]);
        assert_eq!(segmented.description, "");
    }

    #[test]
    fn narrative_segments_keep_their_order() {
        let segmented = segment_description(
            " First paragraph. # #Second paragraph.#Advantages*fast",
            SECTION_DELIMITER,
        );
        assert_eq!(segmented.description, "First paragraph.#Second paragraph.");
        assert_eq!(segmented.sections.len(), 2);
        assert_eq!(segmented.advantages, vec!["fast"]);
    }

    #[test]
    fn resegmenting_the_description_finds_nothing_new() {
        let inputs = [
            "Intro#Advantages* a* b#Disadvantages* c#Working - steady#Outro",
            "Plain text only",
            "#Advantages#",
            "Advantageous layout*with stars#Closing",
        ];
        for input in inputs {
            let first = segment_description(input, SECTION_DELIMITER);
            let second = segment_description(&first.description, SECTION_DELIMITER);
            assert!(second.advantages.is_empty(), "{input}");
            assert!(second.disadvantages.is_empty(), "{input}");
            assert_eq!(second.description, first.description, "{input}");
        }
    }

    #[test]
    fn text_starting_with_the_keyword_is_misclassified() {
        // Known limitation of the heuristic.
        let segmented = segment_description("Advantageous design", SECTION_DELIMITER);
        assert_eq!(segmented.advantages, vec!["ous design"]);
        assert_eq!(segmented.description, "");
    }

    #[test]
    fn uses_the_given_delimiter() {
        let segmented = segment_description("Intro|Advantages* x", '|');
        assert_eq!(segmented.description, "Intro");
        assert_eq!(segmented.advantages, vec!["x"]);
    }

    #[test]
    fn sections_skip_segments_repeating_the_name() {
        let sections = description_sections(
            "Juice Heater#Tubular heater for raw juice#working: steam on the shell side",
            SECTION_DELIMITER,
            "juice heater",
        );
        assert_eq!(
            sections,
            vec![
                DescriptionSection { heading: None, body: "Tubular heater for raw juice".into() },
                DescriptionSection {
                    heading: Some(WORKING_PRINCIPLE.into()),
                    body: "steam on the shell side".into(),
                },
            ]
        );
    }
}
