use crate::constants::COLLECTION_TEXT_LIMIT;
use serde_json::Value;
use std::str::FromStr;
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Air,
    Earth,
    Fire,
    Water,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Air => "Air",
            Element::Earth => "Earth",
            Element::Fire => "Fire",
            Element::Water => "Water",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Element::Air => ":cloud_tornado:",
            Element::Earth => ":rock:",
            Element::Fire => ":fire:",
            Element::Water => ":droplet:",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Element::Air => (0xb4, 0xe1, 0xe6),
            Element::Earth => (0x7a, 0x5c, 0x3d),
            Element::Fire => (0xe0, 0x4a, 0x2f),
            Element::Water => (0x2f, 0x6f, 0xe0),
        }
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "air" => Ok(Element::Air),
            "earth" => Ok(Element::Earth),
            "fire" => Ok(Element::Fire),
            "water" => Ok(Element::Water),
            other => Err(format!("Unknown element: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub text: String,
    pub pulled: u32,
}

impl CollectionSummary {
    pub fn render(&self) -> String {
        format!("__Card Collection__ ({} pulled)\n{}", self.pulled, self.text)
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

///
/// Format the item rows Eden returns for `/db/item`.
///
/// Each row is `[name, rank, element, level]`. Rows of any other shape or
/// with an unknown element are skipped. Lines stop being added once the text
/// reaches the listing limit, and `pulled` sums the levels of listed rows.
///
pub fn format_collection(rows: &[Vec<Value>]) -> CollectionSummary {
    let mut text = String::new();
    let mut pulled = 0;
    for row in rows {
        if row.len() != 4 || text.graphemes(true).count() >= COLLECTION_TEXT_LIMIT {
            continue;
        }
        let element = match cell(&row[2]).parse::<Element>() {
            Ok(element) => element,
            Err(why) => {
                trace!("Skipping collection row: {}", why);
                continue;
            }
        };
        let name = cell(&row[0]);
        let rank = cell(&row[1]);
        let level = cell(&row[3]);
        text.push_str(&format!(
            "({}:star:)  {}  LVL {} -  *{}*\n",
            rank,
            element.emoji(),
            level,
            name
        ));
        pulled += level.trim().parse::<u32>().unwrap_or(0);
    }
    CollectionSummary { text, pulled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(name: &str, rank: Value, element: &str, level: Value) -> Vec<Value> {
        vec![json!(name), rank, json!(element), level]
    }

    #[test]
    fn formats_rows_and_sums_levels() {
        let rows = vec![
            row("Ember", json!("2"), "fire", json!("4")),
            row("Tide", json!(3), "water", json!(1)),
        ];
        let summary = format_collection(&rows);
        assert_eq!(
            summary.text,
            "(2:star:)  :fire:  LVL 4 -  *Ember*\n(3:star:)  :droplet:  LVL 1 -  *Tide*\n"
        );
        assert_eq!(summary.pulled, 5);
        assert!(summary
            .render()
            .starts_with("__Card Collection__ (5 pulled)\n(2:star:)"));
    }

    #[test]
    fn skips_unknown_elements_and_bad_rows() {
        let rows = vec![
            row("Void", json!("1"), "aether", json!("9")),
            vec![json!("Short"), json!("1")],
            row("Gale", json!("1"), "air", json!("2")),
        ];
        let summary = format_collection(&rows);
        assert_eq!(summary.text, "(1:star:)  :cloud_tornado:  LVL 2 -  *Gale*\n");
        assert_eq!(summary.pulled, 2);
    }

    #[test]
    fn listing_stops_at_limit() {
        let rows: Vec<Vec<Value>> = (0..500)
            .map(|i| row(&format!("Stone {}", i), json!("1"), "earth", json!("1")))
            .collect();
        let summary = format_collection(&rows);
        let lines = summary.text.lines().count() as u32;
        assert!(lines < 500);
        assert_eq!(summary.pulled, lines);
        let last_line = summary.text.trim_end().lines().last().unwrap().graphemes(true).count();
        assert!(summary.text.graphemes(true).count() < COLLECTION_TEXT_LIMIT + last_line + 1);
    }

    #[test]
    fn element_parsing() {
        assert_eq!("water".parse::<Element>(), Ok(Element::Water));
        assert!("Water".parse::<Element>().is_err());
    }
}
