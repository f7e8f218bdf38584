//! Labeled field extraction from a single block.

use crate::parsers::FieldSet;

/// Labels recognized at the start of a line (case-sensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Title,
    Url,
    Provider,
    Duration,
    Level,
    Rating,
    Price,
    Description,
}

impl Label {
    pub const ALL: [Label; 8] = [
        Label::Title,
        Label::Url,
        Label::Provider,
        Label::Duration,
        Label::Level,
        Label::Rating,
        Label::Price,
        Label::Description,
    ];

    /// The label text as it appears before the colon
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Title => "Title",
            Label::Url => "URL",
            Label::Provider => "Provider",
            Label::Duration => "Duration",
            Label::Level => "Level",
            Label::Rating => "Rating",
            Label::Price => "Price",
            Label::Description => "Description",
        }
    }
}

/// Values generators write when they have nothing for an optional field
const PLACEHOLDERS: &[&str] = &["not specified", "not available", "n/a", "none", "unknown"];

/// Splits `Label: value` into the label and the trimmed value
pub fn parse_label_line(line: &str) -> Option<(Label, &str)> {
    let line = line.trim_start();
    Label::ALL.into_iter().find_map(|label| {
        line.strip_prefix(label.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .map(|value| (label, value.trim()))
    })
}

/// Extracts every recognized field from the lines of one block.
///
/// The first occurrence of a label wins. `Description` takes the rest of
/// the block as its text, but labels on the following lines are still
/// read as fields.
pub fn extract_fields(lines: &[&str]) -> FieldSet {
    let mut fields = FieldSet::default();
    let mut rating_seen = false;

    for (index, line) in lines.iter().enumerate() {
        let Some((label, value)) = parse_label_line(line) else {
            continue;
        };

        match label {
            Label::Title => set_once(&mut fields.title, value),
            Label::Url => set_once(&mut fields.url, value),
            Label::Provider => set_once(&mut fields.provider, optional_value(value)),
            Label::Duration => set_once(&mut fields.duration, optional_value(value)),
            Label::Level => set_once(&mut fields.level, optional_value(value)),
            Label::Price => set_once(&mut fields.price, optional_value(value)),
            Label::Rating => {
                if !rating_seen {
                    rating_seen = true;
                    fields.rating = parse_rating(value);
                }
            }
            Label::Description => {
                if fields.description.is_none() {
                    let mut text = vec![value];
                    text.extend_from_slice(&lines[index + 1..]);
                    fields.description = Some(text.join("\n").trim().to_string());
                }
            }
        }
    }

    fields
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

/// Maps placeholder text to an empty value
fn optional_value(value: &str) -> &str {
    if PLACEHOLDERS.iter().any(|p| value.eq_ignore_ascii_case(p)) {
        ""
    } else {
        value
    }
}

/// Parses a rating; anything that is not a finite number is absent
pub fn parse_rating(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(rating) if rating.is_finite() => Some(rating),
        Ok(_) | Err(_) => {
            if !value.trim().is_empty() {
                ::log::debug!("Ignoring non-numeric rating: {:?}", value);
            }
            None
        }
    }
}
