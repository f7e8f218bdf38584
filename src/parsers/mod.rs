pub mod blocks;
pub mod fields;

#[cfg(test)]
mod tests;

/// Labeled values extracted from one block, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    pub title: Option<String>,
    pub url: Option<String>,
    pub provider: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub description: Option<String>,
}

impl FieldSet {
    /// A block describes a course only if it has both a title and a URL
    pub fn is_course(&self) -> bool {
        self.title.is_some() && self.url.is_some()
    }
}

/// Parser for the labeled-block course format
pub struct Parser;

impl Parser {
    /// Parse raw text into field-sets, one per course block, in input order.
    ///
    /// Blocks without both `Title` and `URL` are commentary and are
    /// dropped. Empty input yields an empty list.
    pub fn parse(text: &str) -> Vec<FieldSet> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let blocks = blocks::split_into_blocks(text);
        ::log::debug!("Split generator output into {} blocks", blocks.len());

        blocks
            .iter()
            .enumerate()
            .filter_map(|(index, block)| {
                let fields = Self::parse_block(block);
                if fields.is_none() {
                    ::log::debug!("Discarding block {} (no Title/URL): {:?}", index, block.first());
                }
                fields
            })
            .collect()
    }

    /// Parse the lines of a single block, if it describes a course
    pub fn parse_block(lines: &[&str]) -> Option<FieldSet> {
        let fields = fields::extract_fields(lines);
        fields.is_course().then_some(fields)
    }
}
