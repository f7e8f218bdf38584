//! Splitting raw generator output into candidate course blocks.

/// Splits text into blocks separated by one or more blank lines.
///
/// Lines are trimmed; whitespace-only lines count as blank. Empty input
/// yields no blocks.
pub fn split_into_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current_block: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            // Blank line closes the current block
            if !current_block.is_empty() {
                blocks.push(current_block);
                current_block = Vec::new();
            }
        } else {
            current_block.push(trimmed);
        }
    }

    if !current_block.is_empty() {
        blocks.push(current_block);
    }

    blocks
}
