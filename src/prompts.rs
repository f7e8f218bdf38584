//! Queries sent to the text generator.

use crate::duration::DurationBucket;
use crate::filter::{FilterCriteria, Pricing};
use crate::results::CourseRecord;

/// Format block shown to the generator so its reply parses cleanly
const FORMAT_TEMPLATE: &str = "\
Title: [Course Title]
URL: [Course URL]
Provider: [Provider Name - MUST match the URL domain]
Duration: [Duration or \"Not specified\"]
Level: [Beginner/Intermediate/Advanced]
Rating: [Rating number or \"Not available\"]
Price: [Price information]
Description: [1-2 sentence description]";

/// Builds the search query for a topic, including any filter requirements
pub fn search_query(topic: &str, criteria: &FilterCriteria, count: usize) -> String {
    let mut query = format!("Find {} high-quality online courses about: {}", count, topic);

    let constraints = constraint_lines(criteria);
    if !constraints.is_empty() {
        query.push_str(
            "\n\nIMPORTANT FILTER REQUIREMENTS (you MUST only return courses that match ALL of these):",
        );
        for line in &constraints {
            query.push_str("\n- ");
            query.push_str(line);
        }
    }

    query.push_str(
        "

For each course, you MUST provide ALL of the following information:
1. Title - The full course title
2. URL - Direct link to the course page
3. Provider - The platform or institution name (e.g., Coursera, edX, Udemy, Khan Academy, MIT OpenCourseWare)
   CRITICAL: The Provider MUST match the domain of the URL. For example:
   - If URL is coursera.org/... then Provider must be \"Coursera\"
   - If URL is edx.org/... then Provider must be \"edX\"
   - If URL is udemy.com/... then Provider must be \"Udemy\"
4. Duration - Estimated time to complete (e.g., \"8 weeks\", \"40 hours\", \"6 months\")
5. Level - Difficulty level: Beginner, Intermediate, or Advanced
6. Rating - Average rating as a number (e.g., 4.5, 4.8) if available
7. Price - Cost information (e.g., \"Free\", \"$49.99\", \"Subscription required\")
8. Description - Brief 1-2 sentence description of what the course covers

Separate courses with a blank line and format each course EXACTLY like this:
",
    );
    query.push_str(FORMAT_TEMPLATE);
    query.push_str(
        "

If information is not available, use \"Not specified\" or \"Not available\" as appropriate.",
    );

    query
}

/// One requirement line per accepted filter value
pub fn constraint_lines(criteria: &FilterCriteria) -> Vec<String> {
    let mut lines = Vec::new();

    for level in &criteria.level {
        lines.push(format!("Level: {}", capitalize(level.trim())));
    }
    for pricing in &criteria.pricing {
        lines.push(
            match pricing {
                Pricing::Free => "Price: Free (no cost required)",
                Pricing::Paid => "Price: Paid (requires payment)",
            }
            .to_string(),
        );
    }
    for provider in &criteria.provider {
        lines.push(format!("Provider: {}", provider.trim()));
    }
    for bucket in &criteria.duration {
        lines.push(
            match bucket {
                DurationBucket::Short => "Duration: Less than 4 weeks or short duration courses",
                DurationBucket::Medium => "Duration: 4-12 weeks or medium duration courses",
                DurationBucket::Long => "Duration: More than 12 weeks or long duration courses",
            }
            .to_string(),
        );
    }

    lines
}

/// Renders a record back into the labeled-block format
pub fn render_block(record: &CourseRecord) -> String {
    let rating = record
        .rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| "Not available".to_string());
    // A blank line would end the block
    let description = record
        .description
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Title: {}\nURL: {}\nProvider: {}\nDuration: {}\nLevel: {}\nRating: {}\nPrice: {}\nDescription: {}",
        record.title,
        record.url,
        record.provider,
        record.duration.as_deref().unwrap_or("Not specified"),
        record.level.as_deref().unwrap_or("Not specified"),
        rating,
        record.price.as_deref().unwrap_or("Not specified"),
        description,
    )
}

/// Builds the query asking the generator to narrow down a list of courses
pub fn refinement_query(courses: &[CourseRecord], request: &str) -> String {
    let listing = courses
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You have been given a list of {count} online courses. The user has requested: \"{request}\"

Based on this request, return ONLY the courses that match the user's criteria.
If the user asks for the cheapest course, return the course(s) with the lowest price.
If the user asks for the best rated course, return the course(s) with the highest rating.
If the user asks for a specific provider, level, or other criteria, filter accordingly.

Here are the courses:

{listing}

Return the matching course(s) in the same format, separated by a blank line:
{template}

If no courses match, return an empty response.",
        count = courses.len(),
        request = request.trim(),
        listing = listing,
        template = FORMAT_TEMPLATE,
    )
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
