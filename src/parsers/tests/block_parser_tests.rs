use crate::parsers::{Parser, blocks};

#[cfg(test)]
mod block_tests {
    use super::*;

    #[test]
    fn test_split_into_blocks() {
        assert!(blocks::split_into_blocks("").is_empty());
        assert!(blocks::split_into_blocks("  \n\t\n").is_empty());

        let result = blocks::split_into_blocks("A\nB\n\nC");
        assert_eq!(result, vec![vec!["A", "B"], vec!["C"]]);

        // Several blank (or whitespace-only) lines are one separator
        let result = blocks::split_into_blocks("A\n\n   \n\nB\n");
        assert_eq!(result, vec![vec!["A"], vec!["B"]]);

        // Windows line endings
        let result = blocks::split_into_blocks("A\r\n\r\nB\r\n");
        assert_eq!(result, vec![vec!["A"], vec!["B"]]);
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    const TWO_COURSES: &str = "\
Here are some courses I found:

Title: Machine Learning
URL: https://www.coursera.org/learn/machine-learning
Provider: Coursera
Duration: 11 weeks
Level: Beginner
Rating: 4.9
Price: Free
Description: Andrew Ng's classic course.

Title: CS50's Introduction to AI
URL: https://www.edx.org/course/cs50-ai
Description: Search, optimization and learning
with Python.

Let me know if you want more!";

    #[test]
    fn test_empty_text() {
        assert!(Parser::parse("").is_empty());
        assert!(Parser::parse("   \n\n  ").is_empty());
    }

    #[test]
    fn test_no_recognizable_blocks() {
        let text = "I could not find any courses.\n\nSorry about that.";
        assert!(Parser::parse(text).is_empty());
    }

    #[test]
    fn test_commentary_blocks_dropped() {
        let result = Parser::parse(TWO_COURSES);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title.as_deref(), Some("Machine Learning"));
        assert_eq!(result[1].title.as_deref(), Some("CS50's Introduction to AI"));
    }

    #[test]
    fn test_missing_optional_fields_are_absent() {
        let result = Parser::parse(TWO_COURSES);
        let second = &result[1];
        assert_eq!(second.provider, None);
        assert_eq!(second.duration, None);
        assert_eq!(second.level, None);
        assert_eq!(second.rating, None);
        assert_eq!(second.price, None);
        assert_eq!(
            second.description.as_deref(),
            Some("Search, optimization and learning\nwith Python.")
        );
    }

    #[test]
    fn test_title_and_url_are_trimmed_verbatim() {
        let text = "Title:    Spaced Title   \nURL:  https://Example.com/Course/  ";
        let result = Parser::parse(text);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title.as_deref(), Some("Spaced Title"));
        assert_eq!(result[0].url.as_deref(), Some("https://Example.com/Course/"));
    }

    #[test]
    fn test_block_needs_title_and_url() {
        let text = "Title: Only a title\n\nURL: https://edx.org/only-url\n\nTitle: Both\nURL: https://edx.org/both";
        let result = Parser::parse(text);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title.as_deref(), Some("Both"));
    }

    #[test]
    fn test_empty_title_value_is_missing() {
        let text = "Title:\nURL: https://edx.org/x";
        assert!(Parser::parse(text).is_empty());
    }

    #[test]
    fn test_bad_rating_does_not_drop_block() {
        let text = "Title: Rust\nURL: https://udemy.com/course/rust\nRating: four stars";
        let result = Parser::parse(text);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].rating, None);
    }

    #[test]
    fn test_parse_block() {
        assert!(Parser::parse_block(&["Title: x", "URL: https://a.com"]).is_some());
        assert!(Parser::parse_block(&["Just words"]).is_none());
    }
}
