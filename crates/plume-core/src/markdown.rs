//! Markdown processing utilities.
//!
//! Chapters are often written in Markdown. Before analysis the markup can be
//! stripped with pulldown-cmark, keeping the line and paragraph structure
//! intact: paragraph counting and dialogue detection both read the raw
//! layout of the text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose with its layout.
///
/// Removes:
/// - Code blocks (fenced and indented) and inline code
/// - Headings (chapter titles are not prose)
/// - Tables and raw HTML
/// - YAML frontmatter
/// - Emphasis, blockquote and list markers
///
/// Preserves:
/// - Line breaks inside a paragraph (one `\n`)
/// - Paragraph boundaries (a blank line)
/// - Link text (the visible part)
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => result.push('\n'),

            Event::End(TagEnd::Paragraph) if skip_depth == 0 => result.push_str("\n\n"),
            Event::End(TagEnd::Item) if skip_depth == 0 => result.push('\n'),

            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// Text of the first heading in the document, if any.
pub fn first_heading(text: &str) -> Option<String> {
    let parser = Parser::new_ext(strip_frontmatter(text), Options::empty());

    let mut in_heading = false;
    let mut heading = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::Text(t) | Event::Code(t) if in_heading => heading.push_str(&t),
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = heading.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
            }
            _ => {}
        }
    }

    None
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
