//! Markdown formatting of extracted essay text
//!
//! A pure, single-pass transformation: paragraphs split on blank lines, the
//! first paragraph rendered as a pull quote, the rest as plain blocks, with a
//! title heading on top and an attribution footer at the bottom.

/// Fixed attribution shown in the footer
const ATTRIBUTION: &str = "Essay by Paul Graham";

/// Assumed reading speed in words per minute
const WORDS_PER_MINUTE: usize = 200;

/// Render extracted essay text as display markdown
///
/// The pull-quote treatment for the first paragraph is a blockquote with
/// italic text, which renders as a left accent border plus italics. The
/// footer reports a reading time of ceil(word_count / 200) minutes, counted
/// over the raw extracted text rather than the rendered markup.
pub fn format_essay(text: &str, title: &str) -> String {
    let paragraphs = split_paragraphs(text);
    let minutes = read_minutes(word_count(text));

    let mut blocks: Vec<String> = Vec::with_capacity(paragraphs.len() + 2);
    blocks.push(format!("# {}", escape_markdown(title)));

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let escaped = escape_markdown(paragraph);
        if index == 0 {
            blocks.push(format!("> *{}*", escaped));
        } else {
            blocks.push(escaped);
        }
    }

    blocks.push(format!(
        "---\n{} | Read time: {} minutes",
        ATTRIBUTION, minutes
    ));

    blocks.join("\n\n")
}

/// Split extracted text into paragraphs on blank-line boundaries
///
/// Each paragraph's inner line breaks collapse to single spaces; empty
/// segments are dropped, so empty input yields no paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Count whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in minutes, rounded up
pub fn read_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Backslash-escape markdown-significant characters in essay text
///
/// Inline markers are escaped everywhere; block introducers only at the
/// start of a line, where they would change the block structure.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_line_start = true;

    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' => {
                out.push('\\');
                out.push(c);
            }
            '#' | '>' | '-' | '+' if at_line_start => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
        at_line_start = c == '\n';
    }

    out
}
