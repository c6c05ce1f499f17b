/// Reduce a string to its canonical slug form: lowercase, alphanumeric,
/// hyphen-separated, no leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else if matches!(c, ' ' | '_' | '-') {
            pending_hyphen = true;
        }
        // Other characters are dropped without acting as separators.
    }

    out
}

const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time for a piece of content, e.g. `"8 min read"`.
pub fn reading_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// Produce a plain-text excerpt from markdown content: fenced code blocks,
/// heading markers, emphasis, inline code, link syntax and HTML tags are
/// stripped, then the result is truncated to `max_len` characters.
pub fn plain_excerpt(content: &str, max_len: usize) -> String {
    let mut plain = String::with_capacity(content.len().min(max_len * 2));
    let mut in_code_block = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }
        let stripped = strip_inline_markup(trimmed.trim_start_matches('#').trim_start());
        if stripped.is_empty() {
            continue;
        }
        if !plain.is_empty() {
            plain.push(' ');
        }
        plain.push_str(&stripped);
        if plain.chars().count() > max_len {
            break;
        }
    }

    truncate(&plain, max_len)
}

/// Remove emphasis markers, inline code backticks, `[text](url)` link syntax
/// and `<...>` HTML tags from a single line.
fn strip_inline_markup(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' | '`' => {}
            '<' => {
                // Drop through the closing '>' if one exists on this line.
                for next in chars.by_ref() {
                    if next == '>' {
                        break;
                    }
                }
            }
            '[' => {
                // `[text](url)` keeps the text, drops the target.
                let mut text = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == ']' {
                        closed = true;
                        break;
                    }
                    text.push(next);
                }
                out.push_str(&text);
                if closed && chars.peek() == Some(&'(') {
                    for next in chars.by_ref() {
                        if next == ')' {
                            break;
                        }
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out.trim().to_string()
}

/// Truncate on a character boundary, appending an ellipsis when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((byte_idx, _)) => format!("{}...", s[..byte_idx].trim_end()),
        None => s.to_string(),
    }
}
