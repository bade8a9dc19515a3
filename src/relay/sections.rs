use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// `None` for text that precedes the first marker.
    pub title: Option<String>,
    pub content: String,
}

/// Cuts report text into cards at each `[Title]` marker. Blank fragments are dropped.
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut title: Option<String> = None;
    let mut rest = text;

    loop {
        let Some((open, close)) = find_marker(rest) else {
            push_section(&mut sections, title.take(), rest);
            break;
        };

        push_section(&mut sections, title.take(), &rest[..open]);
        let name = rest[open + 1..close].trim();
        title = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        rest = &rest[close + 1..];
    }

    sections
}

/// Byte offsets of the first `[` and its closing `]` on the same line.
fn find_marker(text: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(found) = text[from..].find('[') {
        let open = from + found;
        let tail = &text[open + 1..];
        match tail.find(|c: char| c == ']' || c == '\n') {
            Some(len) if tail[len..].starts_with(']') => return Some((open, open + 1 + len)),
            _ => from = open + 1,
        }
    }
    None
}

fn push_section(sections: &mut Vec<Section>, title: Option<String>, body: &str) {
    let content = body.trim();
    if title.is_none() && content.is_empty() {
        return;
    }
    sections.push(Section {
        title,
        content: content.to_string(),
    });
}
