use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Content(String),
    Done,
    Ignored,
}

#[derive(Deserialize)]
struct Chunk {
    #[serde(default)]
    choices: Vec<Choice>,
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    delta: Option<Delta>,
}

#[derive(Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Decodes one server-sent-event line. Accepts both the upstream completion chunk
/// (`choices[0].delta.content`) and the relayed `{ "content": ... }` form.
pub fn parse_stream_line(line: &str) -> StreamEvent {
    let Some(data) = line.trim_end_matches('\r').strip_prefix("data: ") else {
        return StreamEvent::Ignored;
    };
    if data.trim() == "[DONE]" {
        return StreamEvent::Done;
    }

    let chunk: Chunk = match serde_json::from_str(data) {
        Ok(chunk) => chunk,
        Err(err) => {
            tracing::debug!(%err, "skipping malformed stream payload");
            return StreamEvent::Ignored;
        }
    };

    let content = chunk.content.or_else(|| {
        chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta)
            .and_then(|delta| delta.content)
    });
    match content {
        Some(text) if !text.is_empty() => StreamEvent::Content(text),
        _ => StreamEvent::Ignored,
    }
}

/// Folds a captured stream into the full report text, stopping at `[DONE]`.
pub fn collect_stream(capture: &str) -> String {
    let mut full = String::new();
    for line in capture.lines() {
        match parse_stream_line(line) {
            StreamEvent::Content(text) => full.push_str(&text),
            StreamEvent::Done => break,
            StreamEvent::Ignored => {}
        }
    }
    full
}
