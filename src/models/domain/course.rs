use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LESSON_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*#{2,4}[ \t]*Lesson[ \t]+(\d+)[ \t]*:[ \t]*(.+?)[ \t\r]*$")
        .expect("LESSON_HEADER is a valid regex pattern")
});

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LessonSection {
    pub number: u32,
    pub title: String,
    pub body: String,
}

/// A generated micro-course: the raw model text plus the lessons found in it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub topic: String,
    pub content: String,
    pub lessons: Vec<LessonSection>,
}

impl Course {
    pub fn new(topic: &str, content: &str) -> Self {
        Self {
            topic: topic.to_string(),
            content: content.to_string(),
            lessons: parse_lessons(content),
        }
    }
}

/// Splits lesson-grammar text on `### Lesson <n>: <title>` headers.
pub fn parse_lessons(content: &str) -> Vec<LessonSection> {
    let headers: Vec<_> = LESSON_HEADER.captures_iter(content).collect();

    headers
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            let body_end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(content.len());

            Some(LessonSection {
                number: caps[1].parse().ok()?,
                title: caps[2].to_string(),
                body: content[whole.end()..body_end].trim().to_string(),
            })
        })
        .collect()
}
