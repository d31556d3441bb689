//! Addresses into the site document.
//!
//! A path is a dotted list of camelCase field names, with `[n]` selecting an
//! element of a list: `hero.ctaButtons[1].text`, `team.members[0].specialties`,
//! `contact.form.fields.email.label`. Field names are the persisted JSON keys,
//! so a path reads the same way as the stored document.

use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A record field or map key.
    Field(String),
    /// A list position.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// A parsed document path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

#[derive(Clone, Copy)]
enum State {
    /// Start of input, or right after a `.`.
    Start,
    Field,
    /// Right after a `]`.
    AfterIndex,
}

impl Path {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Render the first `len` segments, for error locations.
    pub fn prefix(&self, len: usize) -> String {
        render(&self.segments[..len.min(self.segments.len())])
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        let mut field = String::new();
        let mut state = State::Start;
        let mut chars = s.char_indices();

        while let Some((at, ch)) = chars.next() {
            match (state, ch) {
                (State::Start, '.' | '[') => return Err(PathError::EmptySegment(at)),
                (State::Field, '.') => {
                    segments.push(Segment::Field(std::mem::take(&mut field)));
                    state = State::Start;
                }
                (State::AfterIndex, '.') => state = State::Start,
                (State::Field | State::AfterIndex, '[') => {
                    if !field.is_empty() {
                        segments.push(Segment::Field(std::mem::take(&mut field)));
                    }
                    let mut digits = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        digits.push(c);
                    }
                    if !closed {
                        return Err(PathError::UnterminatedIndex(at));
                    }
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| PathError::InvalidIndex(digits.clone()))?;
                    segments.push(Segment::Index(index));
                    state = State::AfterIndex;
                }
                (_, ']') => return Err(PathError::UnexpectedChar { ch, at }),
                (State::AfterIndex, _) => return Err(PathError::UnexpectedChar { ch, at }),
                (State::Start | State::Field, _) => {
                    field.push(ch);
                    state = State::Field;
                }
            }
        }

        match state {
            State::Start => Err(PathError::EmptySegment(s.len())),
            State::Field => {
                segments.push(Segment::Field(field));
                Ok(Self { segments })
            }
            State::AfterIndex => Ok(Self { segments }),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.segments))
    }
}

fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if matches!(segment, Segment::Field(_)) && !out.is_empty() {
            out.push('.');
        }
        out.push_str(&segment.to_string());
    }
    out
}
