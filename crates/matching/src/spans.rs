//! Span assembly: cut a rendered text into plain and highlighted segments.

use serde::Serialize;

use crate::color::BlockColor;
use crate::positions::PositionedBlock;

/// A contiguous segment of rendered text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Span {
    Plain {
        text: String,
    },
    Matched {
        text: String,
        block_id: usize,
        color: BlockColor,
    },
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain { text } | Span::Matched { text, .. } => text,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Span::Matched { .. })
    }

    pub fn color(&self) -> Option<BlockColor> {
        match self {
            Span::Plain { .. } => None,
            Span::Matched { color, .. } => Some(*color),
        }
    }
}

/// Split `text` into spans at the given positions.
///
/// `positions` must be sorted by offset. A position starting inside an
/// already highlighted run is dropped, so spans never overlap; empty plain
/// segments are not emitted. Concatenating the `text` of the result always
/// yields `text`.
pub fn assemble_spans(text: &str, positions: &[PositionedBlock], colors: &[BlockColor]) -> Vec<Span> {
    let mut spans = Vec::with_capacity(positions.len() * 2 + 1);
    let mut cursor = 0;

    for pos in positions {
        let Some(color) = colors.get(pos.block_id).copied() else {
            continue;
        };
        if pos.offset < cursor || pos.end() > text.len() || pos.len == 0 {
            continue;
        }
        let (Some(before), Some(matched)) = (text.get(cursor..pos.offset), text.get(pos.offset..pos.end())) else {
            continue;
        };
        if !before.is_empty() {
            spans.push(Span::Plain {
                text: before.to_string(),
            });
        }
        spans.push(Span::Matched {
            text: matched.to_string(),
            block_id: pos.block_id,
            color,
        });
        cursor = pos.end();
    }

    if cursor < text.len() {
        spans.push(Span::Plain {
            text: text[cursor..].to_string(),
        });
    }
    spans
}

/// Concatenate span texts back into a single string.
pub fn concat(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}
