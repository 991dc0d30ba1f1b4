//! Event-driven loader: marked YAML events → `Node` trees.
//!
//! Line numbers come straight from the event markers. Scalar tags follow the
//! YAML core schema: explicit tags win, quoted/block scalars are strings,
//! plain scalars are resolved from their text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use super::ParseError;
use crate::node::{Node, ScalarTag};

static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?([0-9]+|0x[0-9a-fA-F]+|0o[0-7]+)$").unwrap());
static FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?([eE][-+]?[0-9]+)?)$").unwrap());

pub(super) fn load(input: &str) -> Result<Vec<Node>, ParseError> {
    let mut tree = TreeLoader::default();
    let mut parser = Parser::new(input.chars());
    parser.load(&mut tree, true)?;
    Ok(tree.docs)
}

/// A mapping or sequence still being built. Mapping events alternate
/// key, value, key, value; `pending_key` holds the key between the two.
enum Frame {
    Mapping {
        line: usize,
        anchor: usize,
        entries: Vec<(Node, Node)>,
        pending_key: Option<Node>,
    },
    Sequence {
        line: usize,
        anchor: usize,
        items: Vec<Node>,
    },
}

#[derive(Default)]
struct TreeLoader {
    docs: Vec<Node>,
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
}

impl TreeLoader {
    fn insert(&mut self, node: Node, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.stack.last_mut() {
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                None => *pending_key = Some(node),
                Some(key) => entries.push((key, node)),
            },
            Some(Frame::Sequence { items, .. }) => items.push(node),
            None => self.docs.push(node),
        }
    }
}

impl MarkedEventReceiver for TreeLoader {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Scalar(value, style, anchor, tag) => {
                let tag = resolve_scalar_tag(&value, style, tag.as_ref());
                self.insert(Node::scalar(marker.line(), value, tag), anchor);
            }
            Event::MappingStart(anchor, ..) => {
                self.stack.push(Frame::Mapping {
                    line: marker.line(),
                    anchor,
                    entries: Vec::new(),
                    pending_key: None,
                });
            }
            Event::MappingEnd => {
                if let Some(Frame::Mapping {
                    line,
                    anchor,
                    entries,
                    ..
                }) = self.stack.pop()
                {
                    self.insert(Node::mapping(line, entries), anchor);
                }
            }
            Event::SequenceStart(anchor, ..) => {
                self.stack.push(Frame::Sequence {
                    line: marker.line(),
                    anchor,
                    items: Vec::new(),
                });
            }
            Event::SequenceEnd => {
                if let Some(Frame::Sequence {
                    line,
                    anchor,
                    items,
                }) = self.stack.pop()
                {
                    self.insert(Node::sequence(line, items), anchor);
                }
            }
            Event::Alias(anchor) => {
                // The parser rejects unknown anchors before they reach us,
                // so a miss here can only mean an empty anchored node.
                let node = self
                    .anchors
                    .get(&anchor)
                    .cloned()
                    .unwrap_or_else(|| Node::scalar(marker.line(), "", Some(ScalarTag::Null)));
                self.insert(node, 0);
            }
            // Stream and document bookkeeping carry no content.
            _ => {}
        }
    }
}

fn resolve_scalar_tag(value: &str, style: TScalarStyle, tag: Option<&Tag>) -> Option<ScalarTag> {
    if let Some(tag) = tag {
        return resolve_explicit_tag(tag);
    }
    if style != TScalarStyle::Plain {
        return Some(ScalarTag::Str);
    }
    Some(resolve_plain(value))
}

fn resolve_explicit_tag(tag: &Tag) -> Option<ScalarTag> {
    // The parser hands the secondary handle through either resolved or raw.
    if tag.handle != "tag:yaml.org,2002:" && tag.handle != "!!" {
        return None;
    }
    match tag.suffix.as_str() {
        "str" => Some(ScalarTag::Str),
        "int" => Some(ScalarTag::Int),
        "bool" => Some(ScalarTag::Bool),
        "float" => Some(ScalarTag::Float),
        "null" => Some(ScalarTag::Null),
        _ => None,
    }
}

/// Core-schema resolution for plain, untagged scalars.
fn resolve_plain(value: &str) -> ScalarTag {
    match value {
        "" | "~" | "null" | "Null" | "NULL" => return ScalarTag::Null,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => return ScalarTag::Bool,
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" | "-.inf" | "-.Inf" | "-.INF"
        | ".nan" | ".NaN" | ".NAN" => return ScalarTag::Float,
        _ => {}
    }
    if INT_RE.is_match(value) {
        ScalarTag::Int
    } else if FLOAT_RE.is_match(value) {
        ScalarTag::Float
    } else {
        ScalarTag::Str
    }
}
