//! Generic parsed-document tree consumed by the validators.
//!
//! This is the shape a YAML parser hands back: every node keeps the 1-based
//! source line it starts on, mappings preserve entry order (duplicate keys
//! included), and scalars carry their resolved core-schema tag. The
//! validators read this tree; nothing mutates it.

/// Resolved scalar type tag.
///
/// Plain unquoted scalars resolve to one of these during parsing; quoted
/// scalars always resolve to `Str`. A scalar with an unrecognized explicit
/// tag carries no `ScalarTag` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTag {
    Str,
    Int,
    Bool,
    Float,
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Scalar {
        value: String,
        tag: Option<ScalarTag>,
    },
    /// Ordered key/value pairs. Key uniqueness is NOT guaranteed here;
    /// lookups take the first occurrence.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub line: usize,
    pub value: NodeValue,
}

impl Node {
    pub fn scalar(line: usize, value: impl Into<String>, tag: Option<ScalarTag>) -> Self {
        Node {
            line,
            value: NodeValue::Scalar {
                value: value.into(),
                tag,
            },
        }
    }

    pub fn mapping(line: usize, entries: Vec<(Node, Node)>) -> Self {
        Node {
            line,
            value: NodeValue::Mapping(entries),
        }
    }

    pub fn sequence(line: usize, items: Vec<Node>) -> Self {
        Node {
            line,
            value: NodeValue::Sequence(items),
        }
    }

    pub fn as_mapping(&self) -> Option<&[(Node, Node)]> {
        match &self.value {
            NodeValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.value {
            NodeValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a mapping value by scalar key. Returns `None` on a non-mapping
    /// node. When the key is duplicated, the first occurrence wins.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k.scalar_value() == Some(key))
            .map(|(_, v)| v)
    }

    /// Raw scalar text, whatever the tag. `None` for mappings and sequences.
    pub fn scalar_value(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Scalar { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Scalar text when the node is string-like: tagged as a string, or
    /// untagged. Tagged non-strings (`!!int` etc.) return `None`.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Scalar { value, tag } if matches!(tag, None | Some(ScalarTag::Str)) => {
                Some(value.as_str())
            }
            _ => None,
        }
    }

    /// True only for scalars explicitly tagged as integers. Quoted numeric
    /// text is a string, not an integer.
    pub fn is_int(&self) -> bool {
        matches!(
            &self.value,
            NodeValue::Scalar {
                tag: Some(ScalarTag::Int),
                ..
            }
        )
    }
}
