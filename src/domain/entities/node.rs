//! Node entity
//!
//! A node is a single registered menu entry. Items are clickable or
//! label-only entries; groups are pure containers. The registration payload
//! (`NodeArgs`) is kept separate from the stored record (`Node`) because a
//! payload may omit any field, and omitted fields mean "keep what was there".

use serde::{Deserialize, Serialize};

/// Identifier of the implicit top-level node.
pub const ROOT_ID: &str = "root";

/// Suffix of the synthetic group inserted between two directly nested items.
pub const DEFAULT_GROUP_SUFFIX: &str = "-default";

/// Optional extension fields of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
///
/// Fields of the wrong type read as unset instead of failing the whole
/// definition; `tabindex` also accepts a numeric string.
pub struct NodeMeta {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub onclick: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Tooltip
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub tabindex: Option<i32>,

    /// Raw markup appended after the rendered item
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl NodeMeta {
    pub fn is_empty(&self) -> bool {
        *self == NodeMeta::default()
    }

    /// Merge `self` over `previous`: fields set here win, unset fields are
    /// backfilled from `previous`.
    pub fn merged_over(self, previous: &NodeMeta) -> NodeMeta {
        NodeMeta {
            class: self.class.or_else(|| previous.class.clone()),
            onclick: self.onclick.or_else(|| previous.onclick.clone()),
            target: self.target.or_else(|| previous.target.clone()),
            title: self.title.or_else(|| previous.title.clone()),
            tabindex: self.tabindex.or(previous.tabindex),
            html: self.html.or_else(|| previous.html.clone()),
        }
    }

    pub fn class(&self) -> Option<&str> {
        non_empty(&self.class)
    }

    pub fn onclick(&self) -> Option<&str> {
        non_empty(&self.onclick)
    }

    pub fn target(&self) -> Option<&str> {
        non_empty(&self.target)
    }

    pub fn tooltip(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn html(&self) -> Option<&str> {
        non_empty(&self.html)
    }
}

mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Text(String),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Text::deserialize(deserializer)? {
            Text::Text(s) => Some(s),
            Text::Other(_) => None,
        })
    }

    pub fn int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Number::deserialize(deserializer)? {
            Number::Int(n) => i32::try_from(n).ok(),
            Number::Float(f) if f.is_finite() => i32::try_from(f.trunc() as i64).ok(),
            Number::Float(_) => None,
            Number::Text(s) => leading_int(&s),
            Number::Other(_) => None,
        })
    }

    /// Integer prefix of `s` (`" 12px"` reads as 12), or `None` without digits.
    pub(super) fn leading_int(s: &str) -> Option<i32> {
        let s = s.trim_start();
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s.strip_prefix('+').unwrap_or(s)),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        format!("{}{}", sign, &rest[..digits]).parse().ok()
    }
}

/// A stored menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default)]
    pub group: bool,

    #[serde(default, skip_serializing_if = "NodeMeta::is_empty")]
    pub meta: NodeMeta,
}

impl Node {
    /// A bare node with every optional field unset.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            parent: None,
            href: None,
            group: false,
            meta: NodeMeta::default(),
        }
    }

    /// The implicit top-level node. Always an item, never rendered itself.
    pub fn root() -> Self {
        Self::new(ROOT_ID)
    }

    /// The synthetic group that keeps item children of `parent` one level
    /// apart from it.
    pub fn default_group_for(parent: &Node) -> Self {
        Self {
            parent: Some(parent.id.clone()),
            group: true,
            ..Self::new(parent.default_group_id())
        }
    }

    pub fn default_group_id(&self) -> String {
        format!("{}{}", self.id, DEFAULT_GROUP_SUFFIX)
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }

    pub fn is_group(&self) -> bool {
        self.group
    }

    pub fn is_item(&self) -> bool {
        !self.group
    }

    /// Declared parent id; an empty string means "attach under root".
    pub fn parent_id(&self) -> Option<&str> {
        non_empty(&self.parent)
    }

    pub fn href(&self) -> Option<&str> {
        non_empty(&self.href)
    }

    pub fn has_link(&self) -> bool {
        self.href().is_some()
    }

    /// Apply a registration payload on top of this record.
    ///
    /// Fields present in `args` overwrite; absent ones keep their value.
    /// `meta` is merged key by key.
    pub fn apply(&mut self, args: NodeArgs) {
        if let Some(title) = args.title {
            self.title = Some(title);
        }
        if let Some(parent) = args.parent {
            self.parent = Some(parent);
        }
        if let Some(href) = args.href {
            self.href = Some(href);
        }
        if let Some(group) = args.group {
            self.group = group;
        }
        if let Some(meta) = args.meta {
            self.meta = meta.merged_over(&self.meta);
        }
    }
}

/// Registration payload accepted by `add_node`.
///
/// Every field is optional; see [`Node::apply`] for merge rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<NodeMeta>,
}

impl NodeArgs {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn group(mut self, group: bool) -> Self {
        self.group = Some(group);
        self
    }

    pub fn meta(mut self, meta: NodeMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
