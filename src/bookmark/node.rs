use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

const FOLDER_TYPE: &str = "folder";
const URL_TYPE: &str = "url";

/// A bookmark tree node. The variant is fixed when the node is parsed, so a
/// folder always has children and a link always has a url.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawNode")]
pub enum BookmarkNode {
    Folder(Folder),
    Link(Link),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Folder {
    pub name: String,
    pub children: Vec<BookmarkNode>,
    /// Fields the browser stores that resolution does not use (`id`, `guid`,
    /// `date_added`, ...). Kept so full exports match the source file.
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub name: String,
    pub url: String,
    pub extra: Map<String, Value>,
}

impl BookmarkNode {
    pub fn folder(name: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        Self::Folder(Folder {
            name: name.into(),
            children,
            extra: Map::new(),
        })
    }

    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link(Link {
            name: name.into(),
            url: url.into(),
            extra: Map::new(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::Link(link) => &link.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    children: Option<Vec<BookmarkNode>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawNode> for BookmarkNode {
    type Error = String;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let RawNode {
            kind,
            name,
            url,
            children,
            extra,
        } = raw;

        match (kind.as_str(), children, url) {
            (FOLDER_TYPE, Some(children), None) => Ok(Self::Folder(Folder {
                name,
                children,
                extra,
            })),
            (URL_TYPE, None, Some(url)) => Ok(Self::Link(Link { name, url, extra })),
            (FOLDER_TYPE, _, _) => Err(format!(
                "folder {name:?} must have children and no url"
            )),
            (URL_TYPE, _, _) => Err(format!("link {name:?} must have a url and no children")),
            (other, _, _) => Err(format!("node {name:?} has unknown type {other:?}")),
        }
    }
}

impl Serialize for BookmarkNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Self::Folder(folder) => {
                map.serialize_entry("name", &folder.name)?;
                map.serialize_entry("type", FOLDER_TYPE)?;
                map.serialize_entry("children", &folder.children)?;
                for (key, value) in &folder.extra {
                    map.serialize_entry(key, value)?;
                }
            }
            Self::Link(link) => {
                map.serialize_entry("name", &link.name)?;
                map.serialize_entry("type", URL_TYPE)?;
                map.serialize_entry("url", &link.url)?;
                for (key, value) in &link.extra {
                    map.serialize_entry(key, value)?;
                }
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_nested_folder_and_keeps_extra_fields() {
        let node: BookmarkNode = serde_json::from_value(json!({
            "type": "folder",
            "name": "Work",
            "id": "7",
            "children": [
                {"type": "url", "name": "Docs", "url": "https://docs.example", "guid": "g1"}
            ]
        }))
        .expect("parse should work");

        let BookmarkNode::Folder(folder) = &node else {
            panic!("expected folder");
        };
        assert_eq!(folder.name, "Work");
        assert_eq!(folder.extra.get("id"), Some(&json!("7")));
        let BookmarkNode::Link(link) = &folder.children[0] else {
            panic!("expected link");
        };
        assert_eq!(link.url, "https://docs.example");
        assert_eq!(link.extra.get("guid"), Some(&json!("g1")));
    }

    #[test]
    fn rejects_folder_without_children() {
        let err = serde_json::from_value::<BookmarkNode>(json!({"type": "folder", "name": "Empty"}))
            .unwrap_err();
        assert!(err.to_string().contains("\"Empty\""));
    }

    #[test]
    fn rejects_link_without_url() {
        assert!(
            serde_json::from_value::<BookmarkNode>(json!({"type": "url", "name": "x"})).is_err()
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let err = serde_json::from_value::<BookmarkNode>(
            json!({"type": "separator", "name": "---"}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn serializes_with_type_discriminator() {
        let node = BookmarkNode::folder("f", vec![BookmarkNode::link("a", "u1")]);
        assert_eq!(
            serde_json::to_value(&node).expect("serialize"),
            json!({
                "name": "f",
                "type": "folder",
                "children": [{"name": "a", "type": "url", "url": "u1"}]
            })
        );
    }
}
