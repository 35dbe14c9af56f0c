use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::config;
use crate::error::{AppError, AppResult};

use super::{BookmarkNode, Folder};

/// Base selectors that pick the bookmark bar. The empty string comes from a
/// leading `/`.
pub const PRIMARY_ALIASES: [&str; 3] = ["", "Bookmarks Bar", "bar"];
pub const SECONDARY_ALIASES: [&str; 2] = ["Other Bookmarks", "other"];

pub type Selection = Vec<BookmarkNode>;

#[derive(Debug, Clone, PartialEq)]
pub struct RootSet {
    /// The bookmark bar.
    pub primary: Folder,
    /// "Other Bookmarks".
    pub secondary: Folder,
    /// Mobile/synced root. Parsed but never resolved against.
    pub synced: Option<Folder>,
}

impl RootSet {
    pub fn new(primary: Folder, secondary: Folder) -> Self {
        Self {
            primary,
            secondary,
            synced: None,
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let raw: Value = config::read_json_file(path)?;
        let document: BookmarksDocument = serde_json::from_value(raw)
            .map_err(|err| AppError::MalformedInput(format!("{}: {err}", path.display())))?;
        document.roots.try_into()
    }

    pub fn base(&self, selector: &str) -> AppResult<&Folder> {
        if PRIMARY_ALIASES.contains(&selector) {
            Ok(&self.primary)
        } else if SECONDARY_ALIASES.contains(&selector) {
            Ok(&self.secondary)
        } else {
            Err(AppError::BaseFolderNotFound(selector.to_string()))
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookmarksDocument {
    roots: RawRoots,
}

#[derive(Debug, Deserialize)]
struct RawRoots {
    bookmark_bar: BookmarkNode,
    other: BookmarkNode,
    #[serde(default)]
    synced: Option<BookmarkNode>,
}

impl TryFrom<RawRoots> for RootSet {
    type Error = AppError;

    fn try_from(roots: RawRoots) -> AppResult<Self> {
        let synced = roots
            .synced
            .map(|node| root_folder("synced", node))
            .transpose()?;

        Ok(Self {
            primary: root_folder("bookmark_bar", roots.bookmark_bar)?,
            secondary: root_folder("other", roots.other)?,
            synced,
        })
    }
}

fn root_folder(root: &str, node: BookmarkNode) -> AppResult<Folder> {
    match node {
        BookmarkNode::Folder(folder) => Ok(folder),
        BookmarkNode::Link(_) => Err(AppError::MalformedInput(format!(
            "root {root:?} is not a folder"
        ))),
    }
}

/// Where descent currently stands.
#[derive(Debug, Clone, Copy)]
enum Cursor<'a> {
    Listing(&'a [BookmarkNode]),
    /// A link was matched. Nothing lies below it, so any further segment fails.
    Terminal(&'a BookmarkNode),
}

impl<'a> Cursor<'a> {
    fn descend(self, segment: &str) -> AppResult<Self> {
        let Cursor::Listing(nodes) = self else {
            return Err(AppError::SegmentNotFound(segment.to_string()));
        };

        // Sibling names may repeat; the first one wins.
        let node = nodes
            .iter()
            .find(|node| node.name() == segment)
            .ok_or_else(|| AppError::SegmentNotFound(segment.to_string()))?;

        match node {
            BookmarkNode::Folder(folder) => {
                tracing::debug!(folder = segment, "descending");
                Ok(Cursor::Listing(&folder.children))
            }
            BookmarkNode::Link(_) => {
                tracing::debug!(link = segment, "matched link");
                Ok(Cursor::Terminal(node))
            }
        }
    }

    fn into_selection(self) -> Selection {
        match self {
            Cursor::Listing(nodes) => nodes.to_vec(),
            Cursor::Terminal(node) => vec![node.clone()],
        }
    }
}

/// Resolves a `/`-separated path against the roots.
///
/// Without a path (or with an empty one) the bookmark bar's children are
/// returned. Otherwise the first segment picks a root and every following
/// segment selects a child by exact name. The first missing segment aborts
/// resolution.
pub fn resolve(roots: &RootSet, path: Option<&str>) -> AppResult<Selection> {
    let Some(path) = path.filter(|path| !path.is_empty()) else {
        return Ok(roots.primary.children.clone());
    };

    let mut segments = path.split('/');
    let base = segments.next().unwrap_or_default();
    let root = roots.base(base)?;
    tracing::info!(base, root = %root.name, "selected base folder");

    let cursor = segments.try_fold(Cursor::Listing(&root.children), |cursor, segment| {
        cursor.descend(segment)
    })?;

    Ok(cursor.into_selection())
}
