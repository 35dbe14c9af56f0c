use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::{BookmarkNode, Selection};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ProjectionMode {
    #[default]
    Full,
    NameUrlOnly,
}

impl ProjectionMode {
    pub fn from_simple(simple: bool) -> Self {
        if simple { Self::NameUrlOnly } else { Self::Full }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct LinkSummary {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    Full(Selection),
    NameUrl(Vec<LinkSummary>),
}

impl Projection {
    pub fn len(&self) -> usize {
        match self {
            Self::Full(nodes) => nodes.len(),
            Self::NameUrl(links) => links.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `NameUrlOnly` only applies to links; a folder anywhere in the selection is
/// an error.
pub fn project(selection: Selection, mode: ProjectionMode) -> AppResult<Projection> {
    tracing::debug!(?mode, entries = selection.len(), "projecting selection");

    match mode {
        ProjectionMode::Full => Ok(Projection::Full(selection)),
        ProjectionMode::NameUrlOnly => selection
            .into_iter()
            .map(|node| match node {
                BookmarkNode::Link(link) => Ok(LinkSummary {
                    name: link.name,
                    url: link.url,
                }),
                BookmarkNode::Folder(folder) => Err(AppError::ProjectionType(format!(
                    "folder {:?}",
                    folder.name
                ))),
            })
            .collect::<AppResult<Vec<_>>>()
            .map(Projection::NameUrl),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn full_is_identity() {
        let selection = vec![
            BookmarkNode::folder("f", vec![BookmarkNode::link("a", "u1")]),
            BookmarkNode::link("b", "u2"),
        ];
        assert_eq!(
            project(selection.clone(), ProjectionMode::Full).unwrap(),
            Projection::Full(selection)
        );
    }

    #[test]
    fn name_url_keeps_only_two_fields() {
        let projected = project(
            vec![BookmarkNode::link("a", "u1"), BookmarkNode::link("b", "u2")],
            ProjectionMode::NameUrlOnly,
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&projected).expect("serialize"),
            json!([{"name": "a", "url": "u1"}, {"name": "b", "url": "u2"}])
        );
    }

    #[test]
    fn name_url_rejects_folder() {
        let err = project(
            vec![BookmarkNode::link("a", "u1"), BookmarkNode::folder("f", vec![])],
            ProjectionMode::NameUrlOnly,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ProjectionType(what) if what.contains("\"f\"")));
    }

    #[test]
    fn simple_flag_selects_mode() {
        assert_eq!(ProjectionMode::from_simple(true), ProjectionMode::NameUrlOnly);
        assert_eq!(ProjectionMode::from_simple(false), ProjectionMode::Full);
    }
}
