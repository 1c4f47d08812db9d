use serde::{Deserialize, Serialize};

use super::post::TagRef;

/// Tag entity - an admin-curated category with a display color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub color: String,
}

/// Resolve a post's tag references against the full catalog.
///
/// The output preserves the input order; a reference that matches nothing in
/// the catalog resolves to `None` in place rather than being dropped or
/// raising, matching how the editor renders stored tags.
pub fn resolve_tags<'a>(refs: &[TagRef], catalog: &'a [Tag]) -> Vec<Option<&'a Tag>> {
    refs.iter()
        .map(|r| {
            r.id()
                .and_then(|id| catalog.iter().find(|tag| tag.id == id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Tag> {
        vec![
            Tag {
                id: 1,
                name: "React".to_string(),
                color: "blue".to_string(),
            },
            Tag {
                id: 3,
                name: "Remix".to_string(),
                color: "red".to_string(),
            },
        ]
    }

    #[test]
    fn resolution_preserves_input_order() {
        let refs = vec![TagRef::Id(3), TagRef::Id(1)];
        let catalog = catalog();
        let resolved = resolve_tags(&refs, &catalog);

        let names: Vec<_> = resolved
            .iter()
            .map(|t| t.map(|tag| tag.name.as_str()))
            .collect();
        assert_eq!(names, vec![Some("Remix"), Some("React")]);
    }

    #[test]
    fn string_refs_resolve_like_numeric_ones() {
        let refs = vec![TagRef::Text("1".to_string())];
        let catalog = catalog();
        let resolved = resolve_tags(&refs, &catalog);

        assert_eq!(resolved[0].map(|t| t.id), Some(1));
    }

    #[test]
    fn unknown_ids_resolve_to_none_in_place() {
        let refs = vec![TagRef::Id(3), TagRef::Id(99), TagRef::Id(1)];
        let catalog = catalog();
        let resolved = resolve_tags(&refs, &catalog);

        assert_eq!(resolved.len(), 3);
        assert!(resolved[1].is_none());
        assert_eq!(resolved[2].map(|t| t.id), Some(1));
    }
}
