// src/routes/mod.rs

/// Views the front end can render. Unmatched paths resolve to `NotFound`
/// explicitly instead of falling through to undefined behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Chat,
    Debate,
    NotFound,
}

/// Ordered route table; insertion order is matching priority.
pub const ROUTES: &[(&str, View)] = &[
    ("/", View::Chat),
    ("/chat", View::Chat),
    ("/debate", View::Debate),
];

/// First-match-wins resolution over [`ROUTES`].
pub fn resolve(path: &str) -> View {
    resolve_in(ROUTES, path)
}

fn resolve_in(table: &[(&str, View)], path: &str) -> View {
    table
        .iter()
        .find(|(pattern, _)| *pattern == path)
        .map(|(_, view)| *view)
        .unwrap_or(View::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(resolve("/"), View::Chat);
        assert_eq!(resolve("/chat"), View::Chat);
        assert_eq!(resolve("/debate"), View::Debate);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("/admin"), View::NotFound);
        assert_eq!(resolve(""), View::NotFound);
        assert_eq!(resolve("/debate/"), View::NotFound);
    }

    #[test]
    fn earlier_entries_shadow_later_ones() {
        let table = [("/", View::Debate), ("/", View::Chat)];
        assert_eq!(resolve_in(&table, "/"), View::Debate);
    }
}
