use chatbot_client::routes::{ROUTES, View, resolve};

#[test]
fn debate_path_always_yields_debate() {
    assert_eq!(resolve("/debate"), View::Debate);
}

#[test]
fn root_yields_the_first_table_entry() {
    let (first_path, first_view) = ROUTES[0];
    assert_eq!(first_path, "/");
    assert_eq!(first_view, View::Chat);
    assert_eq!(resolve("/"), View::Chat);
}

#[test]
fn every_table_entry_resolves_to_its_view() {
    for (path, view) in ROUTES {
        assert_eq!(resolve(path), *view);
    }
}

#[test]
fn unmatched_paths_resolve_to_not_found() {
    assert_eq!(resolve("/settings"), View::NotFound);
    assert_eq!(resolve("/chat/extra"), View::NotFound);
}
