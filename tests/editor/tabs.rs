use chatolution::editor::{TabRegistry, TabRejection};

fn defaults() -> TabRegistry {
    TabRegistry::new(
        ["About", "Portfolio", "Services", "Blog"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
    )
}

#[test]
fn test_default_tabs_in_order() {
    let registry = defaults();
    assert_eq!(registry.list_tabs(), ["About", "Portfolio", "Services", "Blog"]);
    assert_eq!(registry.position("Services"), Some(2));
}

#[test]
fn test_duplicate_tab_rejected() {
    let mut registry = defaults();
    assert_eq!(
        registry.add_tab("About"),
        Err(TabRejection::Duplicate("About".to_string()))
    );
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_new_tab_appended() {
    let mut registry = defaults();
    assert_eq!(registry.add_tab("Team"), Ok("Team".to_string()));
    assert_eq!(registry.len(), 5);
    assert_eq!(registry.list_tabs().last().map(String::as_str), Some("Team"));
}

#[test]
fn test_empty_and_blank_names_rejected() {
    let mut registry = defaults();
    assert_eq!(registry.add_tab(""), Err(TabRejection::Empty));
    assert_eq!(registry.add_tab("   \t"), Err(TabRejection::Empty));
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_names_are_stored_trimmed() {
    let mut registry = defaults();
    assert_eq!(registry.add_tab("  Team  "), Ok("Team".to_string()));
    assert!(registry.contains("Team"));
    assert!(registry.add_tab("Team").is_err());
}

#[test]
fn test_uniqueness_is_case_sensitive() {
    let mut registry = defaults();
    assert!(registry.add_tab("about").is_ok());
    assert!(registry.add_tab("ABOUT").is_ok());
    assert_eq!(registry.len(), 6);
}

#[test]
fn test_repeated_adds_never_duplicate() {
    let mut registry = defaults();
    for name in ["Team", "Blog", "Team", " Team", "Careers", "Careers"] {
        let _ = registry.add_tab(name);
    }

    let mut names = registry.list_tabs().to_vec();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), registry.len());
    assert_eq!(registry.len(), 6);
}

#[test]
fn test_duplicate_defaults_are_skipped() {
    let registry = TabRegistry::new(vec!["Home".to_string(), "Home".to_string(), String::new()]);
    assert_eq!(registry.list_tabs(), ["Home"]);
}

#[test]
fn test_rejection_messages() {
    assert_eq!(TabRejection::Empty.to_string(), "Tab name cannot be empty");
    assert_eq!(
        TabRejection::Duplicate("Blog".to_string()).to_string(),
        "A tab named 'Blog' already exists"
    );
}
