use taskdeck_core::{
    resolve, DashboardConfig, FeatureView, MenuEntry, NavigationController, FALLBACK_TITLE,
    MENU_ENTRIES,
};

const NESTED: &[MenuEntry] = &[
    MenuEntry {
        route_path: "/transcriber",
        label: "Transcriber",
        icon_token: "youtube",
    },
    MenuEntry {
        route_path: "/transcriber/detail",
        label: "Transcript Detail",
        icon_token: "file",
    },
];

#[test]
fn first_entry_in_list_order_wins() {
    let resolution = resolve("/transcriber/detail", NESTED);
    assert_eq!(resolution.matched, Some(&NESTED[0]));
    assert_eq!(resolution.title, "Transcriber");
}

#[test]
fn no_match_falls_back_to_dashboard_title() {
    let resolution = resolve("/settings", MENU_ENTRIES);
    assert_eq!(resolution.matched, None);
    assert_eq!(resolution.title, FALLBACK_TITLE);

    assert_eq!(resolve("/", MENU_ENTRIES).title, "Dashboard");
    assert_eq!(resolve("", MENU_ENTRIES).matched, None);
}

#[test]
fn prefix_match_is_plain_string_prefix() {
    assert_eq!(
        resolve("/reddit-scraper/top?limit=5", MENU_ENTRIES).title,
        "Reddit Scraper"
    );
    assert_eq!(resolve("/transcriberx", MENU_ENTRIES).title, "Transcriber");
    assert_eq!(resolve("/Transcriber", MENU_ENTRIES).matched, None);
}

#[test]
fn navigation_starts_on_default_route() {
    let nav = NavigationController::new(&DashboardConfig::default());
    assert_eq!(nav.location(), "/transcriber");
    assert_eq!(nav.active_view(), Some(FeatureView::Transcriber));

    let view = nav.view();
    assert_eq!(view.title, "Transcriber");
    let active: Vec<_> = view
        .menu
        .iter()
        .filter(|item| item.active)
        .map(|item| item.route_path.as_str())
        .collect();
    assert_eq!(active, vec!["/transcriber"]);
}

#[test]
fn root_and_unknown_paths_redirect_to_default() {
    let mut nav = NavigationController::new(&DashboardConfig::default());
    assert!(nav.navigate("/reddit-scraper"));
    assert_eq!(nav.view().title, "Reddit Scraper");

    assert!(nav.navigate("/"));
    assert_eq!(nav.location(), "/transcriber");

    assert!(nav.navigate("/reddit-scraper"));
    assert!(nav.navigate("/does-not-exist"));
    assert_eq!(nav.location(), "/transcriber");

    assert!(!nav.navigate("/transcriber"));
}

#[test]
fn custom_menu_uses_list_order_for_highlight() {
    let config = DashboardConfig {
        menu: NESTED,
        ..DashboardConfig::default()
    };
    let mut nav = NavigationController::new(&config);
    nav.navigate("/transcriber/detail");

    let view = nav.view();
    assert_eq!(view.location, "/transcriber/detail");
    assert_eq!(view.title, "Transcriber");
    assert!(view.menu[0].active);
    assert!(!view.menu[1].active);
}
