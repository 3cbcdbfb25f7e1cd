/// Title used when the location matches no menu entry.
pub const FALLBACK_TITLE: &str = "Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub route_path: &'static str,
    pub label: &'static str,
    pub icon_token: &'static str,
}

/// Sidebar entries in display order. Order also breaks prefix-match ties.
pub const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        route_path: "/transcriber",
        label: "Transcriber",
        icon_token: "youtube",
    },
    MenuEntry {
        route_path: "/reddit-scraper",
        label: "Reddit Scraper",
        icon_token: "reddit",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRouteResolution<'a> {
    pub matched: Option<&'a MenuEntry>,
    pub title: &'a str,
}

/// First entry in list order whose `route_path` is a prefix of `path`.
///
/// This is plain string prefixing, so `/transcriber` also claims
/// `/transcriberx`, and a shorter entry listed first beats a longer one.
pub fn resolve<'a>(path: &str, entries: &'a [MenuEntry]) -> ActiveRouteResolution<'a> {
    let matched = entries
        .iter()
        .find(|entry| path.starts_with(entry.route_path));
    ActiveRouteResolution {
        matched,
        title: matched.map_or(FALLBACK_TITLE, |entry| entry.label),
    }
}
