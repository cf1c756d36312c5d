use fontsnip::browse_panel::{BrowsePanel, PanelReply, PanelRequest};
use fontsnip::catalog::FontFamily;

fn catalog(n: usize) -> Vec<FontFamily> {
    (0..n)
        .map(|i| FontFamily::named(format!("Font {i:04}")).with_variants(["regular"]))
        .collect()
}

fn drain_pages(panel: &mut BrowsePanel) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    loop {
        match panel.handle(PanelRequest::Scroll) {
            PanelReply::AddContent { entries, .. } => {
                pages.push(entries.into_iter().map(|e| e.family).collect());
            }
            PanelReply::None => return pages,
            other => panic!("unexpected reply {other:?}"),
        }
    }
}

#[test]
fn test_page_count_is_ceil_n_over_page_size() {
    // 7 records at page size 3 → ceil(7/3) = 3 pages.
    let mut panel = BrowsePanel::new(catalog(7), 3);
    let pages = drain_pages(&mut panel);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].len(), 3);
    assert_eq!(pages[1].len(), 3);
    assert_eq!(pages[2].len(), 1);
}

#[test]
fn test_exact_multiple_has_no_empty_trailing_page() {
    let mut panel = BrowsePanel::new(catalog(100), 50);
    let pages = drain_pages(&mut panel);
    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|p| p.len() == 50));
}

#[test]
fn test_no_omission_no_duplication() {
    let mut panel = BrowsePanel::new(catalog(123), 50);
    let mut seen: Vec<String> = drain_pages(&mut panel).into_iter().flatten().collect();
    assert_eq!(seen.len(), 123);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 123);
}

#[test]
fn test_single_record_catalog() {
    let mut panel = BrowsePanel::new(catalog(1), 50);
    let pages = drain_pages(&mut panel);
    assert_eq!(pages, vec![vec!["Font 0000".to_string()]]);
}

#[test]
fn test_empty_catalog_yields_no_pages() {
    let mut panel = BrowsePanel::new(Vec::new(), 50);
    assert!(panel.is_empty());
    assert!(drain_pages(&mut panel).is_empty());
}

#[test]
fn test_search_does_not_refetch_or_page() {
    let mut panel = BrowsePanel::new(catalog(200), 50);
    panel.handle(PanelRequest::Scroll);

    // A search returns every match in one reply, loaded or not.
    let PanelReply::SearchResults { entries } = panel.handle(PanelRequest::Search {
        query: "font 01".to_string(),
    }) else {
        panic!("expected search results");
    };
    // "Font 0100" .. "Font 0199" plus "Font 0010" .. "Font 0019".
    assert_eq!(entries.len(), 110);
}

#[test]
fn test_search_prefix_semantics_across_case() {
    let families = vec![
        FontFamily::named("Open Sans"),
        FontFamily::named("OPEN SANS CONDENSED"),
        FontFamily::named("Oswald"),
    ];
    let mut panel = BrowsePanel::new(families, 50);
    let PanelReply::SearchResults { entries } = panel.handle(PanelRequest::Search {
        query: "open".to_string(),
    }) else {
        panic!("expected search results");
    };
    let names: Vec<_> = entries.iter().map(|e| e.family.as_str()).collect();
    assert_eq!(names, vec!["Open Sans", "OPEN SANS CONDENSED"]);
}

#[test]
fn test_entries_carry_both_snippets() {
    let mut panel = BrowsePanel::new(vec![FontFamily::named("Open Sans")], 50);
    let PanelReply::AddContent { entries, css } = panel.handle(PanelRequest::Scroll) else {
        panic!("expected a page");
    };
    assert_eq!(entries.len(), 1);
    assert!(entries[0].import_snippet.starts_with("@import url("));
    assert!(entries[0].link_snippet.starts_with("<link href="));
    assert_eq!(css, format!("{}\n", entries[0].import_snippet));
}
