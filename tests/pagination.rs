use pl_pagination::domain::types::{PageNumber, QueryParameters};
use pl_pagination::errors::PaginationError;
use pl_pagination::links::{RequestContext, build_url, parse_query_parameters};
use pl_pagination::pagination::{
    PaginationItem, render, render_for_request, resolve_current_page,
};

const BASE: &str = "http://example.com/list";

fn page(n: usize) -> PageNumber {
    PageNumber::new(n).unwrap()
}

fn url(query: &str) -> String {
    format!("{BASE}?{query}")
}

fn page_link(n: usize) -> PaginationItem {
    PaginationItem::PageLink {
        number: page(n),
        url: url(&format!("page={n}")),
    }
}

#[test]
fn test_single_page_renders_only_current() {
    let view = render(BASE, page(1), page(1), &QueryParameters::new()).unwrap();

    assert_eq!(view.items(), &[PaginationItem::Current { number: page(1) }]);
}

#[test]
fn test_first_of_five() {
    let view = render(BASE, page(1), page(5), &QueryParameters::new()).unwrap();

    assert_eq!(
        view.items(),
        &[
            PaginationItem::Current { number: page(1) },
            page_link(2),
            page_link(3),
            PaginationItem::Ellipsis {
                label: "...5".to_string(),
                url: url("page=5"),
            },
            PaginationItem::NextButton {
                url: url("page=2"),
            },
        ]
    );
}

#[test]
fn test_last_of_five() {
    let view = render(BASE, page(5), page(5), &QueryParameters::new()).unwrap();

    assert_eq!(
        view.items(),
        &[
            PaginationItem::PrevButton {
                url: url("page=4"),
            },
            page_link(3),
            PaginationItem::Ellipsis {
                label: "1...".to_string(),
                url: url("page=1"),
            },
            page_link(4),
            PaginationItem::Current { number: page(5) },
        ]
    );
}

#[test]
fn test_window_touching_both_edges_has_no_ellipsis() {
    let view = render(BASE, page(3), page(5), &QueryParameters::new()).unwrap();

    assert_eq!(
        view.items(),
        &[
            PaginationItem::PrevButton {
                url: url("page=2"),
            },
            page_link(1),
            page_link(2),
            PaginationItem::Current { number: page(3) },
            page_link(4),
            page_link(5),
            PaginationItem::NextButton {
                url: url("page=4"),
            },
        ]
    );
}

#[test]
fn test_second_page_has_no_second_previous() {
    let view = render(BASE, page(2), page(2), &QueryParameters::new()).unwrap();

    assert_eq!(
        view.items(),
        &[
            PaginationItem::PrevButton {
                url: url("page=1"),
            },
            page_link(1),
            PaginationItem::Current { number: page(2) },
        ]
    );
}

#[test]
fn test_links_preserve_other_parameters() {
    let params: QueryParameters = [("filter", "x")].into_iter().collect();

    let view = render(BASE, page(3), page(10), &params).unwrap();

    for item in view.items() {
        let link = match item {
            PaginationItem::PrevButton { url }
            | PaginationItem::NextButton { url }
            | PaginationItem::PageLink { url, .. }
            | PaginationItem::Ellipsis { url, .. } => url,
            PaginationItem::Current { .. } => continue,
        };
        let parsed = parse_query_parameters(link);
        assert_eq!(parsed.get("filter"), Some("x"), "{link}");
        assert!(parsed.get("page").is_some(), "{link}");
    }
    assert!(view.items().contains(&PaginationItem::Ellipsis {
        label: "...10".to_string(),
        url: url("filter=x&page=10"),
    }));
}

#[test]
fn test_rendering_is_repeatable() {
    let params: QueryParameters = [("q", "rust"), ("page", "4")].into_iter().collect();

    let first = render(BASE, page(4), page(8), &params).unwrap();
    let second = render(BASE, page(4), page(8), &params).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_window_is_bounded_on_each_side() {
    for total in 1..=15 {
        for current in 1..=total {
            let view = render(BASE, page(current), page(total), &QueryParameters::new()).unwrap();
            let items = view.items();
            let current_at = items
                .iter()
                .position(|item| matches!(item, PaginationItem::Current { .. }))
                .unwrap();

            let before = items[..current_at].iter().filter(|i| i.is_page_entry()).count();
            let after = items[current_at + 1..].iter().filter(|i| i.is_page_entry()).count();

            assert!(before <= 3, "{current}/{total}");
            assert!(after <= 3, "{current}/{total}");
            assert!(view.page_entries() <= 6);
            assert!(view.len() <= 9);
        }
    }
}

#[test]
fn test_page_beyond_total_is_rejected() {
    let result = render(BASE, page(11), page(10), &QueryParameters::new());

    assert!(matches!(result, Err(PaginationError::InvalidInput(_))));
}

#[test]
fn test_build_url_round_trips_page() {
    let link = build_url(BASE, &QueryParameters::new(), page(7));

    let parsed = parse_query_parameters(&link);

    assert_eq!(parsed.iter().collect::<Vec<_>>(), vec![("page", "7")]);
}

#[test]
fn test_resolve_current_page() {
    assert_eq!(
        resolve_current_page(&QueryParameters::new()),
        Ok(PageNumber::FIRST)
    );
    assert_eq!(
        resolve_current_page(&parse_query_parameters("/?page=4")),
        Ok(page(4))
    );
    assert!(matches!(
        resolve_current_page(&parse_query_parameters("/?page=four")),
        Err(PaginationError::InvalidInput(_))
    ));
    assert!(matches!(
        resolve_current_page(&parse_query_parameters("/?page=0")),
        Err(PaginationError::InvalidInput(_))
    ));
}

#[test]
fn test_render_for_request_uses_request_page() {
    let ctx = RequestContext::from_url("https://shop.test/catalog?sort=price&page=2");

    let view = render_for_request(&ctx, page(3)).unwrap();

    assert_eq!(
        view.items().first(),
        Some(&PaginationItem::PrevButton {
            url: "https://shop.test/catalog?sort=price&page=1".to_string(),
        })
    );
    assert_eq!(
        view.items().last(),
        Some(&PaginationItem::NextButton {
            url: "https://shop.test/catalog?sort=price&page=3".to_string(),
        })
    );
}
