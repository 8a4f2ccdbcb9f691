//! Navigation, scrolling, scrollspy and reveal behavior tests.

mod common;

use chrono::Datelike;
use common::{active_hrefs, enhanced_page, page};
use enhancer::geometry::LayoutRect;
use enhancer::viewport::{ScrollBehavior, ScrollRequest};

#[test]
fn burger_click_toggles_nav_overlay() {
    let mut page = enhanced_page();
    let nav = page.dom().select_first(".nav-links").unwrap().unwrap();

    assert!(!page.dom().has_class(nav, "open"));
    page.click(".burger").unwrap();
    assert!(page.dom().has_class(nav, "open"));
    page.click(".burger").unwrap();
    assert!(!page.dom().has_class(nav, "open"));
}

#[test]
fn burger_click_bubbles_from_descendants() {
    let mut page = enhanced_page();
    let nav = page.dom().select_first(".nav-links").unwrap().unwrap();

    // The click lands on the span inside the button.
    page.click(".burger span").unwrap();
    assert!(page.dom().has_class(nav, "open"));
}

#[test]
fn anchor_click_scrolls_smoothly_and_closes_overlay() {
    let mut page = enhanced_page();
    let nav = page.dom().select_first(".nav-links").unwrap().unwrap();

    page.click(".burger").unwrap();
    assert!(page.dom().has_class(nav, "open"));

    page.click(".nav-links a[href=\"#experience\"]").unwrap();

    assert_eq!(
        page.viewport().last_request(),
        Some(ScrollRequest {
            top: 450.0,
            behavior: ScrollBehavior::Smooth,
        })
    );
    assert_eq!(page.viewport().scroll_y(), 450.0);
    assert!(!page.dom().has_class(nav, "open"));
    assert!(page.navigations().is_empty());
}

#[test]
fn anchor_without_target_navigates_instead() {
    let mut page = enhanced_page();
    page.click("#dead-link").unwrap();

    assert_eq!(page.navigations(), ["#nowhere"]);
    assert_eq!(page.viewport().last_request(), None);
}

#[test]
fn clicks_do_nothing_before_enhance() {
    let mut page = page();
    let nav = page.dom().select_first(".nav-links").unwrap().unwrap();
    page.click(".burger").unwrap();
    assert!(!page.dom().has_class(nav, "open"));
}

#[test]
fn scrollspy_marks_exactly_one_entry_active() {
    let mut page = enhanced_page();

    // Scrollspy band with the default tuning sits at [scroll+320, scroll+400].
    page.scroll_to(0.0);
    assert_eq!(active_hrefs(&page), ["#home"]);

    page.scroll_to(200.0);
    assert_eq!(active_hrefs(&page), ["#experience"]);

    page.scroll_to(400.0);
    assert_eq!(active_hrefs(&page), ["#contact"]);
}

#[test]
fn scrollspy_keeps_previous_entry_when_nothing_intersects() {
    let mut page = enhanced_page();
    page.scroll_to(200.0);
    assert_eq!(active_hrefs(&page), ["#experience"]);

    // Scroll far past every section: no new entry intersects, the last
    // active one stays.
    page.scroll_to(5000.0);
    assert_eq!(active_hrefs(&page), ["#experience"]);
}

#[test]
fn reveal_adds_class_on_first_intersection() {
    let mut page = enhanced_page();
    let home = page.dom().element_by_id("home").unwrap();

    assert!(!page.dom().has_class(home, "in"));
    page.scroll_to(0.0);
    assert!(page.dom().has_class(home, "in"));
}

#[test]
fn reveal_is_one_shot() {
    let mut page = enhanced_page();
    let home = page.dom().element_by_id("home").unwrap();

    page.scroll_to(0.0);
    assert!(page.dom().has_class(home, "in"));

    // Strip the class by hand, leave and re-enter: the observer no longer
    // watches the node, so the transition never re-fires.
    page.dom_mut().remove_class(home, "in");
    page.scroll_to(5000.0);
    page.scroll_to(0.0);
    assert!(!page.dom().has_class(home, "in"));
}

#[test]
fn year_is_stamped_on_enhance() {
    let page = enhanced_page();
    let year_el = page.dom().element_by_id("year").unwrap();
    let expected = chrono::Local::now().year().to_string();
    assert_eq!(page.dom().text_content(year_el), expected);
}

#[test]
fn missing_targets_disable_only_their_behavior() {
    let mut page = enhancer::Page::from_html(
        "<body><section id=\"solo\"><a href=\"#solo\">self</a></section></body>",
        url::Url::parse("file:///site/index.html").unwrap(),
        enhancer::EnhanceConfig::default(),
    );
    // No burger, no nav, no year element: installs cleanly anyway.
    page.enhance().unwrap();

    let section = page.dom().element_by_id("solo").unwrap();
    page.set_rect(section, LayoutRect::new(100.0, 50.0));
    page.click("a[href=\"#solo\"]").unwrap();
    assert_eq!(page.viewport().scroll_y(), 100.0);
}
