//! Core tree operations: parsing, text, attributes, class lists.

use dom::Dom;

const PAGE: &str = r##"
<!DOCTYPE html>
<html>
<body>
    <nav class="nav-links open"><a href="#about">About</a></nav>
    <section id="about"><p>Hello <b>there</b></p></section>
    <footer><span id="year"></span></footer>
</body>
</html>
"##;

#[test]
fn parse_builds_element_tree() {
    let dom = Dom::parse(PAGE);
    let section = dom.element_by_id("about").expect("section parsed");
    assert_eq!(dom.tag(section), Some("section"));
    assert_eq!(dom.attr(section, "id"), Some("about"));
}

#[test]
fn text_content_concatenates_descendants() {
    let dom = Dom::parse(PAGE);
    let section = dom.element_by_id("about").expect("section parsed");
    assert_eq!(dom.text_content(section), "Hello there");
}

#[test]
fn set_text_replaces_children() {
    let mut dom = Dom::parse(PAGE);
    let section = dom.element_by_id("about").expect("section parsed");
    dom.set_text(section, "replaced");
    assert_eq!(dom.text_content(section), "replaced");
    assert_eq!(dom.children(section).count(), 1);
}

#[test]
fn class_list_operations() {
    let mut dom = Dom::parse(PAGE);
    let nav = dom.select_first(".nav-links").unwrap().expect("nav parsed");

    assert!(dom.has_class(nav, "open"));
    dom.remove_class(nav, "open");
    assert!(!dom.has_class(nav, "open"));
    assert!(dom.has_class(nav, "nav-links"));

    assert!(dom.toggle_class(nav, "open"));
    assert!(!dom.toggle_class(nav, "open"));
    assert!(!dom.has_class(nav, "open"));

    // Adding twice keeps the attribute duplicate-free.
    dom.add_class(nav, "open");
    dom.add_class(nav, "open");
    assert_eq!(dom.attr(nav, "class"), Some("nav-links open"));
}

#[test]
fn created_elements_join_the_tree() {
    let mut dom = Dom::parse(PAGE);
    let section = dom.element_by_id("about").expect("section parsed");
    dom.clear_children(section);

    let div = dom.create_element("div");
    dom.set_attr(div, "class", "timeline-item reveal");
    let text = dom.create_text("entry");
    dom.append_child(div, text);
    dom.append_child(section, div);

    assert_eq!(dom.text_content(section), "entry");
    assert!(dom.has_class(div, "reveal"));
    assert_eq!(dom.parent(div), Some(section));
}

#[test]
fn attributes_on_text_nodes_are_ignored() {
    let mut dom = Dom::new();
    let text = dom.create_text("plain");
    dom.set_attr(text, "id", "nope");
    assert_eq!(dom.attr(text, "id"), None);
}

#[test]
fn json_snapshot_is_deterministic() {
    let dom = Dom::parse("<body><div b=\"2\" a=\"1\">x</div></body>");
    let snapshot = dom.to_json_string();
    // Attributes sorted by name regardless of source order.
    let a_pos = snapshot.find("\"a\": \"1\"").expect("attr a present");
    let b_pos = snapshot.find("\"b\": \"2\"").expect("attr b present");
    assert!(a_pos < b_pos);
}
