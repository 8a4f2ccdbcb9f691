//! Shared fixture: a small portfolio page with the containers the enhancer
//! targets, plus canonical section geometry.
#![allow(dead_code)]

use enhancer::config::EnhanceConfig;
use enhancer::geometry::LayoutRect;
use enhancer::Page;
use url::Url;

pub const PAGE: &str = r##"
<!DOCTYPE html>
<html>
<body>
    <header>
        <button class="burger"><span>menu</span></button>
        <nav class="nav-links">
            <a href="#home">Home</a>
            <a href="#experience">Experience</a>
            <a href="#contact">Contact</a>
        </nav>
    </header>
    <main>
        <section id="home" class="reveal">
            <p id="summary">Static summary</p>
        </section>
        <section id="experience">
            <div id="experience-list">
                <div class="timeline-item">static entry</div>
            </div>
        </section>
        <section id="contact">
            <a id="contact-email-link" href="mailto:placeholder@example.org">Email</a>
            <span id="contact-location">Nowhere</span>
            <span id="contact-phone">no phone listed</span>
        </section>
        <a id="dead-link" href="#nowhere">gone section</a>
    </main>
    <aside>
        <p id="cv-summary">Static CV summary</p>
        <div id="cv-experience-list"></div>
        <ul id="cv-education-list"><li>static education</li></ul>
        <ul id="cv-presentations"></ul>
        <ul id="cv-awards"></ul>
        <ul id="cv-memberships"></ul>
        <ul id="cv-skills"></ul>
        <ul id="cv-certifications"></ul>
        <ul id="cv-media"></ul>
    </aside>
    <footer><span id="year"></span></footer>
</body>
</html>
"##;

pub fn page() -> Page {
    let url = Url::parse("file:///site/index.html").unwrap();
    Page::from_html(PAGE, url, EnhanceConfig::default())
}

/// Page with behaviors installed and the three sections laid out as
/// contiguous 200px bands starting at y=250.
pub fn enhanced_page() -> Page {
    let mut page = page();
    page.enhance().expect("enhancer installs");
    for (section_id, top) in [("home", 250.0), ("experience", 450.0), ("contact", 650.0)] {
        let node = page.dom().element_by_id(section_id).unwrap();
        page.set_rect(node, LayoutRect::new(top, 200.0));
    }
    page
}

/// Ids of the nav entries currently marked active.
pub fn active_hrefs(page: &Page) -> Vec<String> {
    page.dom()
        .select_all(".nav-links a.active")
        .unwrap()
        .into_iter()
        .filter_map(|node| page.dom().attr(node, "href").map(ToOwned::to_owned))
        .collect()
}
