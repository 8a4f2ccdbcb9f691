//! Data population: fetch the profile document and render the CV sections.
//!
//! Every section renders independently and defensively: a missing container
//! or missing/malformed data leaves that section's static markup intact, and
//! any fetch or decode failure leaves the whole page untouched.

use crate::page::Page;
use crate::url::fetch_bytes;
use anyhow::Error;
use dom::NodeId;
use log::debug;
use profile::{
    Experience, ProfileDoc, award_line, certification_line, dial_href, education_line,
    experience_meta, media_line, membership_line, presentation_line,
};
use url::Url;

impl Page {
    /// Fetch the profile document relative to the page URL and apply it.
    ///
    /// A single attempt, no retry, no timeout; every failure is swallowed so
    /// the static fallback content stays visible.
    pub async fn populate_from_data(&mut self) {
        let data_path = self.config().data_path.clone();
        let data_url = match self.url().join(&data_path) {
            Ok(data_url) => data_url,
            Err(err) => {
                debug!("profile path {data_path:?} did not resolve: {err}");
                return;
            }
        };
        match fetch_profile(&data_url).await {
            Ok(doc) => self.apply_profile(&doc),
            Err(err) => {
                debug!("profile fetch skipped, keeping static content: {err}");
            }
        }
    }

    /// Render every profile section that has data and a container.
    pub fn apply_profile(&mut self, doc: &ProfileDoc) {
        self.render_summary(doc);
        self.render_experience("experience-list", doc.experience());
        self.render_experience("cv-experience-list", doc.experience());
        self.render_education(doc);
        self.render_contact(doc);
        self.render_lines("cv-presentations", doc.presentations(), presentation_line);
        self.render_lines("cv-awards", doc.awards(), award_line);
        self.render_lines("cv-memberships", doc.memberships(), membership_line);
        self.render_lines("cv-skills", doc.skills(), Clone::clone);
        self.render_lines("cv-certifications", doc.certifications(), certification_line);
        self.render_lines("cv-media", doc.media(), media_line);
    }

    fn render_summary(&mut self, doc: &ProfileDoc) {
        let Some(summary) = doc.summary().map(ToOwned::to_owned) else {
            return;
        };
        for container_id in ["summary", "cv-summary"] {
            if let Some(container) = self.dom().element_by_id(container_id) {
                self.dom_mut().set_text(container, &summary);
            }
        }
    }

    /// Render timeline entries into a container and register each with the
    /// reveal observer.
    fn render_experience(&mut self, container_id: &str, items: Option<Vec<Experience>>) {
        let Some(container) = self.dom().element_by_id(container_id) else {
            return;
        };
        let Some(items) = items else {
            return;
        };
        self.dom_mut().clear_children(container);

        let mut created = Vec::new();
        for item in &items {
            let entry = self.build_experience_entry(item);
            self.dom_mut().append_child(container, entry);
            created.push(entry);
        }
        for entry in created {
            self.observe_reveal(entry);
        }
    }

    fn build_experience_entry(&mut self, item: &Experience) -> NodeId {
        let dom = self.dom_mut();
        let entry = dom.create_element("div");
        dom.set_attr(entry, "class", "timeline-item reveal");

        let meta = dom.create_element("div");
        dom.set_attr(meta, "class", "meta");
        dom.set_text(meta, &experience_meta(item));
        dom.append_child(entry, meta);

        let heading = dom.create_element("h3");
        dom.set_text(heading, item.company.as_deref().unwrap_or_default());
        dom.append_child(entry, heading);

        // Bulleted entries render a list; the rest fall back to a paragraph.
        if let Some(bullets) = &item.bullets {
            let list = dom.create_element("ul");
            for bullet in bullets {
                let li = dom.create_element("li");
                dom.set_text(li, bullet);
                dom.append_child(list, li);
            }
            dom.append_child(entry, list);
        } else {
            let para = dom.create_element("p");
            dom.set_text(para, item.description.as_deref().unwrap_or_default());
            dom.append_child(entry, para);
        }
        entry
    }

    fn render_education(&mut self, doc: &ProfileDoc) {
        let lines = doc
            .education()
            .map(|items| items.iter().map(education_line).collect::<Vec<_>>());
        self.render_lines("cv-education-list", lines, Clone::clone);
    }

    fn render_contact(&mut self, doc: &ProfileDoc) {
        let Some(contact) = doc.contact() else {
            return;
        };
        if let Some(email) = &contact.email
            && let Some(link) = self.dom().element_by_id("contact-email-link")
        {
            self.dom_mut().set_attr(link, "href", &format!("mailto:{email}"));
        }
        if let Some(location) = &contact.location
            && let Some(container) = self.dom().element_by_id("contact-location")
        {
            self.dom_mut().set_text(container, location);
        }
        if let Some(phone) = &contact.phone
            && let Some(container) = self.dom().element_by_id("contact-phone")
        {
            let dom = self.dom_mut();
            dom.clear_children(container);
            let link = dom.create_element("a");
            dom.set_attr(link, "href", &dial_href(phone));
            dom.set_text(link, phone);
            dom.append_child(container, link);
        }
    }

    /// Replace a list container's children with one `<li>` per formatted
    /// item.
    fn render_lines<T>(
        &mut self,
        container_id: &str,
        items: Option<Vec<T>>,
        format: impl Fn(&T) -> String,
    ) {
        let Some(container) = self.dom().element_by_id(container_id) else {
            return;
        };
        let Some(items) = items else {
            return;
        };
        let dom = self.dom_mut();
        dom.clear_children(container);
        for item in &items {
            let li = dom.create_element("li");
            dom.set_text(li, &format(item));
            dom.append_child(container, li);
        }
    }
}

async fn fetch_profile(url: &Url) -> Result<ProfileDoc, Error> {
    let bytes = fetch_bytes(url).await?;
    ProfileDoc::from_slice(&bytes)
}
