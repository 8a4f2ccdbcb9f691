//! Display-line formatting rules for the CV sections.
//!
//! Every rule is a plain join with fixed separators; missing text fields read
//! as empty strings, and optional suffixes are dropped when their field is
//! absent or empty.

use crate::model::{
    Award, Certification, Education, Experience, MediaMention, Membership, Presentation,
};
use serde_json::Value;

/// `period`, `title`, `location` joined by `" · "`, skipping empties.
pub fn experience_meta(item: &Experience) -> String {
    [&item.period, &item.title, &item.location]
        .into_iter()
        .filter_map(|field| non_empty(field.as_deref()))
        .collect::<Vec<_>>()
        .join(" · ")
}

/// `"<degree> in <field> — <institution>"`; the `" in <field>"` joint
/// collapses when degree or field is empty.
pub fn education_line(item: &Education) -> String {
    let qualification = [&item.degree, &item.field]
        .into_iter()
        .filter_map(|field| non_empty(field.as_deref()))
        .collect::<Vec<_>>()
        .join(" in ");
    format!("{qualification} — {}", text(&item.institution))
}

/// Strip everything that cannot be dialed, keeping digits and `+`.
pub fn dial_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// `"<date> — <organization>: <title>"`.
pub fn presentation_line(item: &Presentation) -> String {
    format!(
        "{} — {}: {}",
        text(&item.date),
        text(&item.organization),
        text(&item.title)
    )
}

/// `"<name>"` plus `" — <year>"` when the year is present.
pub fn award_line(item: &Award) -> String {
    let mut line = text(&item.name).to_owned();
    if let Some(year) = item.year.as_ref().and_then(scalar_text) {
        line.push_str(" — ");
        line.push_str(&year);
    }
    line
}

/// `"<organization> — <role>"` plus `" (<period>)"` when the period is
/// present.
pub fn membership_line(item: &Membership) -> String {
    let mut line = format!("{} — {}", text(&item.organization), text(&item.role));
    if let Some(period) = non_empty(item.period.as_deref()) {
        line.push_str(" (");
        line.push_str(period);
        line.push(')');
    }
    line
}

/// `"<name>"` plus `" — <date>"` when the date is present.
pub fn certification_line(item: &Certification) -> String {
    let mut line = text(&item.name).to_owned();
    if let Some(date) = non_empty(item.date.as_deref()) {
        line.push_str(" — ");
        line.push_str(date);
    }
    line
}

/// `"<date> — <outlet>: <title>"`.
pub fn media_line(item: &MediaMention) -> String {
    format!(
        "{} — {}: {}",
        text(&item.date),
        text(&item.outlet),
        text(&item.title)
    )
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

/// Years arrive as numbers or strings in the wild; both print bare.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn experience_meta_joins_and_skips_empties() {
        let item = Experience {
            period: Some("2020–2023".into()),
            title: Some("Researcher".into()),
            location: Some("Tartu".into()),
            ..Experience::default()
        };
        assert_eq!(experience_meta(&item), "2020–2023 · Researcher · Tartu");

        let sparse = Experience {
            period: Some("2019".into()),
            title: None,
            location: Some(String::new()),
            ..Experience::default()
        };
        assert_eq!(experience_meta(&sparse), "2019");
    }

    #[test]
    fn education_line_with_and_without_field() {
        let full = Education {
            degree: Some("MSc".into()),
            field: Some("CS".into()),
            institution: Some("X".into()),
        };
        assert_eq!(education_line(&full), "MSc in CS — X");

        let degree_only = Education {
            degree: Some("PhD".into()),
            field: None,
            institution: Some("Y".into()),
        };
        assert_eq!(education_line(&degree_only), "PhD — Y");

        let field_only = Education {
            degree: None,
            field: Some("Physics".into()),
            institution: Some("Z".into()),
        };
        assert_eq!(education_line(&field_only), "Physics — Z");
    }

    #[test]
    fn dial_href_strips_formatting() {
        assert_eq!(dial_href("+372 5555 1234"), "tel:+37255551234");
        assert_eq!(dial_href("(555) 010-2030"), "tel:5550102030");
    }

    #[test]
    fn presentation_line_format() {
        let item = Presentation {
            date: Some("2022".into()),
            organization: Some("RustConf".into()),
            title: Some("Arenas".into()),
        };
        assert_eq!(presentation_line(&item), "2022 — RustConf: Arenas");
    }

    #[test]
    fn award_line_with_and_without_year() {
        let with_year: Award = serde_json::from_value(json!({
            "name": "Best Paper", "year": 2021
        }))
        .unwrap();
        assert_eq!(award_line(&with_year), "Best Paper — 2021");

        let bare: Award = serde_json::from_value(json!({ "name": "Medal" })).unwrap();
        assert_eq!(award_line(&bare), "Medal");
    }

    #[test]
    fn membership_line_with_and_without_period() {
        let full = Membership {
            organization: Some("ACM".into()),
            role: Some("Member".into()),
            period: Some("2018–".into()),
        };
        assert_eq!(membership_line(&full), "ACM — Member (2018–)");

        let bare = Membership {
            organization: Some("IEEE".into()),
            role: Some("Fellow".into()),
            period: None,
        };
        assert_eq!(membership_line(&bare), "IEEE — Fellow");
    }

    #[test]
    fn certification_line_with_and_without_date() {
        let full = Certification {
            name: Some("First Aid".into()),
            date: Some("2020".into()),
        };
        assert_eq!(certification_line(&full), "First Aid — 2020");

        let bare = Certification {
            name: Some("Sailing".into()),
            date: None,
        };
        assert_eq!(certification_line(&bare), "Sailing");
    }

    #[test]
    fn media_line_format() {
        let item = MediaMention {
            date: Some("2023-05".into()),
            outlet: Some("Daily".into()),
            title: Some("Profile".into()),
        };
        assert_eq!(media_line(&item), "2023-05 — Daily: Profile");
    }
}
