//! Typed section records and the shallow-guard accessors over the raw
//! document.

use anyhow::Error;
use serde::Deserialize;
use serde_json::Value;

/// One entry in the experience timeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub period: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Presentation {
    pub date: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Award {
    pub name: Option<String>,
    pub year: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Membership {
    pub organization: Option<String>,
    pub role: Option<String>,
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaMention {
    pub date: Option<String>,
    pub outlet: Option<String>,
    pub title: Option<String>,
}

/// The fetched profile document.
///
/// Wraps the raw JSON value; every accessor re-decodes only its own subtree.
#[derive(Debug, Clone)]
pub struct ProfileDoc {
    raw: Value,
}

impl ProfileDoc {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Decode a profile from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a JSON document at all. Shape
    /// problems inside individual sections are not errors; they surface as
    /// `None` from the section accessors.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            raw: serde_json::from_slice(bytes)?,
        })
    }

    pub fn summary(&self) -> Option<&str> {
        self.raw.get("summary").and_then(Value::as_str)
    }

    pub fn experience(&self) -> Option<Vec<Experience>> {
        self.section("experience")
    }

    pub fn education(&self) -> Option<Vec<Education>> {
        self.section("education")
    }

    pub fn contact(&self) -> Option<Contact> {
        let value = self.raw.get("contact")?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn presentations(&self) -> Option<Vec<Presentation>> {
        self.section("presentations")
    }

    pub fn awards(&self) -> Option<Vec<Award>> {
        self.section("awards")
    }

    pub fn memberships(&self) -> Option<Vec<Membership>> {
        self.section("memberships")
    }

    pub fn skills(&self) -> Option<Vec<String>> {
        self.section("skills")
    }

    pub fn certifications(&self) -> Option<Vec<Certification>> {
        self.section("certifications")
    }

    pub fn media(&self) -> Option<Vec<MediaMention>> {
        self.section("media")
    }

    /// Shallow guard: the section must exist, be an array, and decode as a
    /// sequence of `T`. Anything else reads as "no data".
    fn section<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let value = self.raw.get(key)?;
        if !value.is_array() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
