//! Minimal CSS selector engine covering the queries the enhancer issues.
//!
//! Supported: type selectors, `#id`, `.class`, `[attr]`, `[attr=value]`,
//! `[attr^=value]`, compounds of those, and the descendant combinator.
//! Anything else is an error at parse time rather than a silent miss.

use crate::{Dom, NodeId, NodeKind};
use anyhow::{Error, anyhow, bail};

/// A parsed selector: a chain of compound selectors joined by descendant
/// combinators.
#[derive(Debug, Clone)]
pub struct Selector {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatcher>,
}

#[derive(Debug, Clone)]
struct AttrMatcher {
    name: String,
    op: AttrOp,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals,
    Prefix,
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error for empty selectors or syntax outside the supported
    /// subset (combinators other than descendant, pseudo-classes, attribute
    /// operators other than `=` and `^=`).
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut compounds = Vec::new();
        for part in input.split_whitespace() {
            compounds.push(Compound::parse(part)?);
        }
        if compounds.is_empty() {
            bail!("empty selector");
        }
        Ok(Self { compounds })
    }

    fn matches_at(&self, dom: &Dom, node: NodeId) -> bool {
        let last = self.compounds.len() - 1;
        if !self.compounds[last].matches(dom, node) {
            return false;
        }
        // Walk the remaining compounds up the ancestor chain, nearest match
        // first. Greedy matching is exact for descendant-only chains.
        let mut current = node;
        for compound in self.compounds[..last].iter().rev() {
            let Some(anc) = dom
                .ancestors(current)
                .skip(1)
                .find(|anc| compound.matches(dom, *anc))
            else {
                return false;
            };
            current = anc;
        }
        true
    }
}

impl Compound {
    fn parse(part: &str) -> Result<Self, Error> {
        let mut compound = Self::default();
        let mut chars = part.chars().peekable();

        let tag = read_ident(&mut chars);
        if !tag.is_empty() {
            compound.tag = Some(tag);
        }

        while let Some(marker) = chars.next() {
            match marker {
                '#' => {
                    let ident = read_ident(&mut chars);
                    if ident.is_empty() {
                        bail!("empty id selector in {part:?}");
                    }
                    compound.id = Some(ident);
                }
                '.' => {
                    let ident = read_ident(&mut chars);
                    if ident.is_empty() {
                        bail!("empty class selector in {part:?}");
                    }
                    compound.classes.push(ident);
                }
                '[' => {
                    let mut body = String::new();
                    loop {
                        match chars.next() {
                            Some(']') => break,
                            Some(ch) => body.push(ch),
                            None => bail!("unterminated attribute selector in {part:?}"),
                        }
                    }
                    compound.attrs.push(AttrMatcher::parse(&body)?);
                }
                other => {
                    return Err(anyhow!("unsupported selector syntax {other:?} in {part:?}"));
                }
            }
        }

        if compound.tag.is_none()
            && compound.id.is_none()
            && compound.classes.is_empty()
            && compound.attrs.is_empty()
        {
            bail!("empty compound selector in {part:?}");
        }
        Ok(compound)
    }

    fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        let Some(data) = dom.node(node) else {
            return false;
        };
        let NodeKind::Element { tag } = &data.kind else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|t| t != tag.as_str()) {
            return false;
        }
        if let Some(id) = &self.id
            && dom.attr(node, "id") != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|class| dom.has_class(node, class)) {
            return false;
        }
        self.attrs.iter().all(|matcher| matcher.matches(dom, node))
    }
}

impl AttrMatcher {
    fn parse(body: &str) -> Result<Self, Error> {
        let (name, op, raw_value) = if let Some((name, value)) = body.split_once("^=") {
            (name, AttrOp::Prefix, value)
        } else if let Some((name, value)) = body.split_once('=') {
            (name, AttrOp::Equals, value)
        } else {
            (body, AttrOp::Exists, "")
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("empty attribute name in [{body}]");
        }
        let value = raw_value.trim().trim_matches(|c| c == '"' || c == '\'');
        Ok(Self {
            name: name.to_owned(),
            op,
            value: value.to_owned(),
        })
    }

    fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        let Some(actual) = dom.attr(node, &self.name) else {
            return false;
        };
        match self.op {
            AttrOp::Exists => true,
            AttrOp::Equals => actual == self.value,
            AttrOp::Prefix => !self.value.is_empty() && actual.starts_with(&self.value),
        }
    }
}

fn read_ident(chars: &mut core::iter::Peekable<core::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(ch) = chars.peek() {
        if ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_' {
            ident.push(*ch);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

impl Dom {
    /// All elements matching the selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector fails to parse.
    pub fn select_all(&self, selector: &str) -> Result<Vec<NodeId>, Error> {
        let parsed = Selector::parse(selector)?;
        Ok(self.matching(&parsed))
    }

    /// First element matching the selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector fails to parse.
    pub fn select_first(&self, selector: &str) -> Result<Option<NodeId>, Error> {
        let parsed = Selector::parse(selector)?;
        Ok(self.matching(&parsed).into_iter().next())
    }

    /// All elements matching a pre-parsed selector, in document order.
    pub fn matching(&self, selector: &Selector) -> Vec<NodeId> {
        self.elements()
            .filter(|node| selector.matches_at(self, *node))
            .collect()
    }

    /// Whether a single element matches a pre-parsed selector.
    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        selector.matches_at(self, node)
    }
}
