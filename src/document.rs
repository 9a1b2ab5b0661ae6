//! Parsed HTML document
//!
//! [`HtmlDocument`] wraps a `scraper` tree and exposes the handful of typed
//! queries and head mutations the annotator needs. The HTML5 parser always
//! synthesizes `<html>`, `<head>` and `<body>`, so document shape is checked
//! on the source's start tags before parsing.

use crate::error::{AnnotationError, Result};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector};
use std::cell::Cell;
use tracing::trace;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Elements that must appear exactly once in the source
const REQUIRED_ELEMENTS: [&str; 3] = ["html", "head", "body"];

/// Counts real start tags of [`REQUIRED_ELEMENTS`].
///
/// Raw text elements switch the tokenizer into their text state, so markup
/// inside scripts, styles, titles and attribute values is never counted.
#[derive(Default)]
struct StartTagCounter {
    counts: [Cell<usize>; 3],
}

impl TokenSink for StartTagCounter {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name,
            ..
        }) = token
        else {
            return TokenSinkResult::Continue;
        };

        if let Some(idx) = REQUIRED_ELEMENTS.iter().position(|tag| *tag == &*name) {
            let count = &self.counts[idx];
            count.set(count.get() + 1);
        }

        match &*name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "plaintext" => TokenSinkResult::Plaintext,
            _ => TokenSinkResult::Continue,
        }
    }
}

/// Reject sources without exactly one `<html>`, `<head>` and `<body>`
pub fn check_shape(source: &str) -> Result<()> {
    let tokenizer = Tokenizer::new(StartTagCounter::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from(source));
    // The sink never yields a script handle, so one feed consumes everything
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    for (&tag, count) in REQUIRED_ELEMENTS.iter().zip(&tokenizer.sink.counts) {
        match count.get() {
            0 => return Err(AnnotationError::MissingElement(tag).into()),
            1 => {}
            count => return Err(AnnotationError::DuplicateElement { tag, count }.into()),
        }
    }

    Ok(())
}

/// Quote a value for use inside a CSS attribute selector
fn css_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
        value: StrTendril::from(value),
    }
}

/// Build a detached HTML element
pub fn new_element(tag: &str, attrs: &[(&str, &str)]) -> Element {
    let name = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag));
    let attrs = attrs
        .iter()
        .map(|(name, value)| attribute(name, value))
        .collect();
    Element::new(name, attrs)
}

/// A parsed, mutable HTML document
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Validate the source shape and parse it
    pub fn parse(source: &str) -> Result<Self> {
        check_shape(source)?;
        Ok(Self {
            html: Html::parse_document(source),
        })
    }

    fn select_first(&self, css: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = Selector::parse(css)
            .map_err(|e| AnnotationError::InvalidSelector(format!("{css}: {e}")))?;
        Ok(self.html.select(&selector).next())
    }

    /// Text of the first `<title>`, if any
    pub fn title(&self) -> Result<Option<String>> {
        Ok(self
            .select_first("title")?
            .map(|el| el.text().collect::<String>()))
    }

    /// First `<meta name=...>` with exactly this name
    pub fn find_meta_by_name(&self, name: &str) -> Result<Option<ElementRef<'_>>> {
        self.select_first(&format!("meta[name={}]", css_string(name)))
    }

    /// First `<meta property=...>` with exactly this property
    pub fn find_meta_by_property(&self, property: &str) -> Result<Option<ElementRef<'_>>> {
        self.select_first(&format!("meta[property={}]", css_string(property)))
    }

    /// First `<link>` whose rel list contains this token
    pub fn find_link_by_rel(&self, rel: &str) -> Result<Option<ElementRef<'_>>> {
        self.select_first(&format!("link[rel~={}]", css_string(rel)))
    }

    /// First `<script>` with exactly this type
    pub fn find_script_by_type(&self, script_type: &str) -> Result<Option<ElementRef<'_>>> {
        self.select_first(&format!("script[type={}]", css_string(script_type)))
    }

    fn head(&self) -> Result<ElementRef<'_>> {
        self.select_first("head")?
            .ok_or_else(|| AnnotationError::MissingElement("head").into())
    }

    fn root(&self) -> Result<ElementRef<'_>> {
        self.select_first("html")?
            .ok_or_else(|| AnnotationError::MissingElement("html").into())
    }

    /// Number of child nodes (elements and text) of `<head>`
    #[cfg(test)]
    fn head_len(&self) -> Result<usize> {
        Ok(self.head()?.children().count())
    }

    /// Insert an element at a child index of `<head>`, appending when the
    /// index is past the end
    pub fn insert_in_head(&mut self, position: usize, element: Element) -> Result<()> {
        let head = self.head()?;
        let head_id = head.id();
        let anchor_id = head.children().nth(position).map(|child| child.id());
        trace!("Inserting <{}> at head position {}", element.name(), position);

        let mut node = self
            .html
            .tree
            .get_mut(anchor_id.unwrap_or(head_id))
            .ok_or(AnnotationError::MissingElement("head"))?;
        if anchor_id.is_some() {
            node.insert_before(Node::Element(element));
        } else {
            node.append(Node::Element(element));
        }
        Ok(())
    }

    /// Append an element as the last child of `<head>`
    pub fn append_to_head(&mut self, element: Element) -> Result<()> {
        let head_id = self.head()?.id();
        trace!("Appending <{}> to head", element.name());
        let mut head = self
            .html
            .tree
            .get_mut(head_id)
            .ok_or(AnnotationError::MissingElement("head"))?;
        head.append(Node::Element(element));
        Ok(())
    }

    /// Append an element holding a single text child to `<head>`
    pub fn append_text_element_to_head(&mut self, element: Element, text: &str) -> Result<()> {
        let head_id = self.head()?.id();
        let mut head = self
            .html
            .tree
            .get_mut(head_id)
            .ok_or(AnnotationError::MissingElement("head"))?;
        let mut child = head.append(Node::Element(element));
        child.append(Node::Text(Text {
            text: StrTendril::from(text),
        }));
        Ok(())
    }

    /// Value of an attribute on `<html>`
    #[cfg(test)]
    fn html_attr(&self, name: &str) -> Result<Option<String>> {
        Ok(self.root()?.value().attr(name).map(String::from))
    }

    /// Set an attribute on `<html>` unless already present.
    ///
    /// Returns whether the attribute was added.
    pub fn set_html_attr_if_absent(&mut self, name: &str, value: &str) -> Result<bool> {
        let root = self.root()?;
        let element = root.value();
        if element.attr(name).is_some() {
            return Ok(false);
        }

        let root_id = root.id();
        let mut attrs: Vec<Attribute> = element.attrs().map(|(k, v)| attribute(k, v)).collect();
        attrs.push(attribute(name, value));
        let replacement = Element::new(element.name.clone(), attrs);

        let mut node = self
            .html
            .tree
            .get_mut(root_id)
            .ok_or(AnnotationError::MissingElement("html"))?;
        *node.value() = Node::Element(replacement);
        Ok(true)
    }

    /// Serialize the whole document back to HTML
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}
