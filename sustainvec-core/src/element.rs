use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::Value;

/// Element category as tagged by the upstream PDF extractor.
///
/// Tags the pipeline does not act on are kept in [`ElementType::Other`] so a
/// read/write cycle never rewrites them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    CompositeElement,
    Table,
    TableChunk,
    Title,
    NarrativeText,
    ListItem,
    Header,
    Footer,
    Image,
    FigureCaption,
    PageBreak,
    UncategorizedText,
    Other(String),
}

impl ElementType {
    pub fn as_str(&self) -> &str {
        match self {
            ElementType::CompositeElement => "CompositeElement",
            ElementType::Table => "Table",
            ElementType::TableChunk => "TableChunk",
            ElementType::Title => "Title",
            ElementType::NarrativeText => "NarrativeText",
            ElementType::ListItem => "ListItem",
            ElementType::Header => "Header",
            ElementType::Footer => "Footer",
            ElementType::Image => "Image",
            ElementType::FigureCaption => "FigureCaption",
            ElementType::PageBreak => "PageBreak",
            ElementType::UncategorizedText => "UncategorizedText",
            ElementType::Other(tag) => tag,
        }
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "CompositeElement" => ElementType::CompositeElement,
            "Table" => ElementType::Table,
            "TableChunk" => ElementType::TableChunk,
            "Title" => ElementType::Title,
            "NarrativeText" => ElementType::NarrativeText,
            "ListItem" => ElementType::ListItem,
            "Header" => ElementType::Header,
            "Footer" => ElementType::Footer,
            "Image" => ElementType::Image,
            "FigureCaption" => ElementType::FigureCaption,
            "PageBreak" => ElementType::PageBreak,
            "UncategorizedText" => ElementType::UncategorizedText,
            _ => ElementType::Other(tag),
        }
    }
}

impl From<ElementType> for String {
    fn from(kind: ElementType) -> Self {
        match kind {
            ElementType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extractor metadata attached to an element.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_as_html: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One extracted unit of document content.
///
/// Every field the extractor emits is optional here; stages decide for
/// themselves which fields they require and skip records that lack them.
/// Keys this type does not model land in `extra` and are written back
/// unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Element {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ElementMetadata>,
    /// Kept at the provider's double precision; narrowed to `f32` only when
    /// a vector record is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Element {
    pub fn new(kind: ElementType, element_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            element_id: Some(element_id.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, metadata: ElementMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is(&self, kind: &ElementType) -> bool {
        self.kind.as_ref() == Some(kind)
    }

    /// Body text that can serve as context: a composite chunk with non-empty text.
    pub fn is_body_text(&self) -> bool {
        self.is(&ElementType::CompositeElement)
            && self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    pub fn filename(&self) -> Option<&str> {
        self.metadata.as_ref()?.filename.as_deref()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.metadata.as_ref()?.parent_id.as_deref()
    }
}
