use std::io;
use std::sync::{Arc, Mutex};

use sustainvec_core::filter::{filter_elements, navigation_title_ids};
use sustainvec_core::{Element, ElementMetadata, ElementType};

fn child_of(kind: ElementType, id: &str, text: &str, parent: &str) -> Element {
    Element::new(kind, id, text).with_metadata(ElementMetadata {
        parent_id: Some(parent.to_string()),
        ..ElementMetadata::default()
    })
}

fn ids(elements: &[Element]) -> Vec<&str> {
    elements
        .iter()
        .filter_map(|element| element.element_id.as_deref())
        .collect()
}

#[test]
fn drops_children_of_navigation_titles() {
    let elements = vec![
        Element::new(ElementType::Title, "toc", "Table of Contents"),
        child_of(ElementType::ListItem, "toc-1", "Governance 4", "toc"),
        child_of(ElementType::ListItem, "toc-2", "Strategy 9", "toc"),
        Element::new(ElementType::Title, "gov", "Governance"),
        child_of(ElementType::NarrativeText, "gov-1", "The board meets quarterly.", "gov"),
    ];

    let (kept, stats) = filter_elements(elements);
    assert_eq!(ids(&kept), vec!["toc", "gov", "gov-1"]);
    assert_eq!(stats.navigation_children, 2);
}

#[test]
fn repeated_navigation_titles_are_unioned() {
    let elements = vec![
        Element::new(ElementType::Title, "c1", "Content"),
        Element::new(ElementType::Title, "c2", "Content"),
        child_of(ElementType::ListItem, "a", "first", "c1"),
        child_of(ElementType::ListItem, "b", "second", "c2"),
    ];

    assert_eq!(navigation_title_ids(&elements).len(), 2);
    let (kept, _) = filter_elements(elements);
    assert_eq!(ids(&kept), vec!["c1", "c2"]);
}

#[test]
fn navigation_text_outside_a_title_is_not_a_reference() {
    let elements = vec![
        Element::new(ElementType::NarrativeText, "n", "Outline"),
        child_of(ElementType::ListItem, "keep", "still here", "n"),
    ];

    let (kept, stats) = filter_elements(elements);
    assert_eq!(kept.len(), 2);
    assert_eq!(stats.removed(), 0);
}

#[test]
fn drops_dotted_leaders_headers_and_footers() {
    let leader = format!("Climate risks {} 12", ".".repeat(60));
    let short_dots = format!("Note {}", ".".repeat(49));
    let elements = vec![
        Element::new(ElementType::Header, "h", "Annual Report 2023"),
        Element::new(ElementType::CompositeElement, "leader", leader),
        Element::new(ElementType::CompositeElement, "dots", short_dots),
        Element::new(ElementType::Footer, "f", "Page 3"),
        Element::new(ElementType::Table, "t", "Scope 1 120"),
    ];

    let (kept, stats) = filter_elements(elements);
    assert_eq!(ids(&kept), vec!["dots", "t"]);
    assert_eq!(stats.dotted_leaders, 1);
    assert_eq!(stats.headers_footers, 2);
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn filter_logs_its_counts() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let elements = vec![
        Element::new(ElementType::Header, "h", "Annual report 2023"),
        Element::new(ElementType::CompositeElement, "c", "Board oversight."),
        Element::new(ElementType::Footer, "f", "Page 4"),
    ];
    let (kept, stats) = tracing::subscriber::with_default(subscriber, || filter_elements(elements));
    assert_eq!(ids(&kept), vec!["c"]);
    assert_eq!(stats.headers_footers, 2);

    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("navigation filter applied"));
    assert!(output.contains("kept=1"));
    assert!(output.contains("removed=2"));
    assert!(output.contains("headers_footers=2"));
}
