//! Surrounding-text extraction for table elements.
//!
//! The window is positional: reading order of the element sequence is the
//! only signal, so both scans walk indices outward from the target and never
//! look at ids or pages.

use sustainvec_core::Element;

/// Qualifying neighbours collected on each side of the target.
pub const CONTEXT_WINDOW: usize = 3;

/// Context for `target`, located by identity inside `elements`.
///
/// Returns an empty string when `target` is not one of the slice's own
/// elements; an equal clone does not count.
pub fn context_window(elements: &[Element], target: &Element) -> String {
    match elements
        .iter()
        .position(|candidate| std::ptr::eq(candidate, target))
    {
        Some(position) => context_window_at(elements, position),
        None => String::new(),
    }
}

/// Context for the element at `position`.
///
/// Lines, in order: `Document: <filename>` when the target has one, up to
/// [`CONTEXT_WINDOW`] preceding body-text elements in reading order, then up
/// to [`CONTEXT_WINDOW`] following ones. Non-qualifying neighbours are passed
/// over without counting toward either quota, and a short side never borrows
/// from the other.
pub fn context_window_at(elements: &[Element], position: usize) -> String {
    let Some(target) = elements.get(position) else {
        return String::new();
    };

    let mut before: Vec<&str> = Vec::with_capacity(CONTEXT_WINDOW);
    let mut index = position;
    while before.len() < CONTEXT_WINDOW && index > 0 {
        index -= 1;
        if let Some(text) = body_text(&elements[index]) {
            before.push(text);
        }
    }
    before.reverse();

    let mut after: Vec<&str> = Vec::with_capacity(CONTEXT_WINDOW);
    let mut index = position + 1;
    while after.len() < CONTEXT_WINDOW && index < elements.len() {
        if let Some(text) = body_text(&elements[index]) {
            after.push(text);
        }
        index += 1;
    }

    let document_line = target
        .filename()
        .map(|filename| format!("Document: {filename}"));

    let mut lines: Vec<&str> = Vec::with_capacity(1 + before.len() + after.len());
    if let Some(line) = document_line.as_deref() {
        lines.push(line);
    }
    lines.extend(before);
    lines.extend(after);
    lines.join("\n")
}

fn body_text(element: &Element) -> Option<&str> {
    if element.is_body_text() {
        element.text.as_deref()
    } else {
        None
    }
}
