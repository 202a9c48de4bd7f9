//! Post-extraction cleanup: strips navigation material before enrichment.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Element, ElementType};

/// Section titles whose children are navigation rather than content.
pub const NAVIGATION_TITLES: &[&str] = &[
    "Table of Contents",
    "Content",
    "Structure",
    "Agenda",
    "List of Figures",
    "Outline",
];

static DOTTED_LEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{50}").expect("valid regex"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub navigation_children: usize,
    pub dotted_leaders: usize,
    pub headers_footers: usize,
}

impl FilterStats {
    pub fn removed(&self) -> usize {
        self.navigation_children + self.dotted_leaders + self.headers_footers
    }
}

/// Ids of every navigation title. Repeated titles are unioned.
pub fn navigation_title_ids(elements: &[Element]) -> HashSet<&str> {
    elements
        .iter()
        .filter(|element| element.is(&ElementType::Title))
        .filter(|element| {
            element
                .text
                .as_deref()
                .is_some_and(|text| NAVIGATION_TITLES.contains(&text))
        })
        .filter_map(|element| element.element_id.as_deref())
        .collect()
}

/// Drops navigation children, dotted-leader lines, headers and footers.
/// Kept elements stay in reading order.
pub fn filter_elements(elements: Vec<Element>) -> (Vec<Element>, FilterStats) {
    let reference_ids: HashSet<String> = navigation_title_ids(&elements)
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();

    let mut stats = FilterStats::default();
    let kept = elements
        .into_iter()
        .filter(|element| {
            if element
                .parent_id()
                .is_some_and(|parent| reference_ids.contains(parent))
            {
                stats.navigation_children += 1;
                return false;
            }
            if element
                .text
                .as_deref()
                .is_some_and(|text| DOTTED_LEADER.is_match(text))
            {
                stats.dotted_leaders += 1;
                return false;
            }
            if element.is(&ElementType::Header) || element.is(&ElementType::Footer) {
                stats.headers_footers += 1;
                return false;
            }
            true
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        kept = kept.len(),
        removed = stats.removed(),
        navigation = stats.navigation_children,
        dotted_leaders = stats.dotted_leaders,
        headers_footers = stats.headers_footers,
        "navigation filter applied"
    );
    (kept, stats)
}
