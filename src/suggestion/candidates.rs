use std::ops::Deref;
use std::sync::Arc;

/// Candidates offered when no list is configured.
pub const DEFAULT_CANDIDATES: [&str; 17] = [
    "Apple",
    "Peach",
    "Orange",
    "Banana",
    "Melon",
    "Watermelon",
    "Mandarin",
    "Mulberries",
    "Lemon",
    "Lime",
    "Loquat",
    "Longan",
    "Lychee",
    "Grape",
    "Pear",
    "Kiwi",
    "Mango",
];

/// Ordered, immutable list of suggestion candidates.
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    items: Arc<[String]>,
}

impl CandidateSet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES)
    }
}

impl Deref for CandidateSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
