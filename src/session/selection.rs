// src/session/selection.rs

/// School ids picked by the recruit, in the order they were picked.
/// Ids point into the school directory; the set does not own the records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedSchoolSet {
    ids: Vec<String>,
}

impl SelectedSchoolSet {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn len(&self) -> usize { self.ids.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Add if absent, remove if present. Returns whether the id is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(s!(id));
            true
        }
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|x| x != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) { self.ids.clear(); }

    /// Ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectedSchoolSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SelectedSchoolSet::new();
        for id in iter {
            if !set.contains(id.as_ref()) {
                set.ids.push(s!(id.as_ref()));
            }
        }
        set
    }
}
