//! Participant directory.
//!
//! An ordered set of unique names (case-insensitive) plus the currently
//! active sender. The active participant is tracked by index so it can
//! never reference a name outside the set.

/// Ordered set of participants with one active sender.
#[derive(Debug, Clone, Default)]
pub struct ParticipantDirectory {
    names: Vec<String>,
    active: Option<usize>,
}

impl ParticipantDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant.
    ///
    /// The name is trimmed first. Returns `false` without mutating when
    /// the trimmed name is empty or already present under case-insensitive
    /// comparison. On success the new participant becomes the active
    /// sender and `true` is returned.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if self.contains(name) {
            return false;
        }

        self.names.push(name.to_string());
        self.active = Some(self.names.len() - 1);
        true
    }

    /// Make an existing participant the active sender.
    ///
    /// Matches case-insensitively, like [`add`](Self::add). Returns
    /// `false` and leaves the active sender unchanged when the name is not
    /// in the set.
    pub fn set_active(&mut self, name: &str) -> bool {
        match self.position(name.trim()) {
            Some(index) => {
                self.active = Some(index);
                true
            },
            None => false,
        }
    }

    /// Whether a name is present, case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Participant names in insertion order.
    pub fn participants(&self) -> &[String] {
        &self.names
    }

    /// Currently active sender. `None` only when the directory is empty.
    pub fn active(&self) -> Option<&str> {
        self.active.map(|index| self.names[index].as_str())
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the directory has no participants.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.names.iter().position(|existing| existing.to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_and_activates() {
        let mut directory = ParticipantDirectory::new();

        assert!(directory.add("Aman"));
        assert!(directory.add("Rahul"));

        assert_eq!(directory.participants(), ["Aman", "Rahul"]);
        assert_eq!(directory.active(), Some("Rahul"));
    }

    #[test]
    fn add_trims_whitespace() {
        let mut directory = ParticipantDirectory::new();

        assert!(directory.add("  Priya  "));
        assert_eq!(directory.participants(), ["Priya"]);
    }

    #[test]
    fn add_rejects_empty_names() {
        let mut directory = ParticipantDirectory::new();

        assert!(!directory.add(""));
        assert!(!directory.add("   "));
        assert!(directory.is_empty());
        assert_eq!(directory.active(), None);
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let mut directory = ParticipantDirectory::new();
        assert!(directory.add("aman"));

        assert!(!directory.add("Aman"));
        assert!(!directory.add("AMAN"));
        assert!(!directory.add("  aman "));

        assert_eq!(directory.participants(), ["aman"]);
        assert_eq!(directory.active(), Some("aman"));
    }

    #[test]
    fn duplicate_add_does_not_steal_active() {
        let mut directory = ParticipantDirectory::new();
        assert!(directory.add("Aman"));
        assert!(directory.add("Rahul"));
        assert!(directory.set_active("Aman"));

        assert!(!directory.add("rahul"));
        assert_eq!(directory.active(), Some("Aman"));
    }

    #[test]
    fn set_active_matches_existing_member() {
        let mut directory = ParticipantDirectory::new();
        assert!(directory.add("Aman"));
        assert!(directory.add("Rahul"));

        assert!(directory.set_active("aman"));
        assert_eq!(directory.active(), Some("Aman"));
    }

    #[test]
    fn set_active_ignores_unknown_names() {
        let mut directory = ParticipantDirectory::new();
        assert!(directory.add("Aman"));

        assert!(!directory.set_active("Priya"));
        assert_eq!(directory.active(), Some("Aman"));
    }

    #[test]
    fn active_is_always_a_member_or_none() {
        let mut directory = ParticipantDirectory::new();
        assert_eq!(directory.active(), None);

        assert!(directory.add("Aman"));
        let active = directory.active().map(str::to_string);
        assert!(active.is_some_and(|name| directory.contains(&name)));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut directory = ParticipantDirectory::new();
        for name in ["Aman", "Rahul", "Priya"] {
            assert!(directory.add(name));
        }

        assert_eq!(directory.participants(), ["Aman", "Rahul", "Priya"]);
        assert_eq!(directory.len(), 3);
    }
}
