use indexmap::IndexSet;

/// Separator placed between checked options in the preview.
pub const CHECKED_SEPARATOR: &str = " / ";

/// Checked checkbox values, kept in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedValues {
    values: IndexSet<String>,
}

impl CheckedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the value was not checked before.
    pub fn check(&mut self, value: &str) -> bool {
        self.values.insert(value.to_string())
    }

    /// Removing keeps the relative order of the remaining values.
    pub fn uncheck(&mut self, value: &str) -> bool {
        self.values.shift_remove(value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(CHECKED_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_check_order_across_removals() {
        let mut checked = CheckedValues::new();
        checked.check("C");
        checked.check("A");
        checked.check("B");
        checked.uncheck("A");
        assert_eq!(checked.joined(), "C / B");
        checked.check("A");
        assert_eq!(checked.joined(), "C / B / A");
    }

    #[test]
    fn duplicate_checks_are_ignored() {
        let mut checked = CheckedValues::new();
        assert!(checked.check("A"));
        assert!(!checked.check("A"));
        assert_eq!(checked.len(), 1);
        assert!(!checked.uncheck("B"));
    }
}
