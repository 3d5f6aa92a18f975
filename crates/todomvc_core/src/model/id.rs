//! Identifier generator for new tasks.
//!
//! Ids are random version-4 UUIDs in canonical hyphenated form. They are only
//! ever compared for equality, so probabilistic uniqueness is sufficient.

use uuid::Uuid;

/// Produces a fresh 36-character task id (`8-4-4-4-12` lowercase hex).
pub fn new_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_id;

    #[test]
    fn new_id_has_canonical_v4_layout() {
        let id = new_id();
        assert_eq!(id.len(), 36);

        let groups: Vec<&str> = id.split('-').collect();
        let lengths: Vec<usize> = groups.iter().map(|group| group.len()).collect();
        assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
        assert!(id
            .chars()
            .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));

        // Version nibble.
        assert_eq!(groups[2].chars().next(), Some('4'));
        // Variant bits `10` leave only 8, 9, a or b here.
        let variant = groups[3].chars().next().expect("variant group is not empty");
        assert!(matches!(variant, '8' | '9' | 'a' | 'b'), "variant {variant}");
    }

    #[test]
    fn new_id_does_not_repeat_across_calls() {
        let first = new_id();
        let second = new_id();
        assert_ne!(first, second);
    }
}
