use uuid::Uuid;

/// Identifier source for user-created entities.
///
/// The store treats identifier uniqueness as a caller obligation, so the
/// generator has to carry enough entropy that two submissions in the same
/// instant cannot collide the way tick-based keys can.
pub struct IdFactory;

impl IdFactory {
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_distinct_within_one_tick() {
        let ids: HashSet<String> = (0..1000).map(|_| IdFactory::new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_are_non_empty() {
        assert!(!IdFactory::new_id().is_empty());
    }
}
