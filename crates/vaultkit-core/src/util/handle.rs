//! Move a value onto the heap and get an owned handle back.
//!
//! Useful for literals and temporaries when an API wants a `Box<T>` or
//! `Arc<T>` rather than a borrow.

use std::sync::Arc;

/// Moves `value` into a uniquely owned heap allocation.
pub fn into_box<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Moves `value` into a reference-counted allocation that can be shared
/// across threads.
pub fn into_shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_box_from_expression() {
        let boxed = into_box(2 + 3);
        assert_eq!(*boxed, 5);
    }

    #[test]
    fn test_into_shared_clones_point_to_same_value() {
        let shared = into_shared(String::from("token"));
        let other = Arc::clone(&shared);
        assert!(Arc::ptr_eq(&shared, &other));
        assert_eq!(Arc::strong_count(&shared), 2);
    }
}
