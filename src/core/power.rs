//! The fixed power-increment lookup table.
//!
//! Exposed as a pure free function so the table can be tested and reused
//! without constructing an evaluator or mocking collaborators.

/// Power increment granted by a trainer, keyed by name.
///
/// The table is fixed: `"Yoda"` grants 5, `"Obi-Wan"` grants 3, and any
/// other trainer grants the default of 2. An unrecognized name is the
/// fallback case, not an error.
///
/// # Example
///
/// ```rust
/// use apprentice::core::power_increment;
///
/// assert_eq!(power_increment("Yoda"), 5);
/// assert_eq!(power_increment("Obi-Wan"), 3);
/// assert_eq!(power_increment("Fernando"), 2);
/// ```
pub fn power_increment(trainer_name: &str) -> i64 {
    match trainer_name {
        "Yoda" => 5,
        "Obi-Wan" => 3,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_expected_values() {
        assert_eq!(power_increment("Yoda"), 5);
        assert_eq!(power_increment("Obi-Wan"), 3);
        assert_eq!(power_increment("Fernando"), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // "yoda" is not "Yoda"; it falls through to the default.
        assert_eq!(power_increment("yoda"), 2);
        assert_eq!(power_increment(""), 2);
    }
}
