//! Branch name validation.
//!
//! Candidate names are checked against a fixed rule set before any
//! branch-creating git command runs, so an invalid ref is refused without
//! touching the repository.

/// Substrings git refuses anywhere in a ref name.
const FORBIDDEN_SUBSTRINGS: &[&str] = &["..", " ", "~", "^", ":", "?", "*", "[", "//", "@{", "\\"];

/// Characters a name must not end with.
const FORBIDDEN_LAST: &[char] = &['.', '/'];

/// Characters a name must not start with.
const FORBIDDEN_FIRST: &[char] = &['/'];

/// Checks whether a candidate branch name would be accepted by git.
///
/// A name is valid when it contains none of the forbidden substrings,
/// does not end with `.` or `/`, and does not start with `/`. Internal
/// slashes (`release/2.0`) and a leading dot are fine. Total over all
/// strings; the empty string passes here and is handled by callers.
///
/// # Examples
///
/// ```
/// use tsk::naming::is_name_valid;
///
/// assert!(is_name_valid("release/2.0"));
/// assert!(is_name_valid(".hidden"));
/// assert!(!is_name_valid("foo..bar"));
/// assert!(!is_name_valid("foo/"));
/// ```
pub fn is_name_valid(name: &str) -> bool {
    if FORBIDDEN_SUBSTRINGS.iter().any(|s| name.contains(s)) {
        return false;
    }
    if name.ends_with(FORBIDDEN_LAST) {
        return false;
    }
    if name.starts_with(FORBIDDEN_FIRST) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(is_name_valid("foo"));
        assert!(is_name_valid("foo.bar"));
        assert!(is_name_valid("release/2.0"));
        assert!(is_name_valid(".foo"));
    }

    #[test]
    fn rejects_each_forbidden_substring() {
        for name in [
            "foo..bar", "foo bar", "foo~bar", "foo^bar", "foo:bar", "foo?bar", "foo*bar",
            "foo[bar", "foo//bar", "foo@{bar", "foo\\bar",
        ] {
            assert!(!is_name_valid(name), "{name} should be invalid");
        }
    }

    #[test]
    fn rejects_bad_first_and_last_characters() {
        assert!(!is_name_valid("foo."));
        assert!(!is_name_valid("foo/"));
        assert!(!is_name_valid("/foo"));
    }

    #[test]
    fn one_violation_is_enough() {
        // valid everywhere else, still invalid because of the single bad rule
        assert!(!is_name_valid("release/2.0."));
        assert!(!is_name_valid("/release/2.0"));
    }

    #[test]
    fn empty_string_is_valid_by_rule_set() {
        assert!(is_name_valid(""));
    }
}
