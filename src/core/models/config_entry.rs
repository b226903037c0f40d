/// A single key-value entry loaded from a local `.env` file.
///
/// Keys are unique within one load; when the file repeats a key, the
/// last occurrence wins (see `DotenvSource`). Order is preserved as read
/// but carries no meaning for the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Number of leading characters left visible when masking a value.
const MASK_PREFIX_LEN: usize = 3;

/// Fixed masking suffix. Always the same length so the display never
/// leaks how long the real value is.
const MASK_SUFFIX: &str = "*****";

/// Mask a value for display in the upload confirmation.
///
/// Shows at most the first three characters followed by a fixed five
/// character mask, regardless of the value's true length. Values
/// shorter than three characters are shown whole, still masked.
pub fn mask_value(value: &str) -> String {
    let prefix: String = value.chars().take(MASK_PREFIX_LEN).collect();
    format!("{prefix}{MASK_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_values_show_three_chars_and_fixed_mask() {
        assert_eq!(mask_value("supersecretvalue"), "sup*****");
        assert_eq!(mask_value("3000"), "300*****");
    }

    #[test]
    fn exact_three_chars() {
        assert_eq!(mask_value("xyz"), "xyz*****");
    }

    #[test]
    fn short_values_show_whole_value_plus_mask() {
        assert_eq!(mask_value("ab"), "ab*****");
        assert_eq!(mask_value("a"), "a*****");
        assert_eq!(mask_value(""), "*****");
    }

    #[test]
    fn mask_length_is_independent_of_value_length() {
        assert_eq!(mask_value("abcd").len(), mask_value("abcdefghij").len());
    }

    #[test]
    fn multibyte_values_are_cut_on_char_boundaries() {
        assert_eq!(mask_value("héllo"), "hél*****");
    }
}
