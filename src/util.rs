//! Identifier helpers

/// Backing field for a property: `Count` becomes `_count`
///
/// The leading run of capitals is lowered as one word, keeping the last
/// capital when it starts the next word.
///
/// # Examples
/// ```
/// use codemodel::util::default_backing_field_name;
/// assert_eq!(default_backing_field_name("IsEnabled"), "_isEnabled");
/// assert_eq!(default_backing_field_name("URLPath"), "_urlPath");
/// ```
pub fn default_backing_field_name(property_name: &str) -> String {
    let chars: Vec<char> = property_name.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lowered = match chars.get(run) {
        Some(next) if run > 1 && next.is_lowercase() => run - 1,
        _ => run,
    };

    let mut field = String::with_capacity(property_name.len() + 1);
    field.push('_');
    for (i, c) in chars.iter().enumerate() {
        if i < lowered {
            field.extend(c.to_lowercase());
        } else {
            field.push(*c);
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_field_name() {
        assert_eq!(default_backing_field_name("Count"), "_count");
        assert_eq!(default_backing_field_name("IsEnabled"), "_isEnabled");
        assert_eq!(default_backing_field_name("name"), "_name");
    }

    #[test]
    fn test_leading_acronym_lowered_as_a_word() {
        assert_eq!(default_backing_field_name("URL"), "_url");
        assert_eq!(default_backing_field_name("IOStream"), "_ioStream");
        assert_eq!(default_backing_field_name("X"), "_x");
        assert_eq!(default_backing_field_name(""), "_");
    }
}
