//! TypeScript identifier utilities.
//!
//! Small, allocation-per-call string transforms used to derive names of
//! generated tools and client calls from PascalCase protobuf names.
//!
//! # Examples
//!
//! ```
//! use agent_tools_codegen::common::typescript;
//!
//! assert_eq!(typescript::lower_first("IdentitySetPhoto"), "identitySetPhoto");
//! assert_eq!(typescript::underscore_uppercase("GroupSetPhoto"), "_group_set_photo");
//! ```

/// Lower-cases the first character.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::common::typescript::lower_first;
///
/// assert_eq!(lower_first("DiscussionList"), "discussionList");
/// assert_eq!(lower_first("x"), "x");
/// assert_eq!(lower_first(""), "");
/// ```
#[must_use]
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Upper-cases the first character.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::common::typescript::upper_first;
///
/// assert_eq!(upper_first("messageSend"), "MessageSend");
/// assert_eq!(upper_first(""), "");
/// ```
#[must_use]
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Replaces every ASCII upper-case letter with its upper-case form.
///
/// Identity on every input; kept so label derivation stays a two-pass
/// transform.
#[must_use]
pub fn uppercase_capitals(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_uppercase() } else { c })
        .collect()
}

/// Puts `_` before every ASCII upper-case letter and lower-cases it.
///
/// PascalCase input therefore starts with an underscore.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::common::typescript::underscore_uppercase;
///
/// assert_eq!(underscore_uppercase("MessageSend"), "_message_send");
/// assert_eq!(underscore_uppercase("send"), "send");
/// ```
#[must_use]
pub fn underscore_uppercase(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            result.push('_');
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("IdentitySetPhoto"), "identitySetPhoto");
        assert_eq!(lower_first("already"), "already");
        assert_eq!(lower_first("A"), "a");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("identitySetPhoto"), "IdentitySetPhoto");
        assert_eq!(upper_first("Already"), "Already");
    }

    #[test]
    fn test_uppercase_capitals_is_identity() {
        for name in ["GroupSetPhoto", "lower", "MIXEDcase", "", "Ünïcode"] {
            assert_eq!(uppercase_capitals(name), name);
        }
    }

    #[test]
    fn test_underscore_uppercase() {
        assert_eq!(underscore_uppercase("GroupSetPhoto"), "_group_set_photo");
        assert_eq!(underscore_uppercase("ABC"), "_a_b_c");
        assert_eq!(underscore_uppercase(""), "");
    }
}
