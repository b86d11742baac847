//! Identifier handling: property keys → field tokens, keys → declaration names.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern"));

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("non-word pattern"));

static SNAKE_HUMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([a-z])").expect("snake hump pattern"));

/// Base name used when a key sanitizes down to nothing (e.g. `"--"`).
pub const ANONYMOUS: &str = "Anonymous";

const ITEM_SUFFIX: &str = "Item";

pub fn is_identifier(key: &str) -> bool {
    IDENTIFIER.is_match(key)
}

/// Bare identifier when the key is one, otherwise a double-quoted literal.
///
/// The key is not escaped: `my"key` renders as `"my"key"`.
pub fn render_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        format!("\"{key}\"")
    }
}

/// Strip non-word characters, trim `_`, collapse `_x` into `X`, capitalize.
///
/// May return an empty string; see [`type_name`].
pub fn sanitize_name(key: &str) -> String {
    let stripped = NON_WORD.replace_all(key, "");
    let trimmed = stripped.trim_matches('_');
    let camel = SNAKE_HUMP.replace_all(trimmed, |caps: &Captures| caps[1].to_ascii_uppercase());
    capitalize(&camel)
}

/// Declaration name for a nested object stored under `key`.
pub fn type_name(key: &str) -> String {
    let name = sanitize_name(key);
    if name.is_empty() { ANONYMOUS.to_string() } else { name }
}

/// Declaration name for the element record of an array stored under `key`.
pub fn item_name(key: &str) -> String {
    with_item_suffix(&type_name(key))
}

/// `Root` → `RootItem`. The root name is taken as given, without sanitizing.
pub fn with_item_suffix(name: &str) -> String {
    format!("{name}{ITEM_SUFFIX}")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_stay_bare() {
        assert_eq!(render_key("validName"), "validName");
        assert_eq!(render_key("_private"), "_private");
        assert_eq!(render_key("$ref"), "$ref");
        assert_eq!(render_key("a1"), "a1");
    }

    #[test]
    fn everything_else_is_quoted() {
        assert_eq!(render_key("my-property"), "\"my-property\"");
        assert_eq!(render_key("1st"), "\"1st\"");
        assert_eq!(render_key(""), "\"\"");
        assert_eq!(render_key("with space"), "\"with space\"");
        assert_eq!(render_key("näme"), "\"näme\"");
    }

    #[test]
    fn sanitize_collapses_snake_case() {
        assert_eq!(sanitize_name("user_profile"), "UserProfile");
        assert_eq!(sanitize_name("__meta__"), "Meta");
        assert_eq!(sanitize_name("created_at_utc"), "CreatedAtUtc");
        assert_eq!(sanitize_name("profile"), "Profile");
    }

    #[test]
    fn sanitize_strips_non_word_characters() {
        assert_eq!(sanitize_name("my-property"), "Myproperty");
        assert_eq!(sanitize_name("@odata.context"), "Odatacontext");
        assert_eq!(sanitize_name("--"), "");
    }

    #[test]
    fn names_for_nested_sites() {
        assert_eq!(type_name("address"), "Address");
        assert_eq!(type_name("--"), ANONYMOUS);
        assert_eq!(item_name("--"), "AnonymousItem");
        // a real key spelled like the fallback lands on the same names
        assert_eq!(type_name("anonymous"), type_name("--"));
        assert_eq!(item_name("anonymous"), item_name("--"));
        assert_eq!(item_name("users"), "UsersItem");
        assert_eq!(item_name("line_items"), "LineItemsItem");
        assert_eq!(with_item_suffix("Root"), "RootItem");
    }
}
