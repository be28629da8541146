/// Slug generation for titles and display names.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Any run of characters that cannot appear in a slug.
static NON_SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Build a URL slug: lower-case, collapse every run of non `[a-z0-9]`
/// characters into one `-`, and trim dashes from both ends.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let dashed = NON_SLUG_RE.replace_all(&lowered, "-");
    dashed.trim_matches('-').to_string()
}

/// Return `base` if it is not taken, otherwise the first free `base-N`.
pub fn unique_slug(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Use the submitted slug when present, otherwise derive one from `source`.
pub fn slug_or_derive(slug: &str, source: &str) -> String {
    let trimmed = slug.trim();
    if trimmed.is_empty() {
        slugify(source)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(
            slugify("How Tayc is Redefining French R&B"),
            "how-tayc-is-redefining-french-r-b"
        );
    }

    #[test]
    fn test_trims_leading_and_trailing_symbols() {
        assert_eq!(slugify("  --Hello, World!--  "), "hello-world");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_collapses_runs() {
        assert_eq!(slugify("Episode  #12 :: Makossa & Bikutsi"), "episode-12-makossa-bikutsi");
    }

    #[test]
    fn test_non_ascii_becomes_separator() {
        assert_eq!(slugify("Café Noir"), "caf-noir");
        assert_eq!(slugify("A³ Hosts"), "a-hosts");
    }

    #[test]
    fn test_unique_slug() {
        let mut taken = HashSet::new();
        assert_eq!(unique_slug("intro", &taken), "intro");
        taken.insert("intro".to_string());
        assert_eq!(unique_slug("intro", &taken), "intro-1");
        taken.insert("intro-1".to_string());
        assert_eq!(unique_slug("intro", &taken), "intro-2");
    }

    #[test]
    fn test_slug_or_derive() {
        assert_eq!(slug_or_derive("", "Atem Keng"), "atem-keng");
        assert_eq!(slug_or_derive("  custom-slug ", "Atem Keng"), "custom-slug");
    }
}
