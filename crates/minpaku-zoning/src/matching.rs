//! Fuzzy mapping from the free-text use-area name reported by reinfolib to a
//! [`ZoningCategory`].

use minpaku_core::{zoning_by_code, ZoningCategory, ZONING_CATEGORIES};

/// Abbreviations and informal spellings seen in municipal data, keyed by
/// their normalized form. Consulted only after exact and partial matching.
const NAME_VARIANTS: &[(&str, &str)] = &[
    ("一低専", "1SR"),
    ("一低層", "1SR"),
    ("一種低層", "1SR"),
    ("第一種低層住専", "1SR"),
    ("二低専", "2SR"),
    ("二低層", "2SR"),
    ("二種低層", "2SR"),
    ("第二種低層住専", "2SR"),
    ("一中専", "1MR"),
    ("一中高", "1MR"),
    ("一種中高層", "1MR"),
    ("第一種中高層住専", "1MR"),
    ("二中専", "2MR"),
    ("二中高", "2MR"),
    ("二種中高層", "2MR"),
    ("第二種中高層住専", "2MR"),
    ("一住居", "1JR"),
    ("一住", "1JR"),
    ("二住居", "2JR"),
    ("二住", "2JR"),
    ("準住", "JNR"),
    ("田住", "TSJ"),
    ("近商", "KNC"),
    ("商業", "SYG"),
    ("準工", "JKG"),
    ("工業", "KGY"),
    ("工専", "KGS"),
];

/// Canonical form for comparison: ASCII and full-width digits become kanji
/// numerals and all whitespace is removed.
#[must_use]
pub fn normalize_zoning_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' | '０' => '〇',
            '1' | '１' => '一',
            '2' | '２' => '二',
            '3' | '３' => '三',
            '4' | '４' => '四',
            '5' | '５' => '五',
            '6' | '６' => '六',
            '7' | '７' => '七',
            '8' | '８' => '八',
            '9' | '９' => '九',
            other => other,
        })
        .collect()
}

/// Maps a raw use-area name to its category.
///
/// Tried in order:
/// 1. exact match on the normalized name;
/// 2. the raw name contains a category name (the longest one wins, so
///    準工業地域 beats 工業地域);
/// 3. exactly one category name contains the raw name;
/// 4. the [`NAME_VARIANTS`] table;
/// 5. the first category, in table order, whose name contains the raw name.
///
/// An empty or whitespace-only name never matches.
#[must_use]
pub fn match_zoning_category(raw: &str) -> Option<&'static ZoningCategory> {
    let needle = normalize_zoning_name(raw);
    if needle.is_empty() {
        return None;
    }

    if let Some(category) = ZONING_CATEGORIES.iter().find(|c| c.name == needle) {
        return Some(category);
    }

    if let Some(category) = ZONING_CATEGORIES
        .iter()
        .filter(|c| needle.contains(c.name))
        .max_by_key(|c| c.name.chars().count())
    {
        return Some(category);
    }

    let mut containing = ZONING_CATEGORIES.iter().filter(|c| c.name.contains(&needle));
    if let (Some(category), None) = (containing.next(), containing.next()) {
        return Some(category);
    }

    NAME_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == needle)
        .and_then(|(_, code)| zoning_by_code(code))
        .or_else(|| ZONING_CATEGORIES.iter().find(|c| c.name.contains(&needle)))
}
