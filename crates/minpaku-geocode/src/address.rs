//! Heuristic clean-up and truncation of Japanese street addresses.
//!
//! Nominatim fails hard on addresses more specific than its data, so the
//! geocoder retries with progressively shorter variants produced by
//! [`truncate_address`]. Nothing here understands address grammar beyond the
//! handful of suffix patterns below.

use std::sync::LazyLock;

use regex::Regex;

/// Block (丁目) marker.
const BLOCK_MARKER: &str = "丁目";

/// `<kanji/kana><n>-<n>[-<n>...]` at the end of the string.
static CHOME_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*[\p{Han}\p{Hiragana}\p{Katakana}])\s*(\d+)-(\d+(?:-\d+)*)$")
        .expect("valid regex")
});

static TRAILING_DASH_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d+$").expect("valid regex"));

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+$").expect("valid regex"));

static TRAILING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9一二三四五六七八九十〇]+丁目$").expect("valid regex"));

/// Lot, room, or floor suffix: `5番地`, `9番`, `1号`, `301号室`, `3階`, `10F`.
static TRAILING_LOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9一二三四五六七八九十〇]*(?:番地|番|号室|号|階|[FＦ])$").expect("valid regex")
});

static PREFECTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:東京都|北海道|京都府|大阪府|\p{Han}{2,3}県)").expect("valid regex")
});

static MUNICIPALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Han}\p{Hiragana}\p{Katakana}]+(?:市|区|町|村)").expect("valid regex")
});

/// Trims the input and collapses every internal whitespace run (including
/// the ideographic space) to a single ASCII space.
#[must_use]
pub fn clean_input(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Folds full-width digits and dash glyphs to ASCII, then inserts a 丁目
/// marker into a trailing `町1-2-3` style tail that lacks one.
///
/// The katakana prolonged sound marks `ー` and `ｰ` are only treated as a
/// dash between two digits, since they are letters everywhere else.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    let folded: Vec<char> = address.chars().map(fold_char).collect();

    let mut out = String::with_capacity(address.len());
    for (i, &c) in folded.iter().enumerate() {
        let between_digits = i > 0
            && folded[i - 1].is_ascii_digit()
            && folded.get(i + 1).is_some_and(char::is_ascii_digit);
        if matches!(c, 'ー' | 'ｰ') && between_digits {
            out.push('-');
        } else {
            out.push(c);
        }
    }

    if out.contains(BLOCK_MARKER) {
        return out;
    }
    CHOME_TAIL
        .replace(&out, format!("${{1}}${{2}}{BLOCK_MARKER}${{3}}").as_str())
        .into_owned()
}

fn fold_char(c: char) -> char {
    match c {
        '０'..='９' => char::from_u32(u32::from(c) - u32::from('０') + u32::from('0')).unwrap_or(c),
        '－' | '‐' | '‑' | '‒' | '–' | '—' | '―' | '−' => '-',
        _ => c,
    }
}

/// Produces the next, shorter candidate by applying the first rule that
/// changes the string:
///
/// 1. drop a trailing `-<n>`
/// 2. drop a trailing bare number
/// 3. drop a trailing `<n>丁目`
/// 4. drop a trailing lot, room, or floor suffix (`<n>番地`, `<n>番`,
///    `<n>号`, `<n>号室`, `<n>階`, `<n>F`)
///
/// A dash or whitespace left dangling by the cut is trimmed too. Returns the
/// input unchanged when no rule applies.
#[must_use]
pub fn truncate_address(address: &str) -> String {
    let rules: [&Regex; 4] = [
        &TRAILING_DASH_NUMBER,
        &TRAILING_NUMBER,
        &TRAILING_BLOCK,
        &TRAILING_LOT,
    ];
    for rule in rules {
        let next = rule.replace(address, "");
        if next != address {
            return next
                .trim_end_matches(|c: char| c == '-' || c.is_whitespace())
                .to_string();
        }
    }
    address.to_string()
}

/// Whether the address still names a prefecture followed by a
/// municipality-level unit (市/区/町/村). Candidates that fail this would
/// resolve to a uselessly coarse position.
#[must_use]
pub fn is_addressable(address: &str) -> bool {
    PREFECTURE
        .find(address)
        .is_some_and(|pref| MUNICIPALITY.is_match(&address[pref.end()..]))
}

#[cfg(test)]
#[path = "address_test.rs"]
mod tests;
