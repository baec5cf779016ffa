use std::{borrow::Borrow, fmt, str::FromStr};

/// URL-safe identifier derived from a human-entered title.
///
/// Once assigned to a map, the slug is its public identifier.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Slug(String);

/// Fallback for titles that contain no usable characters.
const FALLBACK: &str = "map";

// These characters are dropped entirely instead of being
// collapsed into hyphens.
const STRIPPED: &[char] = &['*', '+', '~', '.', '(', ')', '\'', '"', '!', ':', '@'];

impl Slug {
    /// Derives a slug from a title.
    ///
    /// Lowercases, transliterates to ASCII where possible, strips a
    /// defined punctuation set, collapses all remaining runs of
    /// non-alphanumeric characters into single hyphens and trims
    /// leading/trailing hyphens. An empty or fully stripped title
    /// yields the literal `"map"`.
    pub fn from_title(title: &str) -> Self {
        let mut slug = String::with_capacity(title.len());
        let mut pending_hyphen = false;
        for c in title.chars().flat_map(fold_to_ascii) {
            if STRIPPED.contains(&c) {
                continue;
            }
            if c.is_ascii_alphanumeric() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_hyphen = true;
            }
        }
        if slug.is_empty() {
            slug.push_str(FALLBACK);
        }
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Appends `-1`, `-2`, ... to the base slug until `is_taken`
/// no longer claims the candidate.
pub fn unique_slug<F>(title: &str, is_taken: F) -> Slug
where
    F: Fn(&str) -> bool,
{
    let base = Slug::from_title(title);
    if !is_taken(base.as_str()) {
        return base;
    }
    let mut counter = 1_u64;
    loop {
        let candidate = format!("{}-{}", base.as_str(), counter);
        if !is_taken(&candidate) {
            return Slug(candidate);
        }
        counter += 1;
    }
}

// Folds the most common Latin diacritics. Everything else that is
// not ASCII becomes a hyphen separator.
fn fold_to_ascii(c: char) -> impl Iterator<Item = char> {
    let folded: &str = match c {
        'à' | 'á' | 'â' | 'ã' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Å' => "a",
        'ä' | 'Ä' => "ae",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'Ò' | 'Ó' | 'Ô' | 'Õ' => "o",
        'ö' | 'Ö' => "oe",
        'ù' | 'ú' | 'û' | 'Ù' | 'Ú' | 'Û' => "u",
        'ü' | 'Ü' => "ue",
        'ç' | 'Ç' => "c",
        'ñ' | 'Ñ' => "n",
        'ß' => "ss",
        _ => return Fold::Keep(std::iter::once(c)),
    };
    Fold::Mapped(folded.chars())
}

enum Fold {
    Keep(std::iter::Once<char>),
    Mapped(std::str::Chars<'static>),
}

impl Iterator for Fold {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        match self {
            Fold::Keep(it) => it.next(),
            Fold::Mapped(it) => it.next(),
        }
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Slug> for String {
    fn from(from: Slug) -> Self {
        from.0
    }
}

impl From<String> for Slug {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Slug {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl FromStr for Slug {
    type Err = ();
    fn from_str(s: &str) -> Result<Slug, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
