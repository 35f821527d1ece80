//! AttributePath — a walk from a root identifier, one attribute at a time.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Characters that separate attribute tokens in a path string.
pub const PATH_SEPARATORS: [char; 3] = ['.', '[', ']'];

/// A parsed attribute path such as `io.input-link.blocks[block].name`.
///
/// `.`, `[` and `]` are all plain separators: they are stripped and empty
/// tokens are dropped, so `a[b].c`, `a.b.c` and `.a..b.c.` parse to the
/// same three tokens. Brackets do not select ordinals; an ordinal for the
/// final step is passed separately to the resolver.
///
/// Serializes as its canonical dotted string so hosts can name paths in
/// their own configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AttributePath {
    tokens: SmallVec<[String; 4]>,
}

impl AttributePath {
    pub fn parse(path: &str) -> Self {
        Self {
            tokens: path
                .split(PATH_SEPARATORS)
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Build a path from already-split attribute names.
    ///
    /// Empty names are dropped, matching [`AttributePath::parse`].
    pub fn from_attributes(attributes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tokens: attributes
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// An empty path never resolves.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The intermediate attributes and the final one, or `None` when empty.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.tokens.split_last().map(|(last, init)| (last.as_str(), init))
    }

    /// Extend the path by one attribute.
    pub fn push(&mut self, attribute: impl Into<String>) {
        let attribute = attribute.into();
        if !attribute.is_empty() {
            self.tokens.push(attribute);
        }
    }

    pub fn join(mut self, attribute: impl Into<String>) -> Self {
        self.push(attribute);
        self
    }
}

impl FromStr for AttributePath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for AttributePath {
    fn from(s: &str) -> Self { Self::parse(s) }
}

impl From<String> for AttributePath {
    fn from(s: String) -> Self { Self::parse(&s) }
}

impl From<&AttributePath> for AttributePath {
    fn from(p: &AttributePath) -> Self { p.clone() }
}

impl From<AttributePath> for String {
    fn from(p: AttributePath) -> Self { p.to_string() }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 { f.write_str(".")?; }
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_dotted_path() {
        let p = AttributePath::parse("io.input-link.location");
        assert_eq!(p.tokens(), &["io", "input-link", "location"]);
    }

    #[test]
    fn test_brackets_are_separators() {
        let p = AttributePath::parse("blocks[block].name");
        assert_eq!(p.tokens(), &["blocks", "block", "name"]);
        assert_eq!(p, AttributePath::parse("blocks.block.name"));
    }

    #[test]
    fn test_empty_tokens_dropped() {
        let p = AttributePath::parse(".a..b[]c.");
        assert_eq!(p.tokens(), &["a", "b", "c"]);
    }

    #[test]
    fn test_empty_path() {
        assert!(AttributePath::parse("").is_empty());
        assert!(AttributePath::parse(".[].").is_empty());
        assert_eq!(AttributePath::parse("").split_last(), None);
    }

    #[test]
    fn test_split_last() {
        let p = AttributePath::parse("a.b.c");
        let (last, init) = p.split_last().unwrap();
        assert_eq!(last, "c");
        assert_eq!(init, &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_join_skips_empty() {
        let p = AttributePath::parse("a").join("b").join("");
        assert_eq!(p.to_string(), "a.b");
    }

    #[test]
    fn test_serde_as_string() {
        let p = AttributePath::parse("a[b].c");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"a.b.c\"");
        let back: AttributePath = serde_json::from_str("\"x[y]\"").unwrap();
        assert_eq!(back.tokens(), &["x", "y"]);
    }

    proptest! {
        #[test]
        fn prop_tokens_never_contain_separators(s in "[a-z.\\[\\]]{0,24}") {
            let p = AttributePath::parse(&s);
            for t in p.tokens() {
                prop_assert!(!t.is_empty());
                prop_assert!(!t.contains(PATH_SEPARATORS));
            }
        }

        #[test]
        fn prop_display_reparses_to_same_path(s in "[a-z0-9.\\[\\]-]{0,24}") {
            let p = AttributePath::parse(&s);
            prop_assert_eq!(AttributePath::parse(&p.to_string()), p);
        }
    }
}
