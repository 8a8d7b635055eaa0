use crate::captures::MatchMap;
use crate::cursor::Cursor;

use std::fmt;
use std::slice;

/// One compiled segment of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A literal segment, matched byte-for-byte.
    Const(String),
    /// A named capture of exactly one path segment. The name may be empty.
    Var(String),
    /// A capture of everything remaining in the url, including embedded
    /// `/`. Always the last part of its pattern. The label is informational
    /// only and plays no role in matching.
    Wildcard(Option<String>),
}

/// A compiled route template.
///
/// A `Pattern` is built once from a template string when a route is
/// registered and is immutable afterwards, so it can be matched concurrently
/// from any number of threads without synchronization.
///
/// ```rust
/// use urlpat::Pattern;
///
/// let pattern = Pattern::parse("/users/{id}");
///
/// let map = pattern.find("/users/42").unwrap();
/// assert_eq!(map.get("id"), Some("42"));
///
/// // a variable captures exactly one segment
/// assert!(pattern.find("/users/42/posts").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    parts: Vec<Part>,
}

impl Pattern {
    /// Compiles a route template.
    ///
    /// Compilation is total: every input produces a pattern. Segments are
    /// separated by `/`, `{name}` captures one segment, and a `*` captures
    /// everything remaining; text after `*` is an ignored label. Malformed
    /// templates degrade leniently instead of failing: an unterminated
    /// `{name` still yields a variable named `name`, and `{}` yields a
    /// variable with an empty name.
    ///
    /// The empty template compiles to a pattern with no parts, which matches
    /// only urls consisting entirely of slashes (including the empty url).
    pub fn parse(template: &str) -> Pattern {
        let parts = Self::compile(template);
        trace!("compiled route template {:?} into {} part(s)", template, parts.len());
        Pattern { parts }
    }

    fn compile(template: &str) -> Vec<Part> {
        let mut cursor = Cursor::new(template.as_bytes());
        let mut parts = Vec::new();

        // start of the literal run accumulated since the last boundary
        let mut start = 0;

        while let Some(c) = cursor.peek() {
            match c {
                b'/' => {
                    let end = cursor.position();
                    if end > start {
                        parts.push(Part::Const(template[start..end].to_owned()));
                    }
                    cursor.advance(1);
                    start = cursor.position();
                }
                b'{' => {
                    cursor.advance(1);
                    start = cursor.position();
                    cursor.seek(b'}');
                    parts.push(Part::Var(template[start..cursor.position()].to_owned()));
                    cursor.advance(1);
                    start = cursor.position();
                }
                b'*' => {
                    cursor.advance(1);
                    let label = &template[cursor.position()..];
                    let label = (!label.is_empty()).then(|| label.to_owned());
                    parts.push(Part::Wildcard(label));

                    // nothing after a wildcard is ever scanned
                    return parts;
                }
                _ => cursor.advance(1),
            }
        }

        if cursor.position() > start {
            parts.push(Part::Const(template[start..].to_owned()));
        }

        parts
    }

    /// Returns the compiled parts, in template order.
    ///
    /// This is the surface an outgoing-path builder works against: it can
    /// emit [`Part::Const`] text verbatim and substitute supplied values for
    /// each [`Part::Var`].
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Matches a url path against this pattern.
    ///
    /// Returns the captured variables and wildcard tail on a match, and
    /// `None` otherwise. A failed match is an ordinary outcome, not an
    /// error: callers routinely probe many patterns per request.
    ///
    /// Matching is a single forward pass over the url and never mutates the
    /// pattern. Captures borrow from the pattern (names) and the url
    /// (values).
    pub fn find<'p, 'u>(&'p self, url: &'u str) -> Option<MatchMap<'p, 'u>> {
        let mut cursor = Cursor::new(url.as_bytes());

        // a pattern with no parts matches only slashes
        if self.parts.is_empty() {
            if cursor.skip_run(b'/') {
                return None;
            }
            return Some(MatchMap::new());
        }

        let mut map = MatchMap::new();

        for (i, part) in self.parts.iter().enumerate() {
            cursor.skip_run(b'/');

            match part {
                Part::Const(text) => {
                    if !cursor.consume(text.as_bytes()) {
                        return None;
                    }

                    // a literal never matches a partial segment
                    if cursor.can_continue() && cursor.peek() != Some(b'/') {
                        return None;
                    }
                }
                Part::Wildcard(_) => {
                    if cursor.can_continue() {
                        map.set_tail(&url[cursor.position()..]);
                    }
                    return Some(map);
                }
                Part::Var(name) => {
                    // a variable must capture at least one byte
                    if !cursor.can_continue() {
                        return None;
                    }

                    let start = cursor.position();
                    cursor.seek(b'/');
                    map.insert(name, &url[start..cursor.position()]);

                    // nothing may follow the final captured variable
                    if i + 1 == self.parts.len() && cursor.skip_run(b'/') {
                        return None;
                    }
                }
            }
        }

        cursor.skip_run(b'/');
        if cursor.can_continue() {
            return None;
        }

        Some(map)
    }
}

/// Serializes the pattern back to canonical template text.
///
/// Literals render as `/text`, variables as `/{name}`, and a wildcard as
/// `/*` with its label dropped. Only templates already written in canonical
/// form round-trip byte-for-byte through [`Pattern::parse`].
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Part::Const(text) => write!(f, "/{}", text)?,
                Part::Var(name) => write!(f, "/{{{}}}", name)?,
                Part::Wildcard(_) => f.write_str("/*")?,
            }
        }
        Ok(())
    }
}

impl<'p> IntoIterator for &'p Pattern {
    type Item = &'p Part;
    type IntoIter = slice::Iter<'p, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
