use std::{fmt, iter, mem, slice};

/// A single captured path variable, consisting of a name and a value.
///
/// Names borrow from the compiled pattern and values borrow from the matched
/// url, so a successful match copies no bytes.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Copy, Clone)]
struct Capture<'k, 'v> {
    key: &'k str,
    value: &'v str,
}

impl Capture<'_, '_> {
    const EMPTY: Capture<'static, 'static> = Capture { key: "", value: "" };
}

// Most routes have a small number of variables, so we can avoid heap
// allocations in the common case.
const SMALL: usize = 3;

// Captured variables, optimized to avoid allocations when possible.
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
enum Variables<'k, 'v> {
    Small([Capture<'k, 'v>; SMALL], usize),
    Large(Vec<Capture<'k, 'v>>),
}

/// The result of a successful match: captured variables plus the optional
/// tail consumed by a trailing wildcard.
///
/// ```rust
/// use urlpat::Pattern;
///
/// let pattern = Pattern::parse("/users/{id}/*");
/// let map = pattern.find("/users/1/files/readme").unwrap();
///
/// // Get a specific variable by name.
/// assert_eq!(map.get("id"), Some("1"));
///
/// // Iterate through the names and values.
/// for (key, value) in map.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // The wildcard captured the rest of the path.
/// assert_eq!(map.tail(), Some("files/readme"));
/// ```
#[derive(PartialEq, Eq, Clone)]
pub struct MatchMap<'k, 'v> {
    vars: Variables<'k, 'v>,
    tail: Option<&'v str>,
}

impl<'k, 'v> MatchMap<'k, 'v> {
    pub(crate) fn new() -> Self {
        MatchMap {
            vars: Variables::Small([Capture::EMPTY; SMALL], 0),
            tail: None,
        }
    }

    /// Returns the number of captured variables.
    pub fn len(&self) -> usize {
        match self.vars {
            Variables::Small(_, len) => len,
            Variables::Large(ref vec) => vec.len(),
        }
    }

    /// Returns `true` if no variables were captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value captured under the given variable name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();

        match &self.vars {
            Variables::Small(arr, len) => arr
                .iter()
                .take(*len)
                .find(|capture| capture.key == key)
                .map(|capture| capture.value),
            Variables::Large(vec) => vec
                .iter()
                .find(|capture| capture.key == key)
                .map(|capture| capture.value),
        }
    }

    /// Returns the remainder of the url captured by a trailing wildcard,
    /// if the pattern had one and any input was left for it.
    pub fn tail(&self) -> Option<&'v str> {
        self.tail
    }

    /// Returns an iterator over the captured variables, in capture order.
    pub fn iter(&self) -> MatchMapIter<'_, 'k, 'v> {
        MatchMapIter::new(self)
    }

    pub(crate) fn set_tail(&mut self, tail: &'v str) {
        self.tail = Some(tail);
    }

    /// Records a captured variable. A later capture under a name that is
    /// already present overwrites the earlier value, so names stay unique.
    pub(crate) fn insert(&mut self, key: &'k str, value: &'v str) {
        #[cold]
        fn drain_to_vec<T: Default>(len: usize, elem: T, arr: &mut [T; SMALL]) -> Vec<T> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        let capture = Capture { key, value };
        match &mut self.vars {
            Variables::Small(arr, len) => {
                if let Some(existing) = arr.iter_mut().take(*len).find(|c| c.key == key) {
                    existing.value = value;
                    return;
                }

                if *len == SMALL {
                    self.vars = Variables::Large(drain_to_vec(*len, capture, arr));
                    return;
                }

                arr[*len] = capture;
                *len += 1;
            }
            Variables::Large(vec) => {
                if let Some(existing) = vec.iter_mut().find(|c| c.key == key) {
                    existing.value = value;
                    return;
                }

                vec.push(capture);
            }
        }
    }
}

impl fmt::Debug for MatchMap<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchMap")
            .field("vars", &DebugVars(self))
            .field("tail", &self.tail)
            .finish()
    }
}

struct DebugVars<'m, 'k, 'v>(&'m MatchMap<'k, 'v>);

impl fmt::Debug for DebugVars<'_, '_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

/// An iterator over the variables of a [`MatchMap`].
pub struct MatchMapIter<'m, 'k, 'v> {
    kind: IterKind<'m, 'k, 'v>,
}

impl<'m, 'k, 'v> MatchMapIter<'m, 'k, 'v> {
    fn new(map: &'m MatchMap<'k, 'v>) -> Self {
        let kind = match &map.vars {
            Variables::Small(arr, len) => IterKind::Small(arr.iter().take(*len)),
            Variables::Large(vec) => IterKind::Large(vec.iter()),
        };
        Self { kind }
    }
}

enum IterKind<'m, 'k, 'v> {
    Small(iter::Take<slice::Iter<'m, Capture<'k, 'v>>>),
    Large(slice::Iter<'m, Capture<'k, 'v>>),
}

impl<'k, 'v> Iterator for MatchMapIter<'_, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        match self.kind {
            IterKind::Small(ref mut iter) => iter.next().map(|c| (c.key, c.value)),
            IterKind::Large(ref mut iter) => iter.next().map(|c| (c.key, c.value)),
        }
    }
}

impl ExactSizeIterator for MatchMapIter<'_, '_, '_> {
    fn len(&self) -> usize {
        match self.kind {
            IterKind::Small(ref iter) => iter.len(),
            IterKind::Large(ref iter) => iter.len(),
        }
    }
}
