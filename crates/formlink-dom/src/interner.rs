//! String Interner - Deduplicate tag and attribute names
//!
//! Every element stores its tag and attribute names as 4-byte IDs. The form
//! vocabulary is pre-interned so lookups of names like "for", "id" and
//! "form" never miss.

use std::collections::HashMap;

/// Interned string ID - just 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// Tags the resolvers and taxonomy ask about
const FORM_TAGS: &[&str] = &[
    "html", "head", "body", "form", "label", "fieldset", "legend",
    "input", "button", "select", "option", "optgroup", "textarea",
    "meter", "output", "progress", "object", "datalist",
    "div", "span", "p",
];

/// Attributes the resolvers and taxonomy ask about
const FORM_ATTRS: &[&str] = &[
    "id", "class", "for", "form", "type", "name", "value", "action", "method",
];

/// String interner for deduplicating names
#[derive(Debug, Clone)]
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: HashMap<Box<str>, u32>,
}

impl StringInterner {
    /// Create a new interner with the form vocabulary pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::with_capacity(64),
            map: HashMap::with_capacity(64),
        };

        interner.intern("");
        for name in FORM_TAGS.iter().chain(FORM_ATTRS) {
            interner.intern(name);
        }

        interner
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&idx) = self.map.get(s) {
            return InternedString(idx);
        }

        let idx = self.strings.len() as u32;
        self.strings.push(s.into());
        self.map.insert(s.into(), idx);
        InternedString(idx)
    }

    /// Look up a string without interning it
    #[inline]
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        self.strings.get(id.0 as usize).map_or("", |s| s)
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
