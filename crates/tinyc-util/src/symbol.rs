//! String interning.
//!
//! Identifiers and keyword lexemes are stored as interned [`Symbol`]s rather
//! than as owned `String`s, so that tokens and AST nodes stay small and
//! comparisons stay O(1). The table is append-only: strings are never
//! evicted, matching the frontend's "no mutation after construction"
//! lifecycle for everything it produces. It is process-wide and shared
//! across however many parses run concurrently, so it is built on
//! `DashMap` rather than a single global mutex: interning from one parse
//! never blocks interning from another.

use ahash::AHasher;
use dashmap::DashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

/// An interned string identifier.
///
/// Two symbols compare equal iff the strings they were interned from are
/// equal, regardless of when or from which [`Lexer`](../../tinyc_lex/struct.Lexer.html)
/// or `Parser` they were produced — the table is shared process-wide.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `text`, returning a handle stable for the life of the process.
    pub fn intern(text: &str) -> Self {
        table().intern(text)
    }

    /// Returns the original string this symbol was interned from.
    pub fn as_str(&self) -> &'static str {
        table().resolve(*self)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lock-free global string table, keyed by an `AHash` of the interned text.
///
/// Strings are leaked to `'static` on first insertion; the table only ever
/// grows. Collisions (two distinct strings hashing the same) are resolved
/// by linear probing over a small fixed number of offsets, which is enough
/// for a table that only ever holds one program's worth of identifiers.
struct Interner {
    map: DashMap<u64, (&'static str, u32)>,
    next_index: AtomicU32,
}

const MAX_PROBES: u64 = 32;
const PROBE_STRIDE: u64 = 0x9e3779b97f4a7c15;

impl Interner {
    fn intern(&self, text: &str) -> Symbol {
        let hash = Self::hash_of(text);
        for probe in 0..MAX_PROBES {
            let key = hash.wrapping_add(probe.wrapping_mul(PROBE_STRIDE));
            match self.map.entry(key) {
                dashmap::mapref::entry::Entry::Occupied(entry) => {
                    if entry.get().0 == text {
                        return Symbol(entry.get().1);
                    }
                    // Different string, same probe slot: keep probing.
                }
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
                    let index = self.next_index.fetch_add(1, Ordering::Relaxed);
                    entry.insert((leaked, index));
                    return Symbol(index);
                }
            }
        }
        unreachable!("interner probe sequence exhausted {MAX_PROBES} slots")
    }

    fn resolve(&self, symbol: Symbol) -> &'static str {
        self.map
            .iter()
            .find(|entry| entry.value().1 == symbol.0)
            .map(|entry| entry.value().0)
            .expect("resolved symbol was never interned")
    }

    fn hash_of(text: &str) -> u64 {
        let mut hasher = AHasher::default();
        text.hash(&mut hasher);
        hasher.finish()
    }
}

fn table() -> &'static Interner {
    static TABLE: LazyLock<Interner> = LazyLock::new(|| Interner {
        map: DashMap::new(),
        next_index: AtomicU32::new(0),
    });
    &TABLE
}
