//! Session-scoped memoization of call results

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::ast::CallTarget;

/// Structural identity of one call: target plus fully-reduced argument values
///
/// The arguments are the values the sub-expressions reduced to, never the
/// sub-expressions themselves, so two syntactically different argument trees
/// that reduce to the same value produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallKey {
    target: CallTarget,
    args: SmallVec<[i64; 4]>,
}

impl CallKey {
    /// Build a key from a call target and reduced argument values
    pub fn new(target: CallTarget, args: SmallVec<[i64; 4]>) -> Self {
        Self { target, args }
    }

    /// The call target
    pub fn target(&self) -> &CallTarget {
        &self.target
    }

    /// The reduced argument values
    pub fn args(&self) -> &[i64] {
        &self.args
    }
}

impl fmt::Display for CallKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.target)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// Call-result cache owned by a single evaluation session
///
/// Created empty at the start of one `evaluate` invocation and dropped when
/// it returns, whether it succeeds or faults. Never shared between sessions.
#[derive(Debug, Default)]
pub struct CallCache {
    entries: FxHashMap<CallKey, i64>,
}

impl CallCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Look up a previously stored result
    pub fn get(&self, key: &CallKey) -> Option<i64> {
        self.entries.get(key).copied()
    }

    /// Store the result of a completed invocation
    pub fn insert(&mut self, key: CallKey, value: i64) {
        self.entries.insert(key, value);
    }

    /// Number of memoized calls
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any call has been memoized yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
