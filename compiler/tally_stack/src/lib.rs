//! Stack safety for recursive parsing and evaluation.
//!
//! Two independent protections:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so deeply
//!   nested expressions (`((((...))))`) never overflow it.
//! - [`CallDepth`] counts user-function calls and refuses to go past a
//!   configured limit, turning runaway recursion (`f(x) = f(x)`) into an
//!   ordinary error on the calling line instead of unbounded memory growth.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack when less than the red
//!   zone remains.
//! - **WASM targets**: no-op passthrough (WASM manages its own stack).

use std::fmt;

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Default user-function call depth limit, close to JavaScript engine depth.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Returned by [`CallDepth::enter`] when the limit would be exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    pub limit: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maximum call depth exceeded (limit: {})", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}

/// Counter of active user-function calls.
///
/// `enter` before running a body, `exit` after it returns (on success or
/// failure). The counter never underflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallDepth {
    depth: usize,
    limit: usize,
}

impl CallDepth {
    pub fn new(limit: usize) -> Self {
        CallDepth { depth: 0, limit }
    }

    /// Record entry into a call.
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.depth >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    /// Record return from a call.
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Number of calls currently active.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for CallDepth {
    fn default() -> Self {
        CallDepth::new(DEFAULT_MAX_CALL_DEPTH)
    }
}

#[cfg(test)]
mod tests;
