// ── Platform variants ─────────────────────────────────────────────────────────
//
// Exactly one sub-module compiles for a given target; the selection is fixed
// at build time, never branched at runtime. Each variant registers this
// crate's one capability — "trigger the agent routine when the loader maps
// the module" — through its platform's native lifecycle mechanism.
//
// All `unsafe` in the crate lives in these sub-modules (and in `agent`) and
// never leaks outward.

#[cfg(all(unix, not(target_vendor = "apple")))]
pub mod elf;

#[cfg(target_vendor = "apple")]
pub mod macho;

#[cfg(windows)]
pub mod win32;
