// ── ELF initializer registration ──────────────────────────────────────────────
//
// The program loader walks the `.init_array` section once, in order, before
// the host program's entry point runs. Placing a function pointer there is
// the ELF equivalent of `__attribute__((constructor))`: no call site exists
// anywhere, the loader finds the slot on its own.
//
// The C runtime may only be partially initialized when the walk happens;
// the agent routine's contract makes any deferred setup its own problem.

#![allow(unsafe_code)]

use libc::{c_char, c_int};

use crate::agent;

// SAFETY (linker section): `.init_array` entries must be pointers to
// functions with the platform initializer ABI, which `startup` matches.
// `#[used]` keeps the slot alive through codegen even though nothing
// references it.
#[link_section = ".init_array"]
#[used]
static STARTUP_SLOT: extern "C" fn(c_int, *mut *mut c_char, *mut *mut c_char) = startup;

/// Initializer invoked by the loader before `main`.
///
/// Receives the conventional startup triple and ignores it; the agent
/// routine runs inline, so host startup blocks until its initial entry
/// returns. That stall is an accepted cost of synchronous invocation on
/// this platform.
pub extern "C" fn startup(
    _argc: c_int,
    _argv: *mut *mut c_char,
    _envp: *mut *mut c_char,
) {
    agent::launch();
}
