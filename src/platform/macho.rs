// ── Mach-O constructor registration ───────────────────────────────────────────
//
// Apple's dyld runs every pointer in the `__DATA,__mod_init_func` section
// when the image is loaded — the section the C compiler fills for
// `__attribute__((constructor))`. Same contract as the ELF variant: invoked
// once per load, before the host program's entry point, synchronously.

#![allow(unsafe_code)]

use libc::{c_char, c_int};

use crate::agent;

// SAFETY (linker section): `__mod_init_func` entries must be pointers to
// functions with the platform initializer ABI, which `startup` matches.
// `#[used]` keeps the slot alive through codegen even though nothing
// references it.
#[link_section = "__DATA,__mod_init_func"]
#[used]
static STARTUP_SLOT: extern "C" fn(c_int, *mut *mut c_char, *mut *mut c_char) = startup;

/// Constructor invoked by dyld at image load.
///
/// dyld passes the startup triple to image constructors; it is ignored and
/// the agent routine runs inline on the loading thread.
pub extern "C" fn startup(
    _argc: c_int,
    _argv: *mut *mut c_char,
    _envp: *mut *mut c_char,
) {
    agent::launch();
}
