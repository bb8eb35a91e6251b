// ── Windows attach handler ────────────────────────────────────────────────────
//
// The loader invokes `DllMain` while holding the process-wide loader lock.
// Anything the agent routine is likely to do — network I/O, loading further
// modules, synchronization — can try to re-acquire that lock, so the routine
// MUST NOT run inline here. Process attach therefore only spawns a detached
// thread and returns; the agent runs entirely outside the callback.

#![allow(unsafe_code)]

use core::ffi::c_void;
use std::thread;

use windows::Win32::{
    Foundation::{BOOL, HINSTANCE, TRUE},
    System::SystemServices::{
        DLL_PROCESS_ATTACH, DLL_PROCESS_DETACH, DLL_THREAD_ATTACH, DLL_THREAD_DETACH,
    },
};

use crate::agent;

/// Name given to the detached agent thread (visible in debuggers).
const AGENT_THREAD_NAME: &str = "agent-entry";

/// Module lifecycle callback, invoked by the Windows loader.
///
/// Always reports success: even if the agent thread cannot be created the
/// module keeps loading and the host process is left undisturbed.
// SAFETY (exported symbol): called by the loader only, per the DllMain
// contract; never called manually from Rust code.
#[no_mangle]
#[allow(non_snake_case)]
extern "system" fn DllMain(_module: HINSTANCE, reason: u32, _reserved: *mut c_void) -> BOOL {
    module_event(reason);
    TRUE
}

/// Dispatch one loader reason code.
///
/// Public so the behavior can be exercised without the real loader; the
/// loader itself guarantees process attach fires once per process, so no
/// guard state is kept here and repeated calls re-trigger deliberately.
pub fn module_event(reason: u32) {
    match reason {
        DLL_PROCESS_ATTACH => spawn_agent_thread(),
        // Reserved hook points; intentionally inert.
        DLL_PROCESS_DETACH | DLL_THREAD_ATTACH | DLL_THREAD_DETACH => {}
        _ => {}
    }
}

/// Fire-and-forget: the handle is dropped immediately, so the thread is
/// detached and never joined or cancelled by this crate.
fn spawn_agent_thread() {
    let spawned = thread::Builder::new()
        .name(AGENT_THREAD_NAME.to_owned())
        .spawn(agent::launch);

    // Fail-silent policy: a process without the agent is preferable to a
    // process that fails to load the module. Debug builds still say so.
    if let Err(_e) = spawned {
        #[cfg(debug_assertions)]
        eprintln!("tripwire: agent thread creation failed: {_e}");
    }
}
