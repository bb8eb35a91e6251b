// ── Agent routine seam ────────────────────────────────────────────────────────
//
// The entry routine this shim exists to trigger. It is not part of this
// crate: the embedding build supplies the symbol at link time, exactly like
// any other C-ABI external. The shim assumes nothing about it beyond
// "callable with no arguments" — no return value is read, no panic is
// caught, no completion is awaited.

#![allow(unsafe_code)]

extern "C" {
    /// Externally defined entry routine, resolved when the final loadable
    /// module is linked.
    fn agent_main();
}

/// Hand control to the agent routine.
///
/// Blocks the calling thread until the routine's initial entry returns (or
/// forever, if it never does — its lifetime is deliberately unmanaged here).
pub(crate) fn launch() {
    // SAFETY: `agent_main` takes no arguments and its contract requires it
    // to be callable from a fresh thread or from early process startup with
    // no prior initialization. The embedding build guarantees the symbol
    // exists.
    unsafe { agent_main() }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    static CALLS: AtomicU32 = AtomicU32::new(0);

    /// Stand-in entry routine; satisfies the link-time `agent_main` symbol
    /// for this crate's own test harness.
    #[no_mangle]
    extern "C" fn agent_main() {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn launch_calls_the_routine_synchronously() {
        // Delta-based: on unix targets the initializer in this very test
        // binary has already fired once before `main`.
        let before = CALLS.load(Ordering::SeqCst);
        super::launch();
        assert_eq!(CALLS.load(Ordering::SeqCst), before + 1);
    }
}
