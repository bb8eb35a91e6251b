// Windows variant: exercises the reason-code dispatch directly, standing in
// for the loader. The stand-in agent routine sleeps before signalling, so a
// handler that (incorrectly) ran it inline would blow the return-time bound.

#![cfg(windows)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

use tripwire::platform::win32::module_event;
use windows::Win32::System::SystemServices::{
    DLL_PROCESS_ATTACH, DLL_PROCESS_DETACH, DLL_THREAD_ATTACH, DLL_THREAD_DETACH,
};

/// How long the stand-in agent dawdles before signalling.
const AGENT_DELAY: Duration = Duration::from_millis(100);

/// Times the stand-in agent has completed.
static CALLS: AtomicU32 = AtomicU32::new(0);

/// Thread the stand-in agent most recently ran on.
static LAST_THREAD: Mutex<Option<ThreadId>> = Mutex::new(None);

/// Serializes the tests; both mutate the shared counter.
static MUTATE: Mutex<()> = Mutex::new(());

#[no_mangle]
extern "C" fn agent_main() {
    thread::sleep(AGENT_DELAY);
    *LAST_THREAD.lock().unwrap() = Some(thread::current().id());
    CALLS.fetch_add(1, Ordering::SeqCst);
}

/// Poll until `CALLS` passes `target` or the deadline expires.
fn wait_for_calls(target: u32, deadline: Duration) -> bool {
    let t0 = Instant::now();
    while CALLS.load(Ordering::SeqCst) < target {
        if t0.elapsed() > deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(5));
    }
    true
}

#[test]
fn process_attach_spawns_agent_without_blocking() {
    let _guard = MUTATE.lock().unwrap();
    let before = CALLS.load(Ordering::SeqCst);

    let t0 = Instant::now();
    module_event(DLL_PROCESS_ATTACH);
    let returned_in = t0.elapsed();

    // The handler must come back long before the agent's 100ms delay ends.
    assert!(
        returned_in < Duration::from_millis(50),
        "attach handler blocked for {returned_in:?}"
    );

    // …and the agent must still land, on a thread that is not ours.
    assert!(
        wait_for_calls(before + 1, Duration::from_millis(500)),
        "agent routine never ran"
    );
    assert_eq!(CALLS.load(Ordering::SeqCst), before + 1);
    assert_ne!(*LAST_THREAD.lock().unwrap(), Some(thread::current().id()));
}

#[test]
fn non_attach_reasons_are_inert() {
    let _guard = MUTATE.lock().unwrap();
    let before = CALLS.load(Ordering::SeqCst);

    for reason in [DLL_PROCESS_DETACH, DLL_THREAD_ATTACH, DLL_THREAD_DETACH] {
        module_event(reason);
    }

    // Give a wrongly spawned agent (100ms delay) ample time to show up.
    thread::sleep(Duration::from_millis(300));
    assert_eq!(
        CALLS.load(Ordering::SeqCst),
        before,
        "a non-attach reason triggered the agent"
    );
}
