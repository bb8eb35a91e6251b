//! Tripwire — a load-time bootstrap shim for loadable modules.
//!
//! Link this crate into a dynamic library (DLL / shared object / dylib) and
//! it arranges for an externally supplied entry routine, `agent_main`, to be
//! called the moment the operating system's loader finishes mapping the
//! module into a process. The embedding build defines `agent_main` (an
//! `extern "C"` function taking no arguments); this crate never inspects or
//! supervises it.
//!
//! One platform variant compiles per target, selected at build time:
//!
//! * **Windows** — a `DllMain` callback. On process attach it spawns one
//!   detached thread to run the entry routine and returns immediately, since
//!   the loader holds a process-wide lock for the duration of the callback.
//! * **ELF unix** — a function pointer in the `.init_array` section, invoked
//!   by the program loader before `main`. The entry routine runs inline on
//!   the startup thread.
//! * **Mach-O (Apple)** — a Mach-O constructor, same contract as ELF.
//!
//! The once-per-process guarantee comes entirely from the host loader; the
//! shim keeps no guard state, reports nothing back, and never re-arms.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform` – loader lifecycle hooks (exported symbols, linker sections)
//   • `agent`    – the extern declaration of the link-time entry routine
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

mod agent;
pub mod platform;
