/// Tripwire build script.
///
/// Sole role: report when the crate is compiled for a target none of the
/// three platform variants covers. An unsupported target is not an error —
/// the library then compiles to nothing meaningful and the loadable module
/// simply carries no load-time trigger.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let target_vendor = std::env::var("CARGO_CFG_TARGET_VENDOR").unwrap_or_default();
    let target_family = std::env::var("CARGO_CFG_TARGET_FAMILY").unwrap_or_default();

    // Recognized targets, mirroring the cfg gates in src/platform/mod.rs:
    //   windows          → DllMain callback
    //   apple            → Mach-O constructor list
    //   any other unix   → ELF .init_array
    let recognized = target_os == "windows"
        || target_vendor == "apple"
        || target_family.split(',').any(|f| f == "unix");

    if !recognized {
        println!(
            "cargo:warning=tripwire has no bootstrap variant for this target \
             (CARGO_CFG_TARGET_OS = {target_os:?}); the entry routine will \
             never be triggered"
        );
    }

    // Only re-run the build script when it changes.
    println!("cargo:rerun-if-changed=build.rs");
}
