//! Inline Python snippets passed to the interpreter with `-c`.
//!
//! Every snippet must parse under any interpreter major version: the
//! probe cannot know ahead of time whether it is aiming at Python 2 or 3,
//! and a snippet that trips over the `print` statement/function split
//! would report a missing dependency for the wrong reason. Output goes
//! through `sys.stdout.write`, never `print`.

/// Exit status the version script uses for "attribute absent".
pub const MISSING_ATTRIBUTE_EXIT: i32 = 3;

/// Script that reports the interpreter's own runtime version.
pub const RUNTIME_VERSION: &str =
    "import sys\nsys.stdout.write('.'.join(str(c) for c in sys.version_info[:3]))\n";

/// Build the import-check script for a module.
pub fn import_check(module: &str) -> String {
    format!("import {}\n", module)
}

/// Build the version-print script for a module attribute.
///
/// Exits with [`MISSING_ATTRIBUTE_EXIT`] when the attribute is absent so
/// the caller can tell "module has no version attribute" from "module
/// failed to import".
pub fn version_print(module: &str, attribute: &str) -> String {
    let mut script = String::new();
    script.push_str("import sys\n");
    script.push_str(&format!("import {}\n", module));
    script.push_str(&format!("v = getattr({}, {:?}, None)\n", module, attribute));
    script.push_str("if v is None:\n");
    script.push_str(&format!("    sys.exit({})\n", MISSING_ATTRIBUTE_EXIT));
    script.push_str("sys.stdout.write(str(v))\n");
    script
}
