//! Standard-input reader with a fault-injection hook for tests.
//!
//! A successful read hands back the raw bytes plus the fixed origin name (`STDIN`) used in every
//! diagnostic. The only failure mode modelled is "the read itself failed" — this is an I/O
//! surface, not a buffering layer, so partial reads and retries are out of scope.

use std::io::{self, Read};

/// Name every diagnostic anchors its byte offsets to; standard input has no path of its own.
pub const ORIGIN: &str = "STDIN";

/// Comma-separated fault names recognised in `INJECTED_FAULTS`.
const FAULT_ENV_VAR: &str = "INJECTED_FAULTS";
const UNREADABLE_BANGS: &str = "unreadable-bangs";

pub fn read_stdin() -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .map_err(|err| format!("Error reading {ORIGIN}: {err}"))?;

    if fault_enabled(UNREADABLE_BANGS) && buf.contains(&b'!') {
        return Err(format!(
            "Error reading {ORIGIN}: simulated I/O failure (unreadable-bangs fault, '!' byte present)"
        ));
    }

    Ok(buf)
}

fn fault_enabled(name: &str) -> bool {
    std::env::var(FAULT_ENV_VAR)
        .ok()
        .is_some_and(|value| value.split(',').any(|f| f == name))
}
