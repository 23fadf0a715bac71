//! HTML fragments served by the gateway.
//!
//! The fragment shapes are a stable interface: an `<h1>` naming the backend
//! and the count that was read, then a `<dl>` with the three durations in
//! fixed order (read, write, total), each suffixed `ms`.

use std::fmt::Write;

use kvbench_core::IncrementOutcome;

pub fn increment_fragment(outcome: &IncrementOutcome) -> String {
    let sample = outcome.sample;
    let mut out = String::new();
    let _ = write!(out, "<h1>Counter from {} [{}]</h1>", outcome.backend, outcome.count);
    let _ = write!(out, "<dl>");
    for (label, d) in [
        ("Read duration", sample.read),
        ("Write duration", sample.write),
        ("Total duration", sample.total),
    ] {
        let _ = write!(out, "<dt>{}</dt><dd>{}ms</dd>", label, d.as_millis());
    }
    let _ = write!(out, "</dl>");
    out
}

pub fn reset_fragment() -> &'static str {
    "<h1>Reset counter</h1>"
}
