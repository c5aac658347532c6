//! Integration tests for chroma-rs crates.
//!
//! End-to-end checks of the node contract across chroma-core and
//! chroma-nodes: identity parameters, dimension preservation, output
//! range, and host-boundary validation.
