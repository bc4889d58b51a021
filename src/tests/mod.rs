//! Internal test modules - whitebox tests with crate access.
//!
//! Cross-cutting tests that exercise the parse → navigate → project flow
//! end to end, plus property-based tests over path resolution and
//! expansion state.
