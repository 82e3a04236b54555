//! Shared service test harness.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
