//! Cross-contract security invariant tests for the business verification
//! registry.

#![cfg_attr(not(test), no_std)]
