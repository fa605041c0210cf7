//! Core decision logic.
//!
//! Services contain the gate's pure logic separated from HTTP plumbing, so it
//! can be exercised in tests without a live server.

pub mod authz;
