//! Typed endpoint wrappers, grouped by backend route family.
//!
//! Each wrapper is a pass-through: fixed path, fixed method, typed input
//! and output. Request types carrying validation rules are checked before
//! any network traffic.

mod auth;
mod clothing;
mod user;
mod weather;
