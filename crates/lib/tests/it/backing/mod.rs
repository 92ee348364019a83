//! Backing store integration tests
//!
//! Reference stores, recorders, and journal replay driven through the views.
