//! Test modules for the comment-stripping scanner

mod api;
