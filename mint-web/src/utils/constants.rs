//! Application constants

/// Placeholder element in index.html removed once the app mounts
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
