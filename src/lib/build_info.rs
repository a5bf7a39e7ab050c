//! Build metadata captured by `built` at compile time.

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Short label for the commit the bundle was built from.
pub fn git_commit_hash() -> &'static str {
    match built_info::GIT_COMMIT_HASH_SHORT {
        Some(hash) if !hash.is_empty() => hash,
        _ => "unknown",
    }
}

/// Crate version baked into the bundle.
pub fn version() -> &'static str {
    built_info::PKG_VERSION
}
