mod raw {
    // See https://docs.rs/built/latest/built/index.html for the full list of constants in built.rs.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// gc-observer crate version such as 0.1.0
pub const OBSERVER_PKG_VERSION: &str = raw::PKG_VERSION;

/// Comma separated features enabled for this build
pub const OBSERVER_FEATURES: &str = raw::FEATURES_STR;

lazy_static! {
    /// Git version such as a96e8f991c91a81df51e7975849441f52fdbcdcc, or a96e8f991c91a81df51e7975849441f52fdbcdcc-dirty,
    /// or unknown-git-version if the crate is not built from a git repo.
    pub static ref OBSERVER_GIT_VERSION: &'static str = &OBSERVER_GIT_VERSION_STRING;

    // Owned string
    static ref OBSERVER_GIT_VERSION_STRING: String = match (raw::GIT_COMMIT_HASH, raw::GIT_DIRTY) {
        (Some(hash), dirty) => format!("{}{}", hash, if dirty == Some(true) { "-dirty" } else { "" }),
        (None, _) => "unknown-git-version".to_string(),
    };

    /// Full build info, including the crate version, the git version and the enabled features.
    pub static ref OBSERVER_FULL_BUILD_INFO: String = format!(
        "gc-observer {} ({}, features: {})",
        OBSERVER_PKG_VERSION, *OBSERVER_GIT_VERSION, OBSERVER_FEATURES
    );
}
