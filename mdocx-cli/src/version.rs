// ABOUTME: Version and build information for the version command
// ABOUTME: Commit and build date are stamped in at compile time when available

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("MDOCX_GIT_COMMIT").unwrap_or(UNKNOWN),
            build_date: option_env!("MDOCX_BUILD_DATE").unwrap_or(UNKNOWN),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "mdocx {}\nCommit: {}\nBuilt:  {}\n\n© 2026, Logicos Software",
            self.version, self.commit, self.build_date
        )
    }
}
