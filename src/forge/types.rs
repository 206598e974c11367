//! Forge data types.

/// A repository created on the forge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    /// Account that owns the repository
    pub owner_login: String,
    pub name: String,
    /// HTTPS clone URL, used as the `origin` remote
    pub clone_url: String,
}

impl RemoteRepo {
    /// Conventional GitHub HTTPS clone URL for `owner/name`.
    pub fn github_clone_url(owner: &str, name: &str) -> String {
        format!("https://github.com/{}/{}.git", owner, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_clone_url() {
        assert_eq!(
            RemoteRepo::github_clone_url("someone", "demo"),
            "https://github.com/someone/demo.git"
        );
    }
}
