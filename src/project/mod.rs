//! Project module - what is being scaffolded and where
//!
//! A [`ProjectSpec`] is built once from CLI input plus [`Config`](crate::config::Config)
//! and never changes afterwards.
//!
//! # Example
//!
//! ```no_run
//! use seedrepo::project::{Mode, ProjectSpec};
//!
//! let mode = Mode::from_flag("l").expect("valid mode");
//! let spec = ProjectSpec::new("demo", "/home/me/projects", mode)?;
//! println!("Project root: {}", spec.root().display());
//! # Ok::<(), seedrepo::SeedError>(())
//! ```

mod internal;

pub use internal::{log_file_name, Mode, ProjectSpec};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_root_joins_base_and_name() {
        let spec = ProjectSpec::new("demo", "/projects", Mode::Local).unwrap();
        assert_eq!(spec.root(), Path::new("/projects/demo"));
    }
}
