//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_plan(plans::MKDIR_ONLY);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::plans;
    pub use super::TestFixture;
}

/// Common plan file snippets for testing.
#[allow(dead_code)]
pub mod plans {
    /// A single directory creation.
    pub const MKDIR_ONLY: &str = r#"
operations:
  - mkdir: new_dir
"#;

    /// The full dotfile scenario: removals, a rename, links, and a copy.
    pub const DOTFILES: &str = r#"
operations:
  - remove: delete_file
  - remove: delete_folder
  - move: { source: rename, dest: renamed }
  - link: { source: dir1/file1, dest: link1 }
  - link: { source: dir1/file1, dest: link_dir/link1 }
  - mkdir: new_dir
  - copy: { source: dir1/file1, dest: copy_dir/file }
"#;

    /// A plan whose second step fails.
    pub const FAILS_MIDWAY: &str = r#"
operations:
  - mkdir: before
  - copy: { source: missing, dest: copied }
  - mkdir: after
"#;

    /// A step kind the plan format does not know.
    pub const UNKNOWN_STEP: &str = r#"
operations:
  - chmod: file
"#;

    /// Empty plan (comments only).
    pub const EMPTY: &str = "# nothing to do\n";
}

/// A test fixture that provides a temporary working directory with an
/// optional `plan.yaml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `plan.yaml` file with the given content.
    pub fn with_plan(self, content: &str) -> Self {
        self.temp_dir
            .child("plan.yaml")
            .write_str(content)
            .expect("Failed to write plan file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Create the existing entries the `DOTFILES` plan expects.
    pub fn with_dotfiles_tree(self) -> Self {
        self.with_file("dir1/file1", "file1")
            .with_file("delete_file", "")
            .with_file("delete_folder/file", "")
            .with_file("rename", "original")
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the plan file.
    pub fn plan_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("plan.yaml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
