//! Placeholder file contents.
//!
//! Everything here is a pure function of the project name (and the copyright
//! year), so the whole set can be checked without touching disk.

use crate::paths;
use crate::project::log_file_name;

/// Ignore rules, identical for every project.
pub const GITIGNORE: &str = "__pycache__/
*.code
*.vscode
*.idea
*local_env
*venv
*.venv
";

pub const REQUIREMENTS: &str = "requests\n";

pub const INIT_PY: &str = "# Initialization file for the package\n";

pub const TEST_MAIN_PY: &str = "import pytest\n\ndef test_example():\n    assert True\n";

pub fn readme(name: &str) -> String {
    format!("# {}\n", name)
}

pub fn pyproject_toml(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
version = "0.1.0"
description = "A Python project"
authors = [{{ name = "Your Name", email = "your.email@example.com" }}]
license = "MIT"
dependencies = []

[build-system]
requires = ["setuptools>=42", "wheel"]
build-backend = "setuptools.build_meta"
"#
    )
}

pub fn license(name: &str, year: i32) -> String {
    format!(
        r#"MIT License

Copyright (c) {year} {name}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}

/// Entry point with file + console logging into `logs/<log name>`.
pub fn main_py(name: &str) -> String {
    let log_name = log_file_name(name);
    format!(
        r#"import logging
import os

# Logging configuration
script_dir = os.path.dirname(__file__)
logs_path = os.path.join(script_dir, "..", "..", "logs", "{log_name}")

logger = logging.getLogger(__name__)
logger.setLevel(logging.DEBUG)

formatter = logging.Formatter("%(asctime)s - %(levelname)s - %(message)s")

file_handler = logging.FileHandler(logs_path, mode="a")
file_handler.setLevel(logging.INFO)
file_handler.setFormatter(formatter)

stream_handler = logging.StreamHandler()
stream_handler.setFormatter(formatter)

logger.addHandler(file_handler)
logger.addHandler(stream_handler)


def main():
    logger.info("Application started.")


if __name__ == "__main__":
    main()
"#
    )
}

/// Relative path → content for every placeholder file, in write order.
pub fn placeholder_set(name: &str, year: i32) -> Vec<(String, String)> {
    let app = paths::manifest_dir("app").unwrap_or("src/app");
    let tests = paths::manifest_dir("tests").unwrap_or("src/tests");

    vec![
        ("README.md".to_string(), readme(name)),
        (".gitignore".to_string(), GITIGNORE.to_string()),
        ("LICENSE".to_string(), license(name, year)),
        ("pyproject.toml".to_string(), pyproject_toml(name)),
        ("requirements.txt".to_string(), REQUIREMENTS.to_string()),
        (format!("cmd/{}.cmd", name), "@echo off\n".to_string()),
        (format!("config/{}.env", name), "KEY=Value\n".to_string()),
        (paths::LOG_LEVELS_FILE.to_string(), "INFO\n".to_string()),
        (format!("{}/main.py", app), main_py(name)),
        (format!("{}/__init__.py", app), INIT_PY.to_string()),
        (format!("{}/test_main.py", tests), TEST_MAIN_PY.to_string()),
    ]
}
