//! Common test utilities for wasmbuild tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// File the recording stub writes its arguments to
pub const ARGS_FILE: &str = "toolchain-args.txt";

/// File a stub `python3` creates if anything ever runs it
pub const SERVER_MARKER: &str = "server-was-started";

/// Write an executable script into `dir`
pub fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }

    path
}

/// A stub toolchain that records its arguments, writes to stderr and exits with `code`
pub fn stub_toolchain(dir: &Path, code: i32) -> PathBuf {
    let args_file = dir.join(ARGS_FILE);
    write_script(
        dir,
        "wasm-pack",
        &format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\necho 'stub toolchain running' >&2\nexit {}\n",
            args_file.display(),
            code
        ),
    )
}

/// A stub `python3` that leaves a marker file behind if it is ever executed
pub fn stub_server(dir: &Path) -> PathBuf {
    let marker = dir.join(SERVER_MARKER);
    write_script(
        dir,
        "python3",
        &format!("#!/bin/sh\ntouch '{}'\n", marker.display()),
    )
}

/// Arguments the stub toolchain received, one invocation per line
pub fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join(ARGS_FILE))
        .unwrap_or_default()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// A sandbox with its own HOME, config dir and working directory
pub struct Sandbox {
    pub root: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    pub bin: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let home = root.path().join("home");
        let project = root.path().join("project");
        let bin = root.path().join("bin");
        for dir in [&home, &project, &bin] {
            std::fs::create_dir_all(dir).expect("Failed to create sandbox dir");
        }
        Self {
            root,
            home,
            project,
            bin,
        }
    }

    /// `wasmbuild` isolated from the user's config, run inside `project`
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("wasmbuild").expect("binary should build");
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("WASMBUILD_BUILD__PROGRAM")
            .env_remove("WASMBUILD_BUILD__WORKING_DIR");
        cmd
    }

    /// `command()` with `bin` first on PATH
    pub fn command_with_path(&self) -> Command {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.bin.clone()];
        paths.extend(std::env::split_paths(&path));
        let joined = std::env::join_paths(paths).expect("valid PATH");

        let mut cmd = self.command();
        cmd.env("PATH", joined);
        cmd
    }
}

/// Exact stdout of a successful build
pub const SUCCESS_STDOUT: &str = "Building WASM...\n\
                                  Build complete. To run, use a local server, e.g.:\n\
                                  python3 -m http.server\n";

/// Exact stdout of a failed build
pub const FAILURE_STDOUT: &str = "Building WASM...\n";
