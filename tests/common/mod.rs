#![allow(dead_code)]

use sac::Toolchain;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Shell-script stand-ins for `go` and `make` that append every call to a log file.
pub struct StubToolchain {
    dir: TempDir,
    log: PathBuf,
}

impl StubToolchain {
    pub fn new() -> Self {
        Self::failing_on(None)
    }

    /// `fail_on` is matched against the full call line, e.g. `"go mod init"` prefix.
    pub fn failing_on(fail_on: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("calls.log");
        fs::write(&log, "").unwrap();

        let write_go_mod = "if [ \"$1 $2\" = \"mod init\" ]; then echo \"module $3\" > go.mod; fi";
        write_stub(dir.path(), "go", &log, fail_on, write_go_mod);
        write_stub(dir.path(), "make", &log, fail_on, "");

        Self { dir, log }
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            go: self.dir.path().join("go").to_string_lossy().into_owned(),
            make: self.dir.path().join("make").to_string_lossy().into_owned(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn write_stub(dir: &Path, tool: &str, log: &Path, fail_on: Option<&str>, extra: &str) {
    let fail_check = match fail_on {
        Some(prefix) => format!(
            "case \"{tool} $*\" in \"{prefix}\"*) exit 1 ;; esac\n"
        ),
        None => String::new(),
    };
    let script = format!(
        "#!/bin/sh\necho \"{tool} $*\" >> \"{}\"\n{fail_check}{extra}\nexit 0\n",
        log.display()
    );
    let path = dir.join(tool);
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

pub fn settings_with(toolchain: Toolchain) -> sac::Settings {
    sac::Settings {
        toolchain,
        ..Default::default()
    }
}
