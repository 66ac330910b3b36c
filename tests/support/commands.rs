//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a paramscan command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - NO_COLOR set so output can be compared verbatim
    /// - paramscan environment variables removed
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("paramscan").expect("failed to find paramscan binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("PARAMSCAN_LOG");
        cmd.env_remove("PARAMSCAN_REGION");
        cmd.env_remove("PARAMSCAN_ENDPOINT_URL");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for a scan of the snapshot for `value`.
    pub fn scan(&self, value: &str) -> Output {
        self.scan_with(value, &[])
    }

    /// Scan the snapshot for `value` with extra flags.
    pub fn scan_with(&self, value: &str, extra: &[&str]) -> Output {
        self.cmd()
            .arg("--from-file")
            .arg(self.snapshot_path())
            .args(["--delay-ms", "0", "--value", value])
            .args(extra)
            .output()
            .expect("failed to run paramscan")
    }
}
