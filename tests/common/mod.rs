use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::{fixture::ChildPath, prelude::*, TempDir};
use std::{fs, os::unix::fs::PermissionsExt};

/// Stands in for the AWS CLI: records one argument per line and exits with
/// `FAKE_AWS_EXIT` (default 0).
const FAKE_AWS: &str = r#"#!/bin/sh
printf '%s\n' "$@" > aws-args.txt
echo "fake aws: $*"
exit "${FAKE_AWS_EXIT:-0}"
"#;

pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project whose config points `aws_cli` at the fake script.
    pub fn with_fake_aws() -> Self {
        let project = Self::new();
        let script = project.install_fake_aws();
        let mut config = toml::Table::new();
        config.insert(
            "aws_cli".into(),
            script.path().display().to_string().into(),
        );
        project.write_config(config);
        project
    }

    pub fn install_fake_aws(&self) -> ChildPath {
        let script = self.dir.child("fake-aws.sh");
        script.write_str(FAKE_AWS).unwrap();
        fs::set_permissions(script.path(), fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    pub fn write_config(&self, contents: toml::Table) {
        self.dir
            .child("thetawave-assets.toml")
            .write_str(&contents.to_string())
            .unwrap();
    }

    pub fn aws_args(&self) -> ChildPath {
        self.dir.child("aws-args.txt")
    }

    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.aws_args().path())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn run(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!();
        cmd.env_remove("FAKE_AWS_EXIT");
        cmd.current_dir(self.dir.path());
        cmd
    }
}
