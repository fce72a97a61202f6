use crate::{
    cli::{AssetTier, Cli, Operation},
    config::Config,
    err::SyncError,
};
use console::style;
use log::{debug, info, warn};
use std::{
    fmt,
    process::{Command, Stdio},
};

/// File types that never leave or enter the bucket through this tool.
const EXCLUDED: [&str; 2] = ["*.ron", "*.gif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOptions {
    pub operation: Operation,
    pub tier: AssetTier,
    pub profile: Option<String>,
    pub dry_run: bool,
}

impl From<&Cli> for InvocationOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            operation: cli.command,
            tier: cli.s3_location,
            profile: cli.profile.clone(),
            dry_run: cli.dry_run(),
        }
    }
}

impl InvocationOptions {
    pub fn validate(&self) -> Result<(), SyncError> {
        match (self.tier, self.operation) {
            (AssetTier::Premium, Operation::Upload) => Err(SyncError::PremiumUpload),
            _ => Ok(()),
        }
    }
}

/// A fully assembled `aws s3 sync` command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn build(options: &InvocationOptions, config: &Config) -> Result<Self, SyncError> {
        options.validate()?;

        let remote = format!("s3://{}/{}/", config.bucket, options.tier.prefix());
        let local = config.local_dir.clone();

        let (source, destination) = match options.operation {
            Operation::Download => (remote, local),
            Operation::Upload => (local, remote),
        };

        let mut args = Vec::new();

        if let Some(profile) = options.profile.as_deref().filter(|p| !p.is_empty()) {
            args.extend(["--profile".to_string(), profile.to_string()]);
        }

        args.extend(["s3".to_string(), "sync".to_string()]);

        for pattern in EXCLUDED.iter().copied().chain(config.exclude.iter().map(String::as_str)) {
            args.extend(["--exclude".to_string(), pattern.to_string()]);
        }

        if options.dry_run {
            args.push("--dryrun".to_string());
        }

        args.extend([source, destination]);

        Ok(Self {
            program: config.aws_cli.clone(),
            args,
        })
    }

    /// Runs the command with the parent's stdout and stderr, blocking until it exits.
    pub fn run(&self) -> Result<(), SyncError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SyncError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!("{} exited with {status}", self.program);

        if !status.success() {
            return Err(SyncError::Exit {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub fn sync(options: InvocationOptions, config: &Config) -> anyhow::Result<()> {
    info!("Running asset operation with {options:?}");

    let invocation = Invocation::build(&options, config)?;

    info!("Running command: {invocation}");
    invocation.run()?;

    if options.dry_run {
        warn!(
            "The asset manager ran with --dryrun, so no files were {}ed. Rerun with {} to actually sync them.",
            options.operation,
            style("--no-dryrun").green()
        );
    }

    Ok(())
}
