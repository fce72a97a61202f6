use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::fmt;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Download and upload Thetawave assets to our S3 bucket.",
    long_about = "Download and upload Thetawave assets to our S3 bucket. \
                  This wraps the `aws s3 sync` command, so the AWS CLI must be installed \
                  and credentials set up as described in CONTRIBUTING.md."
)]
pub struct Cli {
    /// The operation to do on the Thetawave S3 bucket.
    pub command: Operation,

    /// The AWS profile used to access the Thetawave bucket.
    /// If omitted, the AWS CLI's own credential chain decides which credentials are used.
    #[arg(long)]
    pub profile: Option<String>,

    /// Only print the files that would be copied, without copying them. This is the default.
    #[arg(long, overrides_with = "no_dryrun")]
    pub dryrun: bool,

    /// Actually copy the files to or from S3.
    #[arg(long, overrides_with = "dryrun")]
    pub no_dryrun: bool,

    /// Whether to sync the free or the premium assets.
    #[arg(long, default_value = "free_assets")]
    pub s3_location: AssetTier,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Cli {
    pub fn dry_run(&self) -> bool {
        self.dryrun || !self.no_dryrun
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Copy the bucket's contents into the local assets directory.
    Download,
    /// Copy the local assets directory into the bucket.
    Upload,
}

/// The free and premium assets are separate prefixes in the same bucket.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetTier {
    #[value(name = "free_assets")]
    Free,
    #[value(name = "premium_assets")]
    Premium,
}

impl AssetTier {
    pub fn prefix(self) -> &'static str {
        match self {
            AssetTier::Free => "free_assets",
            AssetTier::Premium => "premium_assets",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Download => f.write_str("download"),
            Operation::Upload => f.write_str("upload"),
        }
    }
}
