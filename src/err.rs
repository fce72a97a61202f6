use std::{io, process::ExitStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(
        "Uploading premium assets is not supported by this tool. \
         Upload them by calling the AWS CLI directly."
    )]
    PremiumUpload,

    #[error("Failed to run `{program}`. Is the AWS CLI installed and on your PATH?")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited unsuccessfully ({status})")]
    Exit { program: String, status: ExitStatus },
}
