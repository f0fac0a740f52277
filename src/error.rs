use thiserror::Error;

#[derive(Error, Debug)]
pub enum LfsGuardError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{command}` exited with {status}: {stderr}")]
    Command {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository has no working directory")]
    NoWorkdir,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LfsGuardError>;
