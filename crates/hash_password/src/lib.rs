//! One-shot password digest report.
//!
//! The binary takes an optional secret, hashes it with bcrypt at a fixed cost, and prints a
//! bordered report with the secret and its digest.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use thiserror::Error;

/// Secret hashed when no argument is given.
pub const DEFAULT_SECRET: &str = "admin123";

/// bcrypt work factor (log2 of the key expansion rounds).
pub const COST: u32 = 10;

const SECRET_LABEL: &str = "Contraseña:";
const HASH_LABEL: &str = "Hash:";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by the CLI.
pub enum HashError {
    /// The command line could not be understood.
    #[error("{0}")]
    Usage(String),
    /// Hashing failed.
    #[error("could not hash secret: {0}")]
    Digest(String),
}

impl HashError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Digest(_) => 1,
        }
    }
}

/// Parsed command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Hash `secret` and print the report.
    Hash {
        /// Secret to hash.
        secret: String,
    },
    /// Print usage.
    Help,
}

/// Parses arguments after the program name.
///
/// The first argument is the secret, taken verbatim even when it starts with `-`. A lone
/// `--help` prints usage instead.
///
/// # Errors
///
/// Returns [`HashError::Usage`] when more than one argument is given.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, HashError> {
    let mut args = args.into_iter();
    let Some(secret) = args.next() else {
        return Ok(Command::Hash {
            secret: DEFAULT_SECRET.to_string(),
        });
    };
    if let Some(extra) = args.next() {
        return Err(HashError::Usage(format!("unexpected argument: {extra}")));
    }
    if secret == "--help" {
        return Ok(Command::Help);
    }
    Ok(Command::Hash { secret })
}

/// Hashes `secret` at [`COST`] with a fresh random salt.
///
/// # Errors
///
/// Returns [`HashError::Digest`] when hashing fails.
pub fn digest(secret: &str) -> Result<String, HashError> {
    bcrypt::hash(secret, COST).map_err(|err| HashError::Digest(err.to_string()))
}

/// Whether `hash` is a valid digest of `secret`.
pub fn verify(secret: &str, hash: &str) -> bool {
    bcrypt::verify(secret, hash).unwrap_or(false)
}

/// Secret plus digest, printed as a bordered block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// The hashed secret, echoed verbatim.
    pub secret: String,
    /// bcrypt digest in modular crypt format.
    pub hash: String,
}

impl Report {
    /// Hashes `secret` into a report.
    ///
    /// # Errors
    ///
    /// Propagates [`digest`] failures.
    pub fn generate(secret: &str) -> Result<Self, HashError> {
        Ok(Self {
            secret: secret.to_string(),
            hash: digest(secret)?,
        })
    }

    fn lines(&self) -> [String; 2] {
        let width = SECRET_LABEL.chars().count();
        [
            format!("{SECRET_LABEL} {}", self.secret),
            format!("{HASH_LABEL:<width$} {}", self.hash),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        let inner = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let border = format!("+{}+", "-".repeat(inner + 2));
        writeln!(f, "{border}")?;
        for line in &lines {
            let pad = inner - line.chars().count();
            writeln!(f, "| {line}{} |", " ".repeat(pad))?;
        }
        write!(f, "{border}")
    }
}

/// Usage text.
pub fn usage() -> &'static str {
    "Usage: hash_password [SECRET]\n\
     \n\
     Hashes SECRET (default: admin123) with bcrypt and prints the report.\n\
     A lone --help prints this text.\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    fn field<'a>(rendered: &'a str, label: &str) -> Option<&'a str> {
        rendered.lines().find_map(|line| {
            let body = line.trim_start_matches('|').trim_end_matches('|').trim();
            body.strip_prefix(label).map(str::trim)
        })
    }

    #[test]
    fn no_argument_hashes_the_default_secret() {
        let command = parse_args(Vec::new()).expect("parse");
        let Command::Hash { secret } = command else {
            panic!("expected hash command");
        };
        let report = Report::generate(&secret).expect("digest");
        let rendered = report.to_string();

        assert_eq!(field(&rendered, SECRET_LABEL), Some(DEFAULT_SECRET));
        assert!(field(&rendered, HASH_LABEL).is_some_and(|hash| hash.starts_with("$2b$10$")));
    }

    #[test]
    fn digest_verifies_against_the_secret() {
        let hash = digest("s3cret").expect("digest");
        assert!(verify("s3cret", &hash));
        assert!(!verify("other", &hash));
        assert!(!verify("s3cret", "not-a-bcrypt-digest"));
    }

    #[test]
    fn salts_differ_between_runs() {
        let first = digest("same").expect("digest");
        let second = digest("same").expect("digest");
        assert_ne!(first, second);
    }

    #[test]
    fn parse_accepts_one_positional_secret() {
        assert_eq!(
            parse_args(args(&["hunter2"])),
            Ok(Command::Hash {
                secret: "hunter2".to_string()
            })
        );
        assert_eq!(parse_args(args(&["--help"])), Ok(Command::Help));
    }

    #[test]
    fn dash_prefixed_secrets_are_hashed_verbatim() {
        for raw in ["-p@ss", "-h", "--help-me", "-"] {
            assert_eq!(
                parse_args(args(&[raw])),
                Ok(Command::Hash {
                    secret: raw.to_string()
                })
            );
        }

        let hash = digest("-p@ss").expect("digest");
        assert!(verify("-p@ss", &hash));
    }

    #[test]
    fn parse_rejects_extra_arguments() {
        let extra = parse_args(args(&["a", "b"])).unwrap_err();
        assert_eq!(extra, HashError::Usage("unexpected argument: b".to_string()));
        assert_eq!(extra.exit_code(), 2);

        let help_with_secret = parse_args(args(&["--help", "x"])).unwrap_err();
        assert_eq!(help_with_secret.exit_code(), 2);
    }

    #[test]
    fn digest_failures_exit_with_one() {
        assert_eq!(HashError::Digest("boom".to_string()).exit_code(), 1);
    }

    #[test]
    fn report_border_fits_the_widest_line() {
        let report = Report {
            secret: "ñandú".to_string(),
            hash: "abc".to_string(),
        };
        let rendered = report.to_string();
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();

        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|width| *width == widths[0]));
        assert_eq!(
            rendered.lines().nth(2),
            Some("| Hash:       abc   |")
        );
    }
}
