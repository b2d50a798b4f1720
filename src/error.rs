// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Playback(PlaybackError),
}

/// Specific error types for media playback issues.
///
/// The sequencer translates host playback rejections into these variants;
/// video rejections abort a running sequence, audio rejections degrade the
/// step to visual-only.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// The host refused to start video playback (autoplay policy, missing
    /// or unreadable asset).
    VideoStartRejected(String),

    /// The host refused to start audio playback. Recoverable: the step
    /// continues without sound.
    AudioStartRejected(String),

    /// A surface was asked to play without a source assigned.
    SourceMissing,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::VideoStartRejected(msg) => {
                write!(f, "video playback rejected: {}", msg)
            }
            PlaybackError::AudioStartRejected(msg) => {
                write!(f, "audio playback rejected: {}", msg)
            }
            PlaybackError::SourceMissing => write!(f, "no media source assigned"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn playback_error_wraps_into_error() {
        let err: Error = PlaybackError::VideoStartRejected("NotAllowedError".into()).into();
        match err {
            Error::Playback(PlaybackError::VideoStartRejected(message)) => {
                assert!(message.contains("NotAllowedError"));
            }
            _ => panic!("expected Playback variant"),
        }
    }

    #[test]
    fn playback_error_display() {
        let err = PlaybackError::AudioStartRejected("policy".into());
        assert_eq!(format!("{}", err), "audio playback rejected: policy");
        assert_eq!(
            format!("{}", PlaybackError::SourceMissing),
            "no media source assigned"
        );
    }
}
