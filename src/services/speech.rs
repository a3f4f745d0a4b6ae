//! Optional voice I/O
//!
//! Best-effort text-to-speech through a detected system engine, and
//! speech-to-text through an optional user-configured command. A missing
//! capability is reported to the caller once and never blocks typed
//! interaction.

use crate::error::SpeechError;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Known text-to-speech engines, in preference order. Each accepts the text
/// to speak as a single argument.
const TTS_ENGINES: [&str; 4] = ["say", "espeak-ng", "espeak", "spd-say"];

fn binary_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn find_speaker_in(candidates: &[&'static str]) -> Option<&'static str> {
    candidates.iter().copied().find(|name| binary_exists(name))
}

/// Voice capabilities resolved once at startup
pub struct SpeechService {
    speaker: Option<&'static str>,
    stt_command: Option<String>,
}

impl SpeechService {
    /// Detect a speech engine and record the optional recognizer command
    pub fn detect(stt_command: Option<String>) -> Self {
        Self {
            speaker: find_speaker_in(&TTS_ENGINES),
            stt_command: stt_command.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Speak the text on a detached child process
    pub fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let engine = self.speaker.ok_or_else(|| {
            SpeechError::CapabilityUnavailable(
                "no text-to-speech engine found (tried say, espeak-ng, espeak, spd-say)"
                    .to_string(),
            )
        })?;

        Command::new(engine)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::EngineFailed(format!("{}: {}", engine, e)))?;
        Ok(())
    }

    /// Run the configured recognizer command and deliver its stdout as the
    /// transcription. The caller polls the receiver on the UI tick.
    pub fn start_recognition(&self) -> Result<Receiver<String>, SpeechError> {
        let command = self.stt_command.clone().ok_or_else(|| {
            SpeechError::CapabilityUnavailable(
                "no speech-to-text command configured (set stt_command in the config file)"
                    .to_string(),
            )
        })?;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let output = Command::new("sh").args(["-c", &command]).output();
            let transcript = match output {
                Ok(out) if out.status.success() => {
                    String::from_utf8_lossy(&out.stdout).trim().to_string()
                }
                _ => String::new(),
            };
            if !transcript.is_empty() {
                let _ = tx.send(transcript);
            }
        });
        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_binary_is_not_found() {
        assert_eq!(find_speaker_in(&["definitely-not-a-real-binary-9x7"]), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_which_finds_the_shell() {
        assert!(binary_exists("sh"));
    }

    #[test]
    fn test_missing_recognizer_reports_capability_unavailable() {
        let service = SpeechService {
            speaker: None,
            stt_command: None,
        };
        assert!(matches!(
            service.start_recognition(),
            Err(SpeechError::CapabilityUnavailable(_))
        ));
        assert!(matches!(
            service.speak("hello"),
            Err(SpeechError::CapabilityUnavailable(_))
        ));
    }

    #[test]
    fn test_blank_stt_command_counts_as_unset() {
        let service = SpeechService::detect(Some("   ".to_string()));
        assert!(matches!(
            service.start_recognition(),
            Err(SpeechError::CapabilityUnavailable(_))
        ));
    }
}
