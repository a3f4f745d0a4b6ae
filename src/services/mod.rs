//! External service interactions
//!
//! This module contains the pieces that leave the process:
//! - Retrying request helper with exponential backoff
//! - Generative image/text adapters over the wire schema
//! - Background generation runner (worker thread + channel polling)
//! - Optional voice I/O through system engines

pub mod gen_runner;
pub mod genai;
pub mod retry;
pub mod speech;

pub use gen_runner::{GenReply, GenRunner, GenTask};
pub use genai::GenAiClient;
pub use retry::CancelToken;
pub use speech::SpeechService;
