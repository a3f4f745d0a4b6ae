//! Background generation runner
//!
//! Runs one generation call on a worker thread and reports the outcome over
//! an mpsc channel polled on the UI tick. Each reply carries the generation
//! counter it was spawned under; callers discard replies whose counter no
//! longer matches, so a navigation that outruns its request stays harmless.

use crate::error::GenAiError;
use crate::model::gen::{AdvisorReply, GeneratedImage};
use crate::services::genai::{GenAiClient, FOUNDRY_SYSTEM_PROMPT};
use crate::services::retry::CancelToken;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// One generation request
pub enum GenTask {
    Image { prompt: String },
    Chat { prompt: String },
    Advice { question: String },
}

/// Outcome of a generation request
pub enum GenReply {
    Image(GeneratedImage),
    Chat(String),
    Advice(AdvisorReply),
    /// Display message for the error state; loading still clears
    Failed(String),
}

struct GenJob {
    receiver: Receiver<(u64, GenReply)>,
    cancel: CancelToken,
    generation: u64,
}

/// Runner owning at most one in-flight generation. Spawning replaces and
/// cancels any previous job; there is no queueing and no dedup.
#[derive(Default)]
pub struct GenRunner {
    job: Option<GenJob>,
}

impl GenRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a generation on a worker thread under the given counter value
    pub fn spawn(&mut self, client: GenAiClient, task: GenTask, generation: u64) {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let cancel = CancelToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let reply = run_task(&client, task, &worker_cancel);
            // Receiver may be gone if the view navigated away; that is fine
            let _ = tx.send((generation, reply));
        });

        self.job = Some(GenJob {
            receiver: rx,
            cancel,
            generation,
        });
    }

    /// Poll for a finished generation. Returns the counter the job was
    /// spawned under together with its reply.
    pub fn poll(&mut self) -> Option<(u64, GenReply)> {
        let job = self.job.as_ref()?;
        match job.receiver.try_recv() {
            Ok(reply) => {
                self.job = None;
                Some(reply)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let generation = job.generation;
                self.job = None;
                Some((
                    generation,
                    GenReply::Failed("generation worker disconnected".to_string()),
                ))
            }
        }
    }

    /// Abandon the in-flight job, if any. The worker observes the token
    /// between retry attempts and exits without a visible result.
    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            job.cancel.cancel();
        }
    }
}

impl Drop for GenRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run_task(client: &GenAiClient, task: GenTask, cancel: &CancelToken) -> GenReply {
    let result = match task {
        GenTask::Image { prompt } => client
            .generate_image(&prompt, cancel)
            .map(GenReply::Image),
        GenTask::Chat { prompt } => client
            .generate_chat_reply(&prompt, FOUNDRY_SYSTEM_PROMPT, cancel)
            .map(GenReply::Chat),
        GenTask::Advice { question } => client
            .recommend_algorithm(&question, cancel)
            .map(GenReply::Advice),
    };
    result.unwrap_or_else(|err: GenAiError| GenReply::Failed(err.to_string()))
}
