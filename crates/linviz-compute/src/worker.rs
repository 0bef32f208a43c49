// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Compute Worker
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Background compute thread.
//!
//! Jobs are queued on an unbounded channel and processed strictly in order.
//! All replies, progress included, come back on a single reply channel in
//! the order they were produced.

use std::panic::resume_unwind;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use linviz_types::config::KernelConfig;
use linviz_types::error::{KernelError, KernelResult};
use linviz_types::protocol::{JobReply, JobRequest};

use crate::dispatch::dispatch;

/// Handle to the compute thread.
///
/// When dropped, the job channel is closed and the thread is joined once it
/// has drained the queue. If the thread panicked, the panic is forwarded to
/// the thread dropping the handle.
pub struct ComputeWorker {
    jobs: Option<Sender<JobRequest>>,
    replies: Receiver<JobReply>,
    reply_timeout: Duration,
    handle: Option<JoinHandle<()>>,
}

impl ComputeWorker {
    pub fn spawn(config: KernelConfig) -> KernelResult<Self> {
        config.validate()?;
        let (job_tx, job_rx) = channel::unbounded::<JobRequest>();
        let (reply_tx, reply_rx) = channel::unbounded::<JobReply>();
        let name = config.worker.name.clone();
        let reply_timeout = Duration::from_millis(config.worker.reply_timeout_ms);

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                log::trace!("worker '{name}' starting");
                let _exit = ExitLog(name);
                for request in job_rx {
                    let mut send = |reply: JobReply| {
                        // The caller stopped listening; keep draining so the job still ends.
                        reply_tx.send(reply).ok();
                    };
                    dispatch(&config, &request, &mut send);
                }
            })?;

        Ok(ComputeWorker {
            jobs: Some(job_tx),
            replies: reply_rx,
            reply_timeout,
            handle: Some(handle),
        })
    }

    /// Queues a job. Never blocks.
    pub fn submit(&self, request: JobRequest) -> KernelResult<()> {
        self.jobs
            .as_ref()
            .ok_or(KernelError::WorkerDisconnected)?
            .send(request)
            .map_err(|_| KernelError::WorkerDisconnected)
    }

    /// Receiver for every reply the worker produces.
    pub fn replies(&self) -> &Receiver<JobReply> {
        &self.replies
    }

    /// [`ComputeWorker::wait_terminal`] bounded by the configured `worker.reply_timeout_ms`.
    pub fn wait_reply(&self) -> KernelResult<JobReply> {
        self.wait_terminal(self.reply_timeout)
    }

    pub fn reply_timeout(&self) -> Duration {
        self.reply_timeout
    }

    /// Waits for the next terminal reply, discarding progress replies on the way.
    pub fn wait_terminal(&self, timeout: Duration) -> KernelResult<JobReply> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.replies.recv_deadline(deadline) {
                Ok(reply) if reply.is_terminal() => return Ok(reply),
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => {
                    return Err(KernelError::Timeout {
                        waited_ms: timeout.as_millis() as u64,
                    });
                }
                Err(RecvTimeoutError::Disconnected) => return Err(KernelError::WorkerDisconnected),
            }
        }
    }

    /// Closes the job queue and waits for the thread to finish outstanding jobs.
    pub fn shutdown(mut self) {
        drop(self.jobs.take());
        self.wait_for_exit();
    }

    fn wait_for_exit(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                if !thread::panicking() {
                    resume_unwind(payload);
                }
            }
        }
    }
}

impl Drop for ComputeWorker {
    fn drop(&mut self) {
        drop(self.jobs.take());
        self.wait_for_exit();
    }
}

struct ExitLog(String);

impl Drop for ExitLog {
    fn drop(&mut self) {
        log::trace!("worker '{}' exiting", self.0);
    }
}
