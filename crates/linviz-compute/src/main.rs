// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Compute Binary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! JSON-lines front end: one request per stdin line, one reply per stdout line.
//!
//! Usage: `linviz-compute [config.json]`

use std::io::{self, BufRead, BufWriter, Write};
use std::thread;

use anyhow::Context;
use crossbeam::channel::never;
use linviz_compute::{decode_request_line, ComputeWorker};
use linviz_types::config::KernelConfig;
use linviz_types::protocol::JobReply;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .filter(Some("linviz_math"), LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => KernelConfig::from_file(&path)
            .with_context(|| format!("loading config {path}"))?,
        None => KernelConfig::default(),
    };
    log::info!(
        "starting worker '{}' (progress every {} ms, {} eigen iterations)",
        config.worker.name,
        config.progress.min_interval_ms,
        config.eigen.max_iterations
    );

    let worker = ComputeWorker::spawn(config)?;
    let replies = worker.replies().clone();
    let (errors_tx, errors_rx) = crossbeam::channel::unbounded::<JobReply>();

    let writer = thread::Builder::new()
        .name("linviz-stdout".to_string())
        .spawn(move || -> io::Result<()> {
            let (mut replies, mut errors) = (replies, errors_rx);
            let mut out = BufWriter::new(io::stdout().lock());
            let mut open = 2;
            while open > 0 {
                let (from_worker, msg) = crossbeam::select! {
                    recv(replies) -> msg => (true, msg),
                    recv(errors) -> msg => (false, msg),
                };
                match msg {
                    Ok(reply) => {
                        serde_json::to_writer(&mut out, &reply)?;
                        out.write_all(b"\n")?;
                        out.flush()?;
                    }
                    Err(_) => {
                        if from_worker {
                            replies = never();
                        } else {
                            errors = never();
                        }
                        open -= 1;
                    }
                }
            }
            Ok(())
        })?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match decode_request_line(&line) {
            Ok(request) => worker.submit(request)?,
            Err(reply) => {
                log::warn!("undecodable request line (id {})", reply.id);
                errors_tx.send(reply).ok();
            }
        }
    }

    drop(errors_tx);
    worker.shutdown();
    match writer.join() {
        Ok(result) => result.context("writing replies")?,
        Err(payload) => std::panic::resume_unwind(payload),
    }
    Ok(())
}
