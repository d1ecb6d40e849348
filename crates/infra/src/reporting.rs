// crates/infra/src/reporting.rs
pub mod jsonl;
pub mod text;

use std::{
    io::Write,
    sync::{Mutex, MutexGuard},
};

use checkpoints_shared_kernel::{InfrastructureError, Result};

pub use jsonl::JsonLinesReporter;
pub use text::TextReporter;

fn lock<W>(out: &Mutex<W>) -> Result<MutexGuard<'_, W>> {
    out.lock().map_err(|_| {
        InfrastructureError::OutputError { message: "reporter output lock poisoned".to_string(), source: None }
            .into()
    })
}

fn write_lines<W: Write + ?Sized>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
