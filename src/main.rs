use std::io;

use anyhow::Result;
use seq_query::demo;
use seq_query::logging;
use seq_query::report::{ConsoleRenderer, Renderer};
use seq_query::types::SampleData;
use tracing::debug;

fn main() -> Result<()> {
    logging::init();

    let data = SampleData::v0();
    let transcript = demo::run(&data)?;
    let digest = transcript.digest()?;
    debug!(%digest, "transcript ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ConsoleRenderer.render(&mut out, &transcript)?;

    Ok(())
}
