use rowpack::image_pipeline::{ArchiveConfig, ImageArchivePipeline};
use rowpack::logger;

use anyhow::{Context, bail};
use tracing::{error, info};

const USAGE: &str = "usage: rowpack pack <input.pgm> <output.barch> [extension]\n       rowpack unpack <input.barch> <output.pgm>";

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, input, output) = match args.as_slice() {
        [command, input, output, ..] => (command.as_str(), input, output),
        _ => bail!(USAGE),
    };

    let mut builder = ArchiveConfig::builder();
    if let Some(extension) = args.get(3) {
        builder = builder.extension(extension.clone());
    }
    let pipeline = ImageArchivePipeline::new(builder.build());

    info!("Starting rowpack...");
    info!("Extension tag: {}", pipeline.config().extension);

    let result = match command {
        "pack" => pipeline.archive_file(input, output).map(|packed| {
            info!(
                "Stored {} of {} rows ({} packed bytes)",
                packed.rows.len(),
                packed.height,
                packed.packed_len()
            );
        }),
        "unpack" => pipeline.restore_file(input, output),
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    };

    match result {
        Ok(()) => info!("Done: {} -> {}", input, output),
        Err(e) => {
            error!("{} failed: {}", command, e);
            return Err(e).with_context(|| format!("{} {} -> {}", command, input, output));
        }
    }

    Ok(())
}
