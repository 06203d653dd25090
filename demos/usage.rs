use file_helper::{Usage, walk};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // walks the directory given as the first argument, or the current one
    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    walk(&root, |entry| info!("walk: {}", entry))?;

    let usage = Usage::of(&root)?;
    info!("usage: {}", usage);

    Ok(())
}
