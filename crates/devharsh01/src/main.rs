use anyhow::Result;
use devharsh01::Layout;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
  // Logs go to stderr; stdout carries only the card
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();

  let layout = Layout::detect();
  let mut stdout = std::io::stdout().lock();
  devharsh01::run(std::env::args_os(), &layout, &mut stdout)
}
