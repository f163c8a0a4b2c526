use anyhow::Result;
use tracing::info;

use jiang_play::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("jiang starting");
    Session::new(SessionConfig::default()).run()?;
    Ok(())
}
