use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Rock paper scissors against the computer", long_about = None)]
pub struct Config {
    /// directory holding rock.png, paper.png and scissors.png
    #[arg(long, default_value = "media")]
    pub media: PathBuf,

    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// replay the same computer moves
    #[arg(long)]
    pub seed: Option<u64>,
}
