use clap::Parser;
use std::path::PathBuf;

/// muse server: lists the audio files under `<public-dir>/audio` as JSON.
#[derive(Debug, Parser)]
#[command(name = "muse-server")]
pub struct ServerArgs {
    /// Public directory, relative to the working directory. Audio files
    /// are read from its `audio` subdirectory.
    #[arg(long, default_value = "public", env = "MUSE_PUBLIC_DIR")]
    pub public_dir: PathBuf,

    /// Port for the HTTP server.
    #[arg(long, default_value = "3000", env = "MUSE_PORT")]
    pub port: u16,

    /// Address to bind the server to.
    #[arg(long, default_value = "0.0.0.0", env = "MUSE_BIND")]
    pub bind: String,

    /// Serve the audio files under /audio as well as the listing.
    #[arg(
        long,
        env = "MUSE_SERVE_STATIC",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub serve_static: bool,
}

impl ServerArgs {
    /// Absolute path of the scanned audio directory.
    pub fn audio_dir(&self) -> std::io::Result<PathBuf> {
        Ok(std::env::current_dir()?.join(&self.public_dir).join("audio"))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
