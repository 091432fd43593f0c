use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::File;
use std::io::{self, Write};

/// Environment variable naming a file to receive log output.
pub const LOG_FILE_ENV: &str = "READALONG_LOG_FILE";

/// Initialise logging for the terminal binary.
///
/// The filter comes from `RUST_LOG` (default `warn`). Log lines would tear the
/// alternate screen, so they go to the file named by `READALONG_LOG_FILE` when
/// set and to stderr otherwise.
pub fn init_logger() -> io::Result<()> {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let mut builder = Builder::from_env(env);

    builder
        .filter_module("mio", LevelFilter::Error)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        });

    match std::env::var(LOG_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            builder.target(Target::Pipe(Box::new(File::create(path)?)));
        }
        _ => {
            builder.target(Target::Stderr);
        }
    }

    builder.init();
    Ok(())
}
