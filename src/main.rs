use std::{path::{Path, PathBuf}, io::Write};
use clap::Parser;
use env_inject::{AnyErr, Injector, completion_notice, DEFAULT_NOTICE};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about=None)]
struct Args {
    /// The file to inject into. It is overwritten in place.
    /// Placeholders look like this:
    /// ```
    /// apiKey: "$FIREBASE_API_KEY", appId: "$FIREBASE_APP_ID"
    /// ```
    #[clap(short, long, value_parser, default_value = "public/index.html")]
    file: PathBuf,
    /// A dotenv file loaded before reading the environment.
    /// Defaults to `.env` in the working directory, skipped if missing.
    /// Variables already set in the environment win.
    #[clap(short, long, value_parser)]
    env_file: Option<PathBuf>,
    /// Do not load any dotenv file.
    #[clap(long, action, conflicts_with = "env-file")]
    no_env_file: bool,
    /// Print the injected document to stdout and leave the file untouched.
    #[clap(long, action)]
    stdout: bool,
    /// Print a JSON report of the replacements after injecting.
    #[clap(long, action, conflicts_with = "stdout")]
    report: bool,
    /// Completion line; `{file}` expands to the target path.
    #[clap(long, value_parser, default_value = DEFAULT_NOTICE)]
    notice: String,
}

const DEFAULT_ENV_FILE: &str = ".env";

fn load_env_file(args: &Args) -> Result<(), AnyErr> {
    if args.no_env_file {
        return Ok(());
    }
    if let Some(path) = &args.env_file {
        dotenvy::from_path(path)?;
        log::debug!("Loaded {:?}", path);
        return Ok(());
    }
    match dotenvy::from_path(Path::new(DEFAULT_ENV_FILE)) {
        Ok(()) => log::debug!("Loaded {DEFAULT_ENV_FILE}"),
        Err(e) if e.not_found() => log::debug!("No {DEFAULT_ENV_FILE}, using process environment only"),
        Err(e) => log::warn!("Ignoring {DEFAULT_ENV_FILE}: {e}"),
    }
    Ok(())
}

fn main_result() -> Result<(), AnyErr> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    load_env_file(&args)?;

    let mut injector = Injector::from_env();
    if args.stdout {
        let output = injector.render(&args.file)?;
        return std::io::stdout().write_all(&output.content).map_err(|err| err.into());
    }
    let report = injector.inject(&args.file)?;
    println!("{}", completion_notice(&args.notice, &args.file)?);
    if args.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn main() {
    main_result().expect("Failed to inject environment variables");
}
