use std::{
    error::Error,
    fs,
    io::{self, BufRead},
    panic::{self, AssertUnwindSafe},
    process::ExitCode,
};

use clap::Parser;
use tally::{Session, SessionOptions};

/// tally is an interactive calculator. Statements end with `;`, `q` quits.
///
/// Example: `let r = 2; pi * r * r;`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read the script from the file named by CONTENTS.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Do not print the `> ` prompt.
    #[arg(short, long)]
    quiet: bool,

    /// Do not predefine `pi` and `e`.
    #[arg(short, long)]
    bare: bool,

    /// Stop at the first error and exit with status 1.
    #[arg(short, long)]
    strict: bool,

    /// A script to evaluate. Without it, statements are read from stdin.
    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    ExitCode::from(guarded(|| execute(args)))
}

/// Runs `body` and maps its outcome to an exit status.
///
/// `0` on success, `1` after printing the error, `2` if `body` panicked. The
/// panic hook is silenced while `body` runs.
fn guarded(body: impl FnOnce() -> Result<(), Box<dyn Error>>) -> u8 {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(body));
    panic::set_hook(hook);

    match outcome {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            eprintln!("{e}");
            1
        },
        Err(_) => 2,
    }
}

fn execute(args: Args) -> Result<(), Box<dyn Error>> {
    let options = SessionOptions { prompt:    !args.quiet,
                                   constants: !args.bare,
                                   strict:    args.strict, };

    match args.contents {
        None => run(io::stdin().lock(), options),
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).map_err(|e| {
                             format!("Failed to read the input file '{path}'. Perhaps this file does not exist? ({e})")
                         })?;
            run(script.as_bytes(), options)
        },
        Some(script) => run(script.as_bytes(), options),
    }
}

fn run<R: BufRead>(input: R, options: SessionOptions) -> Result<(), Box<dyn Error>> {
    let mut session = Session::with_options(input, options);
    session.run(&mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::guarded;

    #[test]
    fn exit_statuses() {
        assert_eq!(guarded(|| Ok(())), 0);
        assert_eq!(guarded(|| Err("cannot read script".into())), 1);
    }

    #[test]
    fn escaping_panic_exits_with_two() {
        assert_eq!(guarded(|| panic!("putback() into a full buffer")), 2);
    }
}
