use std::env;
use std::process::ExitCode;

use hash_password::{parse_args, usage, Command, HashError, Report};

fn main() -> ExitCode {
    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => return fail(&err, true),
    };

    match command {
        Command::Help => {
            print!("{}", usage());
            ExitCode::SUCCESS
        }
        Command::Hash { secret } => match Report::generate(&secret) {
            Ok(report) => {
                println!("{report}");
                ExitCode::SUCCESS
            }
            Err(err) => fail(&err, false),
        },
    }
}

fn fail(err: &HashError, show_usage: bool) -> ExitCode {
    eprintln!("error: {err}");
    if show_usage {
        eprint!("{}", usage());
    }
    ExitCode::from(err.exit_code())
}
