use getopts::Options;
use selfref_containers::{ElementKind, console::Console};
use std::{env, io, process};

const EXIT_BAD_OPTIONS: i32 = 2;
const EXIT_IO_FAILURE: i32 = 1;

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Run(Option<ElementKind>),
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt(
        "t",
        "type",
        "skip the type selection and run a single session",
        "int|float|char|string",
    );
    opts
}

/// Interprets the command line arguments following the program name.
fn parse_args<S: AsRef<str>>(opts: &Options, args: &[S]) -> Result<Invocation, String> {
    let matches = opts
        .parse(args.iter().map(|x| AsRef::<str>::as_ref(x)))
        .map_err(|f| f.to_string())?;

    if matches.opt_present("h") {
        return Ok(Invocation::Help);
    }

    if let Some(free) = matches.free.first() {
        return Err(format!("unexpected argument: {free}"));
    }

    match matches.opt_str("t") {
        None => Ok(Invocation::Run(None)),
        Some(name) => ElementKind::from_name(&name)
            .map(|kind| Invocation::Run(Some(kind)))
            .ok_or_else(|| format!("unknown element type: {name}")),
    }
}

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {program} [options]");
    print!("{}", opts.usage(&brief));
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("selfref-containers");
    let opts = options();

    let preset = match parse_args(&opts, args.get(1..).unwrap_or_default()) {
        Ok(Invocation::Help) => {
            print_usage(program, &opts);
            return;
        }
        Ok(Invocation::Run(preset)) => preset,
        Err(message) => {
            eprintln!("{message}");
            print_usage(program, &opts);
            process::exit(EXIT_BAD_OPTIONS);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    if let Err(e) = console.run(preset) {
        eprintln!("{e}");
        process::exit(EXIT_IO_FAILURE);
    }
}
