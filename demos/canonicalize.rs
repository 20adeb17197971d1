//! An example to canonicalize URIs from the CLI arguments.

use uri_canon::{Context, Normalizer, Rule};

const USAGE: &str = "\
USAGE:
    canonicalize [FLAGS] [OPTIONS] [--] URI [URI...]

FLAGS:
    -h, --help              Prints this help
    -a, --all               Enable all rules, including unsafe ones
    -l, --list              List the rules and exit
    -n, --normalize         Print the components of the normalized URI
                            instead of the canonical string

OPTIONS:
    -e, --enable <RULE>     Enable the rule (can be repeated)
    -d, --disable <RULE>    Disable the rule (can be repeated)

ARGS:
    <URI>                   URI or URI reference

If two or more URIs are given, whether they are equivalent is also printed.
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

fn list_and_exit() -> ! {
    for rule in Rule::ALL {
        let group = if rule.is_safe() { "safe" } else { "unsafe" };
        println!("{:<30} {}", rule.name(), group);
    }
    std::process::exit(0);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URIs.
    uris: Vec<String>,
    /// Normalization context.
    context: Context,
    /// Whether to print the components.
    components: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut uris = Vec::new();
        let mut context = Context::safe();
        let mut components = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--all" | "-a" => context = Rule::ALL.iter().copied().collect(),
                "--list" | "-l" => list_and_exit(),
                "--normalize" | "-n" => components = true,
                "--enable" | "-e" => context = context.with(rule_arg(args.next()), true),
                "--disable" | "-d" => context = context.with(rule_arg(args.next()), false),
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => uris.push(arg),
            }
        }
        uris.extend(args);

        if uris.is_empty() {
            die("URI should be specified");
        }
        Self {
            uris,
            context,
            components,
        }
    }
}

/// Parses the rule name given as an option argument.
fn rule_arg(arg: Option<String>) -> Rule {
    let name = arg.unwrap_or_else(|| die("Rule name should be specified"));
    name.parse().unwrap_or_else(|e| die(e))
}

fn main() {
    let opt = CliOpt::parse();
    let normalizer = Normalizer::new(opt.context);

    for uri in &opt.uris {
        if opt.components {
            let normalized = normalizer
                .normalize(uri)
                .unwrap_or_else(|e| die(format_args!("Failed to normalize {:?}: {}", uri, e)));
            println!("{}", normalized);
            println!("    scheme:    {:?}", normalized.scheme());
            println!("    user info: {:?}", normalized.user_info());
            println!("    host:      {:?}", normalized.host());
            println!("    port:      {:?}", normalized.port());
            println!("    path:      {:?}", normalized.path());
            println!("    query:     {:?}", normalized.query());
            println!("    fragment:  {:?}", normalized.fragment());
        } else {
            match normalizer.canonicalize(uri) {
                Ok(canonical) => println!("{}", canonical),
                Err(e) => die(format_args!("Failed to canonicalize {:?}: {}", uri, e)),
            }
        }
    }

    if let [first, rest @ ..] = opt.uris.as_slice() {
        for other in rest {
            match normalizer.equivalent(first, other) {
                Ok(true) => println!("{:?} and {:?} are equivalent.", first, other),
                Ok(false) => println!("{:?} and {:?} are different.", first, other),
                Err(e) => die(e),
            }
        }
    }
}
