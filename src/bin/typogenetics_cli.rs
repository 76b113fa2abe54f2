use serde::Serialize;
use std::env;
use typogenetics::binding::BindingSelector;
use typogenetics::enzyme::Enzyme;
use typogenetics::ribosome;
use typogenetics::strand::Strand;

#[derive(Serialize)]
struct EnzymeSummary {
    name: String,
    binding: String,
    commands: Vec<String>,
}

impl EnzymeSummary {
    fn from_enzyme(enzyme: &Enzyme) -> Self {
        EnzymeSummary {
            name: enzyme.name().to_string(),
            binding: enzyme.binding().to_string(),
            commands: enzyme.commands().iter().map(|c| c.to_string()).collect(),
        }
    }
}

fn usage() {
    eprintln!(
        "Usage:\n  \
  typogenetics_cli translate STRAND [--json]\n  \
  typogenetics_cli apply STRAND INDEX [--policy first|last|middle|random|nth] [--n N]\n  \
  typogenetics_cli simulate STRAND [--policy first|last|middle|random|nth] [--n N]\n\n  \
  STRAND is text over the ACGT alphabet. The default policy is 'first'."
    );
}

struct CliArgs {
    positional: Vec<String>,
    policy: String,
    n: usize,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        positional: vec![],
        policy: "first".to_string(),
        n: 0,
        json: false,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--policy" => {
                parsed.policy = iter
                    .next()
                    .ok_or_else(|| "--policy requires a value".to_string())?
                    .to_string();
            }
            "--n" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--n requires a value".to_string())?;
                parsed.n = value
                    .parse()
                    .map_err(|_| format!("Bad value for --n: '{value}'"))?;
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option '{other}'"));
            }
            other => parsed.positional.push(other.to_string()),
        }
    }
    Ok(parsed)
}

fn load_strand(text: &str) -> Result<Strand, String> {
    Strand::from_text(text).map_err(|e| e.to_string())
}

fn cmd_translate(args: &CliArgs) -> Result<(), String> {
    let strand = load_strand(args.positional.first().ok_or("Missing STRAND".to_string())?)?;
    let enzymes = ribosome::translate(&strand);
    if args.json {
        let summaries: Vec<EnzymeSummary> =
            enzymes.iter().map(EnzymeSummary::from_enzyme).collect();
        let text = serde_json::to_string_pretty(&summaries).map_err(|e| e.to_string())?;
        println!("{text}");
    } else if enzymes.is_empty() {
        println!("No enzymes");
    } else {
        for enzyme in &enzymes {
            println!("{enzyme}");
        }
    }
    Ok(())
}

fn cmd_apply(args: &CliArgs, selector: BindingSelector) -> Result<(), String> {
    let strand = load_strand(args.positional.first().ok_or("Missing STRAND".to_string())?)?;
    let index: usize = args
        .positional
        .get(1)
        .ok_or("Missing enzyme INDEX".to_string())?
        .parse()
        .map_err(|_| "INDEX must be a number".to_string())?;
    let enzymes = ribosome::translate(&strand);
    let enzyme = enzymes
        .get(index)
        .ok_or_else(|| format!("No enzyme {index}; strand encodes {}", enzymes.len()))?;
    println!("{enzyme}");
    for product in enzyme.process(&strand, selector) {
        println!("  {product}");
    }
    Ok(())
}

fn cmd_simulate(args: &CliArgs, selector: BindingSelector) -> Result<(), String> {
    let strand = load_strand(args.positional.first().ok_or("Missing STRAND".to_string())?)?;
    let enzymes = ribosome::translate(&strand);
    if enzymes.is_empty() {
        println!("No enzymes");
        return Ok(());
    }
    for enzyme in &enzymes {
        println!("{enzyme}");
        for product in enzyme.process(&strand, selector) {
            println!("  {product}");
        }
    }
    Ok(())
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().ok_or("Missing command".to_string())?.clone();
    let parsed = parse_args(&args[1..])?;
    let selector =
        BindingSelector::from_name(&parsed.policy, parsed.n).map_err(|e| e.to_string())?;
    match command.as_str() {
        "translate" => cmd_translate(&parsed),
        "apply" => cmd_apply(&parsed, selector),
        "simulate" => cmd_simulate(&parsed, selector),
        other => Err(format!("Unknown command '{other}'")),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}\n");
        usage();
        std::process::exit(1);
    }
}
