mod printer;

use anyhow::Context;
use clap::Parser;
use std::fs;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a source file of the toy language
    input_path: Option<String>,

    /// Run the lexer only and dump the tokens
    #[arg(short, long)]
    lex: bool,

    /// Run lexer and parser only (no AST dump)
    #[arg(short, long)]
    parse: bool,

    /// Enumerate every string the given pattern can match
    #[arg(short, long, value_name = "PATTERN")]
    generate: Option<String>,

    /// Match --text against the given pattern, printing the step trace
    #[arg(short, long, value_name = "PATTERN")]
    r#match: Option<String>,

    /// Input string for --match
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Upper bound applied to the '*' and '+' quantifiers
    #[arg(long, default_value_t = pattern::DEFAULT_REPEAT_BOUND)]
    repeat_bound: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(pat) = &args.generate {
        let tree = pattern::RegexParser::new(pat)
            .with_repeat_bound(args.repeat_bound)
            .parse()
            .with_context(|| format!("invalid pattern {pat:?}"))?;
        let strings = pattern::generate(&tree);
        for s in &strings {
            println!("{s}");
        }
        println!("Total count: {}", strings.len());
        return Ok(());
    }

    if let Some(pat) = &args.r#match {
        let text = args.text.as_deref().context("--match requires --text")?;
        println!("{}", pattern::dynamic_sequence_processing(pat, text));
        return Ok(());
    }

    let input_path = args.input_path.context("expected a source file path")?;
    let source =
        fs::read_to_string(&input_path).with_context(|| format!("reading {input_path}"))?;

    let tokens = lexer::lex(&source)?;
    if args.lex {
        for token in &tokens {
            println!("{token:?}");
        }
        return Ok(());
    }

    let program = parser::parse_tokens(&tokens)?;
    if args.parse {
        println!("Parsed {} statements", program.statements.len());
        return Ok(());
    }

    print!("{}", printer::render(&program));
    Ok(())
}
