//! gatecalc - CLI Entry Point
//!
//! Commands:
//! - `gatecalc add <a> <b>` - Ripple-carry addition
//! - `gatecalc sub <a> <b>` - Ripple-borrow subtraction (sign bit prefixed)
//! - `gatecalc mul <a> <b>` - Shift-and-add multiplication
//! - `gatecalc calc --op <op> <a> <b>` - Any of the above by name
//! - `gatecalc check` - Built-in self-test
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the circuit logging.

use clap::{Args, Parser, Subcommand, ValueEnum};
use gatecalc::{ArithmeticResult, InputError, Operation};

#[derive(Parser)]
#[command(name = "gatecalc")]
#[command(version = "0.1.0")]
#[command(about = "Binary arithmetic from logic gates, with a step-by-step trace")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two binary numbers
    Add(OperandArgs),
    /// Subtract B from A; the first result bit is the sign
    Sub(OperandArgs),
    /// Multiply two binary numbers
    Mul(OperandArgs),
    /// Run an operation chosen by name (add, sub, mul)
    Calc {
        /// Operation to perform
        #[arg(short, long)]
        op: Operation,
        #[command(flatten)]
        args: OperandArgs,
    },
    /// Run the built-in self-test
    Check,
}

#[derive(Args)]
struct OperandArgs {
    /// First operand (binary, e.g. 1011)
    a: String,
    /// Second operand (binary)
    b: String,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
    /// Print only the result, not the steps
    #[arg(long)]
    no_steps: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Add(args)) => run(Operation::Addition, &args),
        Some(Commands::Sub(args)) => run(Operation::Subtraction, &args),
        Some(Commands::Mul(args)) => run(Operation::Multiplication, &args),
        Some(Commands::Calc { op, args }) => run(op, &args),
        Some(Commands::Check) => run_self_test(),
        None => {
            println!("gatecalc v0.1.0");
            println!("Binary arithmetic from logic gates");
            println!();
            println!("Use --help for available commands");
            println!();
            demo();
        }
    }
}

fn run(op: Operation, args: &OperandArgs) {
    let out = match op.evaluate(&args.a, &args.b) {
        Ok(out) => out,
        Err(e) => {
            report_input_error(&e);
            std::process::exit(1);
        }
    };

    match args.format {
        Format::Text => print_text(op, &out, !args.no_steps),
        Format::Json => print_json(&out, !args.no_steps),
    }
}

fn report_input_error(e: &InputError) {
    log::warn!("rejected input: {}", e);
    eprintln!("Input error: {}", e);
    eprintln!("Please enter valid binary numbers.");
}

fn print_text(op: Operation, out: &ArithmeticResult, with_steps: bool) {
    let suffix = match op {
        Operation::Subtraction => " (with sign bit)",
        _ => "",
    };
    println!("Result ({}): {}{}", op.result_label(), out.result, suffix);

    match op.decimal_value(&out.result) {
        Some(value) => println!("Decimal: {}", value),
        None if op == Operation::Subtraction && out.result.get(0).is_one() => {
            println!("Decimal: n/a (negative; magnitude bits are not two's-complement corrected)")
        }
        None => {}
    }

    if with_steps {
        println!();
        println!("━━━ {} Steps ━━━", op);
        for step in out.steps() {
            println!("{}", step);
        }
    }
}

fn print_json(out: &ArithmeticResult, with_steps: bool) {
    let json = if with_steps {
        serde_json::to_string_pretty(out)
    } else {
        serde_json::to_string_pretty(&serde_json::json!({ "result": out.result }))
    };
    match json {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Failed to encode result: {}", e);
            std::process::exit(1);
        }
    }
}

fn demo() {
    println!("━━━ Binary Arithmetic Demo ━━━");
    println!();
    for (op, a, b) in [
        (Operation::Addition, "1011", "0110"),
        (Operation::Subtraction, "1011", "0110"),
        (Operation::Multiplication, "101", "11"),
    ] {
        match op.evaluate(a, b) {
            Ok(out) => println!(
                "  {} {} {} = {}  ({} steps)",
                a, op.symbol(), b, out.result, out.trace.len()
            ),
            Err(e) => eprintln!("  {}", e),
        }
    }
    println!();
    println!("Try: gatecalc add 11 01");
}

fn run_self_test() {
    println!("━━━ gatecalc Self-Test ━━━");
    println!();

    // (operation, a, b, expected result, expected trace length)
    let cases = [
        (Operation::Addition, "11", "01", "100", Some(3)),
        (Operation::Subtraction, "01", "11", "110", Some(2)),
        (Operation::Subtraction, "11", "01", "010", Some(2)),
        (Operation::Multiplication, "10", "11", "110", None),
        (Operation::Multiplication, "00", "11", "0", None),
    ];

    let mut passed = 0;
    let mut failed = 0;

    for (op, a, b, expected, steps) in cases {
        print!("{} {} {} = {} ... ", a, op.symbol(), b, expected);
        match op.evaluate(a, b) {
            Ok(out) if out.result.to_string() == expected
                && steps.map_or(true, |n| out.trace.len() == n) =>
            {
                println!("✓");
                passed += 1;
            }
            Ok(out) => {
                println!("✗ (got {}, {} steps)", out.result, out.trace.len());
                failed += 1;
            }
            Err(e) => {
                println!("✗ ({})", e);
                failed += 1;
            }
        }
    }

    print!("Invalid input is rejected... ");
    if Operation::Addition.evaluate("12", "1").is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
