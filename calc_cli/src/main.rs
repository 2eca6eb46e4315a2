//! # Tally CLI Application
//!
//! Terminal front end for the calc_core equation solver.
//!
//! ```text
//! calc_cli solve "2x + 5 = 15"
//! calc_cli solve "x^2 + 5x + 6 = 0" --quadratic --json
//! calc_cli coefficients -a 1 -b 0 -c 1 --quadratic
//! calc_cli run item.json          # CalculationItem JSON, "-" for stdin
//! calc_cli                        # interactive prompt
//! ```

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use calc_core::calculations::CalculationOutput;
use calc_core::{
    solve_equation_with, CalcError, CalcResult, CalculationItem, EquationInput, EquationType, SolutionResult,
    SolverSettings,
};

/// Tally - solve linear and quadratic equations step by step
#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Solve linear and quadratic equations with a step-by-step derivation")]
struct Cli {
    /// Print the full result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Decimals shown in derivation steps
    #[arg(long, global = true)]
    decimals: Option<usize>,

    /// Settings JSON file (flags override its values)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (ignored when RUST_LOG is set)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Solve an equation written as text
    Solve {
        /// Equation text, e.g. "3x - 2 = x + 4"
        text: String,

        /// Treat the equation as quadratic
        #[arg(long)]
        quadratic: bool,
    },

    /// Solve from coefficients of ax + b = 0 or ax² + bx + c = 0
    Coefficients {
        #[arg(short, allow_hyphen_values = true)]
        a: f64,

        #[arg(short, allow_hyphen_values = true)]
        b: f64,

        /// Constant term (quadratic only)
        #[arg(short, allow_hyphen_values = true)]
        c: Option<f64>,

        /// Treat the equation as quadratic
        #[arg(long)]
        quadratic: bool,
    },

    /// Run a CalculationItem JSON document from a file ("-" for stdin)
    Run {
        /// Path to the JSON document
        input: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: LogLevel, verbose: bool) {
    let level = if verbose { LogLevel::Debug.max(level) } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> CalcResult<()> {
    let settings = load_settings(cli)?;
    tracing::debug!(?settings, "settings resolved");

    match &cli.command {
        Some(Commands::Solve { text, quadratic }) => {
            let input = EquationInput::equation(equation_type(*quadratic), text.as_str());
            print_result(&solve_equation_with(&input, &settings)?, cli.json);
        }
        Some(Commands::Coefficients { a, b, c, quadratic }) => {
            let input = EquationInput::Coefficients {
                equation_type: equation_type(*quadratic),
                a: Some(*a),
                b: Some(*b),
                c: *c,
            };
            print_result(&solve_equation_with(&input, &settings)?, cli.json);
        }
        Some(Commands::Run { input }) => {
            let json = read_input(input)?;
            let item: CalculationItem = serde_json::from_str(&json)?;
            tracing::info!(calc_type = item.calc_type(), "running calculation");
            let output = item.calculate(&settings)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        None => interactive(&settings, cli.json),
    }
    Ok(())
}

fn equation_type(quadratic: bool) -> EquationType {
    if quadratic {
        EquationType::Quadratic
    } else {
        EquationType::Linear
    }
}

fn load_settings(cli: &Cli) -> CalcResult<SolverSettings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CalcError::invalid_input("settings", path.display().to_string(), e.to_string()))?;
            serde_json::from_str(&text)?
        }
        None => SolverSettings::default(),
    };
    if let Some(decimals) = cli.decimals {
        settings.display_decimals = decimals;
    }
    settings.validate()?;
    Ok(settings)
}

fn read_input(path: &Path) -> CalcResult<String> {
    let read = if path == Path::new("-") {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json).map(|_| json)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|e| CalcError::invalid_input("input", path.display().to_string(), e.to_string()))
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn interactive(settings: &SolverSettings, json: bool) {
    println!("Tally - Equation Solver");
    println!("=======================");
    println!();
    println!("Enter an equation such as 2x + 5 = 15 or x^2 + 5x + 6 = 0.");
    println!("Press Enter on an empty line to quit.");
    println!();

    while let Some(text) = prompt_line("equation> ") {
        if text.is_empty() {
            break;
        }
        let lowered = text.to_lowercase();
        let quadratic = lowered.contains("x^2") || lowered.contains("x²");
        let input = EquationInput::equation(equation_type(quadratic), text.as_str());
        match solve_equation_with(&input, settings) {
            Ok(result) => print_result(&result, json),
            Err(e) => report_error(&e),
        }
        println!();
    }
}

fn print_result(result: &SolutionResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(&CalculationOutput::EquationSolver(result.clone())) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: {}", e),
        }
        return;
    }

    println!("═══════════════════════════════════════");
    println!("  {} equation: {}", capitalize(result.equation_type().as_str()), result.normalized_form());
    println!("═══════════════════════════════════════");
    for (i, step) in result.steps().iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, step.title);
        println!("   {}", step.math);
        println!("   {}", step.explanation);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", result.result_label());
    let roots = result.roots();
    if !roots.is_empty() {
        let shown: Vec<String> = roots.iter().map(|x| x.to_string()).collect();
        println!("  x = {}", shown.join(", "));
    }
    println!("═══════════════════════════════════════");
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
