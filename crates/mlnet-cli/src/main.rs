use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mlnet_core::{math, DType, Element, Tensor};

#[derive(Parser)]
#[command(
    name = "mlnet",
    about = "MLNet tensor CLI",
    long_about = "Run elementwise tensor arithmetic and math functions from the command line.\n\nTensors are given as comma-separated values, e.g. `--lhs 1,2,3`.",
    version,
)]
struct Cli {
    /// Element type used for all tensors
    #[arg(long, global = true, value_enum, default_value_t = DTypeArg::F32)]
    dtype: DTypeArg,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the subtraction and product of a few fixed tensors
    Demo,
    /// Apply an arithmetic operator to two tensors
    Binary {
        #[arg(value_enum)]
        op: BinaryOp,
        /// Left operand (comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        lhs: String,
        /// Right operand (comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        rhs: String,
    },
    /// Apply a math function to a tensor
    Unary {
        #[arg(value_enum)]
        func: UnaryFn,
        /// Input values (comma-separated)
        #[arg(long, allow_hyphen_values = true)]
        values: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DTypeArg {
    F32,
    F64,
}

impl From<DTypeArg> for DType {
    fn from(arg: DTypeArg) -> Self {
        match arg {
            DTypeArg::F32 => DType::F32,
            DTypeArg::F64 => DType::F64,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnaryFn {
    Sin,
    Exp,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match DType::from(cli.dtype) {
        DType::F32 => run::<f32>(&cli.command),
        DType::F64 => run::<f64>(&cli.command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<T>(command: &Commands) -> Result<()>
where
    T: Element + FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    tracing::debug!(dtype = %T::DTYPE, "running command");
    match command {
        Commands::Demo => {
            for line in cmd_demo::<T>()? {
                println!("{}", line);
            }
        }
        Commands::Binary { op, lhs, rhs } => {
            let a = parse_tensor::<T>(lhs).context("invalid --lhs")?;
            let b = parse_tensor::<T>(rhs).context("invalid --rhs")?;
            let result = cmd_binary(*op, &a, &b)?;
            println!("{}  ({})", result, result.provenance());
        }
        Commands::Unary { func, values } => {
            let x = parse_tensor::<T>(values).context("invalid --values")?;
            let result = cmd_unary(*func, &x);
            println!("{}  ({})", result, result.provenance());
        }
    }
    Ok(())
}

fn cmd_demo<T: Element>() -> Result<Vec<String>> {
    let lit = |v: [f64; 4]| -> Tensor<T> {
        v.iter().filter_map(|&x| num_traits::cast::<f64, T>(x)).collect()
    };
    let t1 = lit([1.0, 2.0, 3.0, 4.0]);
    let t2 = lit([6.0, 7.0, 8.0, 9.0]);
    let t3 = lit([9.0, 8.0, 7.0, 6.0]);

    Ok(vec![
        describe(&t1, &t2, &(&t1 - &t2)?),
        describe(&t3, &t2, &(&t3 * &t2)?),
    ])
}

/// Render `a OP b = result`, taking the operator from the result's provenance.
fn describe<T: Element>(a: &Tensor<T>, b: &Tensor<T>, result: &Tensor<T>) -> String {
    match result.provenance().symbol() {
        Some(op) => format!("{} {} {} = {}", a, op, b, result),
        None => format!("{} = {}", result.provenance(), result),
    }
}

fn cmd_binary<T: Element>(op: BinaryOp, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
    };
    Ok(result?)
}

fn cmd_unary<T: Element>(func: UnaryFn, x: &Tensor<T>) -> Tensor<T> {
    match func {
        UnaryFn::Sin => math::sin(x),
        UnaryFn::Exp => math::exp(x),
    }
}

/// Parse `"1, 2,3"` into a tensor. An empty or blank string is the empty tensor.
fn parse_tensor<T>(s: &str) -> Result<Tensor<T>>
where
    T: Element + FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    if s.trim().is_empty() {
        return Ok(Tensor::new());
    }
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<T>()
                .with_context(|| format!("cannot parse '{}' as {}", part, T::DTYPE))
        })
        .collect::<Result<Vec<T>>>()
        .map(Tensor::from_vec)
}
