use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use bibd::{
    augment, classify_basis, io as text, row_basis, validate_by_definition, validate_by_identity,
    DesignCode, Matrix, MAX_ENUMERABLE_RANK,
};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

#[derive(Parser)]
#[command(version, about = "Validate BIBD incidence matrices and classify the codewords they span")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// read `rows cols` and a matrix, then check it by definition and by identity
    Validate(InputArgs),
    /// read `rows cols` and a matrix, then print a basis of its row space
    Basis(InputArgs),
    /// read `v k lambda` and an incidence matrix, then classify every codeword of its row space
    Generate(GenerateArgs),
}

#[derive(Args)]
struct InputArgs {
    /// read from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    input: InputArgs,
    /// directory receiving one `file{n}.txt` per column
    #[arg(short, long, default_value = "tests/classification")]
    out_dir: PathBuf,
    /// refuse to enumerate bases of larger rank
    #[arg(long, default_value_t = MAX_ENUMERABLE_RANK)]
    max_rank: usize,
    /// never append the all-ones column, even when r is odd
    #[arg(long)]
    no_augment: bool,
}

impl InputArgs {
    fn open(&self) -> anyhow::Result<Box<dyn Read>> {
        Ok(match &self.input {
            Some(path) => Box::new(
                File::open(path).with_context(|| format!("opening {}", path.display()))?,
            ),
            None => Box::new(io::stdin().lock()),
        })
    }
}

fn print_verdict(out: &mut impl Write, method: &str, valid: bool) -> io::Result<()> {
    writeln!(out, "====================")?;
    writeln!(out, "{}:", method)?;
    writeln!(out, "{}", if valid { "IS VALID" } else { "NOT VALID" })?;
    writeln!(out, "====================")
}

fn validate(args: &InputArgs) -> anyhow::Result<()> {
    let m = text::read_matrix(args.open()?)?;
    let mut out = io::stdout().lock();

    writeln!(out, "Initial incidence matrix:")?;
    text::write_matrix(&mut out, &m)?;
    writeln!(out, "M * M^T:")?;
    text::write_matrix(&mut out, &(&m * &m.transposed()))?;

    print_verdict(&mut out, "method 1 (by definition)", validate_by_definition(&m))?;
    print_verdict(&mut out, "method 2 (by identity)", validate_by_identity(&m))?;
    Ok(())
}

fn basis(args: &InputArgs) -> anyhow::Result<()> {
    let m = text::read_matrix(args.open()?)?;
    let mut out = io::stdout().lock();
    writeln!(out, "The basis is:")?;
    text::write_matrix(&mut out, &row_basis(&m))?;
    Ok(())
}

fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let (params, m) = text::read_design(args.input.open()?)?;
    info!("design parameters {}", params);

    let mut out = io::stdout().lock();
    text::write_matrix(&mut out, &m)?;

    let by_definition = validate_by_definition(&m);
    let by_identity = validate_by_identity(&m);
    if by_definition != by_identity {
        bail!(
            "validators disagree: by definition {}, by identity {}",
            by_definition,
            by_identity
        );
    }
    if !by_definition {
        writeln!(out, "Not a valid BIBD")?;
        return Ok(());
    }
    if let Err(e) = params.check_against(&m) {
        warn!("{}", e);
    }

    let matrix: Matrix = if args.no_augment {
        m
    } else {
        augment(&m, &params)
    };
    if matrix.cols() != params.b {
        info!("r = {} is odd, appended an all-ones column", params.r);
    }

    let basis = row_basis(&matrix);
    writeln!(out, "The basis is:")?;
    text::write_matrix(&mut out, &basis)?;

    let classes = classify_basis(&basis, args.max_rank)
        .with_context(|| format!("classifying the codewords of a rank {} basis", basis.rows()))?;

    // max_rank may exceed the code summary's own ceiling
    if basis.rows() <= MAX_ENUMERABLE_RANK {
        let code = DesignCode::from_basis(basis)?;
        let [n, k, d, q] = code.n_k_d_q();
        writeln!(out, "[{}, {}, {}]_{} code, rate {:.3}", n, k, d, q, code.rate())?;
        for (weight, count) in code.sorted_weights() {
            writeln!(out, "  weight {:>3}: {}", weight, count)?;
        }
    }

    let paths = text::write_classification(&args.out_dir, &classes)?;
    writeln!(
        out,
        "{} codeword entries written to {} file(s) in {}",
        classes.total_entries(),
        paths.len(),
        args.out_dir.display()
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Validate(args) => validate(args),
        Commands::Basis(args) => basis(args),
        Commands::Generate(args) => generate(args),
    }
}
