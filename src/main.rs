use clap::Parser;
use naca_section::plot::{SectionRenderer, SvgPlotRenderer};
use naca_section::{Designation, Result, naca};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Compute and plot the geometry of a NACA 4-digit or 5-digit standard airfoil section.
#[derive(Parser)]
#[command(name = "naca-section")]
#[command(version)]
#[command(about = "NACA 4/5-digit airfoil section geometry generator", long_about = None)]
struct Cli {
    /// The NACA designation, e.g. 2412 or 23012. Prompted for interactively when omitted.
    designation: Option<String>,

    /// Path of the rendered SVG plot. Defaults to naca_<designation>.svg.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Open the rendered plot with the system viewer.
    #[arg(long)]
    show: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.parse::<Level>().unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let designation = match &cli.designation {
        Some(text) => text.parse::<Designation>()?,
        None => prompt_for_designation()?,
    };

    let section = naca::evaluate(&designation);

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("naca_{:05}.svg", designation.number())));
    let file = File::create(&path)?;
    SvgPlotRenderer::new(BufWriter::new(file)).render(&section)?;
    println!("wrote {}", path.display());

    if cli.show {
        open::that(&path)?;
    }
    Ok(())
}

/// Read a designation from standard input, re-prompting until the line parses as a valid 4-digit
/// or 5-digit designation. Only the input acquisition retries; the computation itself is pure
/// and runs once.
fn prompt_for_designation() -> Result<Designation> {
    let mut line = String::new();
    loop {
        print!("NACA designation (4 or 5 digits): ");
        io::stdout().flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(Box::from("no designation provided"));
        }

        match line.trim().parse::<Designation>() {
            Ok(designation) => return Ok(designation),
            Err(e) => eprintln!("invalid designation: {e}"),
        }
    }
}
