use std::process::ExitCode;

use clap::Parser;
use melt_rs::{
    Alphabet, Conditions, MeltResult, ScanRecord, Strand, ThermoContext, Window, anneal_temp,
    gc_fraction, product_tm, round1, round2, scan,
};

/// Report nearest-neighbor thermodynamics for every window of a nucleic acid sequence
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The sequence to scan
    #[arg()]
    seq: String,

    /// Bases per window
    #[arg(short, long, default_value_t = 20)]
    window: usize,

    /// Bases between window starts
    #[arg(short, long, default_value_t = 1)]
    step: usize,

    /// Monovalent salt concentration in mM
    #[arg(long, default_value_t = 50.0)]
    salt: f64,

    /// Strand concentration in nM
    #[arg(long, default_value_t = 50.0)]
    dna: f64,

    /// Use the RNA parameters instead of detecting from the sequence
    #[arg(long)]
    rna: bool,

    /// Re-sum every window instead of caching running sums
    #[arg(long)]
    no_cache: bool,

    /// Also report the product tm and the annealing temperature of each window
    #[arg(short, long)]
    product: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("melt: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> MeltResult<()> {
    let seq = args.seq.as_bytes();
    let strand = if args.rna {
        Strand::new(seq, Alphabet::Rna)?
    } else {
        Strand::detect(seq)?
    };
    let conditions = Conditions::new(args.salt, args.dna)?;
    tracing::debug!(alphabet = %strand.alphabet(), len = strand.len(), "melting");

    let mut ctx = (!args.no_cache).then(|| ThermoContext::new(strand.alphabet(), strand.len()));
    let records = scan(&strand, args.window, args.step, &conditions, ctx.as_mut())?;

    let tm_product = if args.product {
        let gc = gc_fraction(&strand, Window::full(strand.len()))?;
        let tm = product_tm(gc, conditions.salt, strand.len())?;
        println!("# product tm {:.1}", round1(tm));
        Some(tm)
    } else {
        None
    };

    println!("{}", header(tm_product.is_some()));
    for r in &records {
        println!("{}", row(r, tm_product));
    }

    Ok(())
}

fn header(product: bool) -> String {
    format!("#start\tend\tdH\tdS\tdG\tGC%\tTm{}", if product { "\tTa" } else { "" })
}

/// One report line, with the window's annealing temperature against the
/// product when there is one.
fn row(r: &ScanRecord, tm_product: Option<f64>) -> String {
    let mut line = format!(
        "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.1}\t{:.1}",
        r.window.shift + 1,
        r.window.end(),
        round2(r.thermo.enthalpy),
        round2(r.thermo.entropy),
        round2(r.thermo.energy),
        round1(r.gc * 100.0),
        round1(r.tm),
    );
    if let Some(tm_product) = tm_product {
        line += &format!("\t{:.1}", round1(anneal_temp(r.tm, tm_product)));
    }
    line
}

#[cfg(test)]
mod test {
    use melt_rs::{ThermoResult, Window};

    use super::{ScanRecord, header, row};

    fn record() -> ScanRecord {
        ScanRecord {
            window: Window::new(4, 10),
            thermo: ThermoResult {
                enthalpy: -74.4,
                entropy: -195.6,
                energy: -13.733,
            },
            tm: 26.27,
            gc: 0.8,
        }
    }

    #[test]
    fn test_rows() {
        assert_eq!(header(false), "#start\tend\tdH\tdS\tdG\tGC%\tTm");
        assert_eq!(row(&record(), None), "5\t14\t-74.40\t-195.60\t-13.73\t80.0\t26.3");
    }

    #[test]
    fn test_product_rows() {
        assert!(header(true).ends_with("\tTm\tTa"));
        // every window gets its own annealing temperature, capped at its tm
        let line = row(&record(), Some(79.05));
        assert_eq!(line, "5\t14\t-74.40\t-195.60\t-13.73\t80.0\t26.3\t26.3");
    }
}
