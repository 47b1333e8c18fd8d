use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use picmask::{MatchResult, MatchStatus, PictureMask};

/// Exit status when a mask fails to compile.
const EXIT_BAD_MASK: u8 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Picture mask to check against
    #[arg(value_name = "MASK")]
    mask: String,

    /// Candidate texts (read one per line from stdin if none are given)
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Print the compiled mask tree before checking
    #[arg(short = 't', long)]
    tree: bool,

    /// Report the verdict for every prefix of each text, as if it were typed
    #[arg(short = 'i', long)]
    incremental: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let texts = if args.texts.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
    } else {
        args.texts.clone()
    };

    let code = run(&args, &texts, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(code))
}

/// Check every text against the mask in `args`, returning the exit status:
/// 0 if every text is `Ok`, 1 if any is not, 2 if the mask is invalid.
fn run(
    args: &Args,
    texts: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    let mut picture = PictureMask::new();
    let mask = match picture.set_mask(&args.mask) {
        Ok(mask) => mask,
        Err(mask_err) => {
            writeln!(err, "{}", args.mask)?;
            if let Some(index) = mask_err.index() {
                writeln!(err, "{:index$}^", "")?;
            }
            writeln!(err, "{mask_err}")?;
            return Ok(EXIT_BAD_MASK);
        }
    };

    if args.tree {
        write!(out, "{}", mask.dump())?;
    }

    let mut all_ok = true;
    for text in texts {
        if args.incremental {
            let chars = text.chars().collect_vec();
            for end in 1..chars.len() {
                let prefix: String = chars[..end].iter().collect();
                report(out, &prefix, &picture.check(&prefix)?)?;
            }
        }
        let result = picture.check(text)?;
        all_ok &= result.status == MatchStatus::Ok;
        report(out, text, &result)?;
    }

    Ok(if all_ok { 0 } else { 1 })
}

fn report(out: &mut impl Write, text: &str, result: &MatchResult) -> io::Result<()> {
    let fields = [
        Some(result.status.to_string()),
        Some(result.index.to_string()),
        Some(format!("{text:?}")),
        result.message.clone(),
    ];
    writeln!(out, "{}", fields.into_iter().flatten().join("\t"))
}
