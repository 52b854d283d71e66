use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use qr_forge::encoder::segment::text_to_bytes;
use qr_forge::tools::{capacity_rows, grid_stats, preview, save_image};
use qr_forge::{
    Charset, Color, ECLevel, EncodeOptions, MaskPattern, Renderer, Version, encode_symbol,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Side of the thumbnail written by `encode --preview`
const PREVIEW_SIDE: u32 = 250;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR Forge CLI tools")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SymbolArgs {
    /// Text to encode
    #[arg(long)]
    text: String,
    /// Error correction level (L, M, Q, H)
    #[arg(long, default_value = "H")]
    ecc: ECLevel,
    /// Smallest version to use (1-40)
    #[arg(long)]
    version: Option<u16>,
    /// Use --version exactly instead of as a minimum
    #[arg(long, requires = "version")]
    exact: bool,
    /// Force a mask pattern (0-7)
    #[arg(long)]
    mask: Option<u8>,
    /// Encode text as ISO-8859-1 instead of UTF-8
    #[arg(long)]
    latin1: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and save the image (PNG or JPEG by extension)
    Encode {
        #[command(flatten)]
        symbol: SymbolArgs,
        /// Pixels per module
        #[arg(long)]
        module_size: Option<u32>,
        /// Quiet zone width in modules
        #[arg(long)]
        border: Option<u32>,
        /// Foreground color (#RRGGBB)
        #[arg(long, default_value = "#000000")]
        fg: Color,
        /// Background color (#RRGGBB)
        #[arg(long, default_value = "#FFFFFF")]
        bg: Color,
        #[arg(long)]
        output: PathBuf,
        /// Also write a thumbnail preview here
        #[arg(long)]
        preview: Option<PathBuf>,
    },
    /// Print a symbol to the terminal with its metadata
    Show {
        #[command(flatten)]
        symbol: SymbolArgs,
        /// Quiet zone width in modules
        #[arg(long, default_value_t = 2)]
        border: usize,
    },
    /// List per-version capacity
    Capacity {
        #[arg(long, default_value = "L")]
        ecc: ECLevel,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Command::Encode {
            symbol,
            module_size,
            border,
            fg,
            bg,
            output,
            preview,
        } => encode_cmd(&symbol, module_size, border, fg, bg, &output, preview.as_deref()),
        Command::Show { symbol, border } => show_cmd(&symbol, border),
        Command::Capacity { ecc } => {
            capacity_cmd(ecc);
            Ok(())
        }
    }
}

fn options_from(args: &SymbolArgs) -> Result<EncodeOptions> {
    let mut options = EncodeOptions::default().with_ec_level(args.ecc);
    if let Some(number) = args.version {
        let version = Version::new(number)?;
        options = if args.exact {
            options.with_exact_version(version)
        } else {
            options.with_min_version(version)
        };
    }
    if let Some(bits) = args.mask {
        let mask = MaskPattern::from_bits(bits)
            .ok_or_else(|| anyhow!("mask must be between 0 and 7, got {bits}"))?;
        options = options.with_mask(mask);
    }
    if args.latin1 {
        options = options.with_charset(Charset::Latin1);
    }
    Ok(options)
}

fn encode_cmd(
    args: &SymbolArgs,
    module_size: Option<u32>,
    border: Option<u32>,
    fg: Color,
    bg: Color,
    output: &Path,
    preview_path: Option<&Path>,
) -> Result<()> {
    let mut options = options_from(args)?.with_colors(fg, bg);
    if let Some(size) = module_size {
        options = options.with_module_size(size);
    }
    if let Some(border) = border {
        options = options.with_border(border);
    }
    let renderer = Renderer::new(options.render)?;

    let start = Instant::now();
    let bytes = text_to_bytes(&args.text, options.charset)?;
    let symbol = encode_symbol(&bytes, &options)?;
    let img = renderer.render(&symbol);
    let elapsed = start.elapsed();

    save_image(&img, output).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(
        version = symbol.version().number(),
        mask = symbol.mask().bits(),
        width = img.width(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "saved {}",
        output.display()
    );

    if let Some(path) = preview_path {
        let thumb = preview(&img, PREVIEW_SIDE);
        save_image(&thumb, path).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn show_cmd(args: &SymbolArgs, border: usize) -> Result<()> {
    let options = options_from(args)?;
    let bytes = text_to_bytes(&args.text, options.charset)?;
    let symbol = encode_symbol(&bytes, &options)?;
    let stats = grid_stats(&symbol);

    print!("{}", Renderer::render_text(&symbol, border));
    println!(
        "Version {} ({}x{}), error correction {}, mask {}",
        symbol.version().number(),
        symbol.size(),
        symbol.size(),
        symbol.ec_level(),
        symbol.mask().bits()
    );
    println!(
        "Dark modules: {}/{} ({:.1}%)",
        stats.dark_modules,
        stats.total_modules,
        stats.dark_ratio * 100.0
    );
    Ok(())
}

fn capacity_cmd(ecc: ECLevel) {
    println!("Capacity at {ecc}");
    println!(
        "{:>7} {:>9} {:>8} {:>9} {:>6}",
        "version", "codewords", "numeric", "alphanum", "bytes"
    );
    for row in capacity_rows(ecc) {
        println!(
            "{:>7} {:>9} {:>8} {:>9} {:>6}",
            row.version.number(),
            row.data_codewords,
            row.numeric,
            row.alphanumeric,
            row.bytes
        );
    }
}
