use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use tripack::{Algorithm, CodeTable, Codec, CodecConfig, CompressionResult, ProgressEvent};

#[derive(Parser, Debug)]
#[command(name = "tripack")]
#[command(about = "Compress text with Huffman, RLE or LZ77 and report the savings")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the JSON result, or the decoded text with --decode (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Algorithm: huffman, rle or lz77
    #[arg(short, long, default_value = "huffman")]
    algorithm: String,

    /// Decode instead of encode; input is a JSON result written by a previous run
    #[arg(short, long)]
    decode: bool,

    /// With --decode, treat input as a bare payload for --algorithm
    #[arg(long, requires = "decode")]
    payload: bool,

    /// Huffman code table (JSON) for decoding a bare payload
    #[arg(long, requires = "payload")]
    table: Option<PathBuf>,

    /// LZ77 window size
    #[arg(long, default_value = "4096")]
    window_size: usize,

    /// LZ77 look-ahead size
    #[arg(long, default_value = "18")]
    look_ahead: usize,

    /// Longest RLE run per token (1-255)
    #[arg(long, default_value = "255")]
    max_run: usize,

    /// RLE runs longer than this always use the count form (1-255)
    #[arg(long, default_value = "3")]
    literal_threshold: usize,

    /// Show progress, statistics and debug logging
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = CodecConfig::default()
        .with_window_size(args.window_size)
        .with_look_ahead_size(args.look_ahead)
        .with_max_run(args.max_run)
        .with_literal_threshold(args.literal_threshold);
    config.validate()?;
    let codec = Codec::new(config);

    let input = read_input(&args.input)?;

    if args.decode {
        return run_decode(&args, &codec, &input);
    }

    let algorithm: Algorithm = args.algorithm.parse()?;
    let verbose = args.verbose;
    let mut reporter = |event: &ProgressEvent| {
        if verbose {
            eprintln!("[{:>3}%] {}: {}", event.percentage, event.stage, event.message);
        }
    };
    let result = codec.encode(&input, algorithm, &mut reporter)?;

    if args.verbose {
        print_summary(&result);
    }

    let json = result.to_json()?;
    match &args.output {
        Some(path) => write_output(path, &json)?,
        None => writeln!(io::stdout().lock(), "{}", json)?,
    }

    Ok(())
}

fn run_decode(args: &Args, codec: &Codec, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = if args.payload {
        let algorithm: Algorithm = args.algorithm.parse()?;
        match (algorithm, &args.table) {
            (Algorithm::Huffman, Some(table_path)) => {
                let table = CodeTable::from_json(&fs::read_to_string(table_path)?)?;
                codec.decode_huffman(input, &table)?
            }
            _ => codec.decode(input, algorithm)?,
        }
    } else {
        let result = CompressionResult::from_json(input)?;
        codec.decode_result(&result)?
    };

    if args.verbose {
        eprintln!("Decoded {} symbols ({} bytes)", decoded.chars().count(), decoded.len());
    }

    match &args.output {
        Some(path) => write_output(path, &decoded)?,
        None => io::stdout().lock().write_all(decoded.as_bytes())?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.to_str() == Some("-") {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    if path.to_str() == Some("-") {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()
    } else {
        fs::write(path, contents)
    }
}

fn print_summary(result: &CompressionResult) {
    eprintln!("Compression complete:");
    eprintln!("  Algorithm:        {}", result.algorithm);
    eprintln!("  Original bytes:   {}", result.original_size);
    eprintln!("  Compressed bytes: {}", result.compressed_size);
    eprintln!("  Ratio:            {:.2}%", result.compression_ratio);
    eprintln!("  Time:             {:.2?}", result.processing_time);
    if let Some(table) = &result.code_table {
        eprintln!("  Codes:            {} (longest {} bits)", table.len(), table.max_code_len());
    }
}
