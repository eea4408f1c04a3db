//! wavhex - convert between WAV files and hex stimulus for the audio core testbench

use clap::Parser;
use clap::error::ErrorKind;
use std::process;
use wavhex::{init_logging, Args, Config, ConversionReport, Decoder, Encoder, Mode, Result};

fn main() {
    // Anything clap cannot make sense of falls back to the usage line
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", wavhex::config::USAGE);
            return;
        }
    };
    init_logging(args.verbose);

    let Some(mode) = args.mode() else {
        println!("{}", wavhex::config::USAGE);
        return;
    };

    if let Err(e) = run(mode, &args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(mode: Mode, args: &Args) -> Result<()> {
    let config = Config::from_args(args)?;

    if config.verbose() {
        println!("{}", wavhex::get_library_info());
        println!("Mode: {}", mode.name());
        println!();
    }

    let report = match mode {
        Mode::WavToHex => {
            let (input, output) = (&config.paths.wav_input, &config.paths.hex_output);
            let report = Encoder::new().process_file(input, output)?;
            println!("Done. Generated {} samples.", report.frames);
            report
        }
        Mode::HexToWav => {
            let (input, output) = (&config.paths.hex_input, &config.paths.wav_output);
            let report = Decoder::new(&config).process_file(input, output)?;
            println!("Done. Saved {} samples to {}.", report.frames, report.output_path.display());
            report
        }
    };

    if config.verbose() {
        print_details(&report);
    }

    Ok(())
}

fn print_details(report: &ConversionReport) {
    println!();
    println!("{}", report);
}
