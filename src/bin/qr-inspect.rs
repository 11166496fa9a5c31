use std::env;

use qr_encoder::render::to_ascii;
use qr_encoder::{generate, MaskPattern, Version};

#[derive(serde::Serialize)]
struct InspectReport {
    version: Version,
    size: usize,
    mask: MaskPattern,
    penalty: u32,
    modules: Vec<Vec<u8>>,
}

fn print_help(program_name: &str) {
    println!("Usage: {} [OPTIONS] <text>", program_name);
    println!();
    println!("Encode text and report the chosen version, mask, and penalty");
    println!();
    println!("OPTIONS:");
    println!("  -j, --json    Emit a JSON report instead of ASCII art");
    println!("  -h, --help    Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program_name = &args[0];

    let mut json = false;
    let mut text = String::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(program_name);
                return Ok(());
            }
            "-j" | "--json" => json = true,
            other => {
                if other.starts_with('-') {
                    eprintln!("Error: Unknown option {}", other);
                    std::process::exit(1);
                }
                text = other.to_string();
            }
        }
    }

    if text.is_empty() {
        print_help(program_name);
        std::process::exit(1);
    }

    let matrix = generate(&text)?;

    if json {
        let report = InspectReport {
            version: matrix.version(),
            size: matrix.size(),
            mask: matrix.mask(),
            penalty: matrix.penalty(),
            modules: matrix.to_rows(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "version {:?}  size {}x{}  mask {:?}  penalty {}",
            matrix.version(),
            matrix.size(),
            matrix.size(),
            matrix.mask(),
            matrix.penalty()
        );
        print!("{}", to_ascii(&matrix));
    }

    Ok(())
}
