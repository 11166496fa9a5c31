use std::env;

use qr_encoder::render::{rasterize, to_svg};
use qr_encoder::generate;

#[derive(Clone, Copy, Debug)]
enum OutputFormat {
    Png,
    Svg,
}

struct RenderConfig {
    output_filename: String,
    target_pixel_size: u32,
    output_format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_filename: "qr-code.png".to_string(),
            target_pixel_size: 320,
            output_format: OutputFormat::Png,
        }
    }
}

fn print_help(program_name: &str) {
    println!("Usage: {} [OPTIONS] <text>", program_name);
    println!();
    println!("Encode text as a byte-mode, level-M QR code (versions 1-13)");
    println!();
    println!("OPTIONS:");
    println!("  -o, --output FILE   Output filename [default: qr-code.png]");
    println!("  -p, --pixels N      Target image size in pixels [default: 320]");
    println!("  -f, --format FMT    Output format (png, svg) [default: png]");
    println!("  -h, --help          Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  {} \"HTTPS://EXAMPLE/J/ABC123\"", program_name);
    println!("  {} -f svg -o invite.svg \"HTTPS://EXAMPLE/J/ABC123\"", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program_name = &args[0];

    if args.len() < 2 {
        print_help(program_name);
        return Ok(());
    }

    let mut config = RenderConfig::default();
    let mut text = String::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(program_name);
                return Ok(());
            }
            "-o" | "--output" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --output requires a filename");
                    std::process::exit(1);
                }
                config.output_filename = args[i + 1].clone();
                i += 2;
            }
            "-p" | "--pixels" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --pixels requires a value");
                    std::process::exit(1);
                }
                config.target_pixel_size = args[i + 1].parse().map_err(|_| "Invalid pixel size")?;
                i += 2;
            }
            "-f" | "--format" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --format requires a value");
                    std::process::exit(1);
                }
                config.output_format = match args[i + 1].to_lowercase().as_str() {
                    "png" => OutputFormat::Png,
                    "svg" => OutputFormat::Svg,
                    _ => {
                        eprintln!("Error: Invalid format. Use png or svg");
                        std::process::exit(1);
                    }
                };
                i += 2;
            }
            _ => {
                if args[i].starts_with('-') {
                    eprintln!("Error: Unknown option {}", args[i]);
                    std::process::exit(1);
                }
                text = args[i].clone();
                i += 1;
            }
        }
    }

    if text.is_empty() {
        eprintln!("Error: No text provided");
        print_help(program_name);
        std::process::exit(1);
    }

    let matrix = generate(&text)?;
    match config.output_format {
        OutputFormat::Png => {
            rasterize(&matrix, config.target_pixel_size).save(&config.output_filename)?;
        }
        OutputFormat::Svg => {
            std::fs::write(&config.output_filename, to_svg(&matrix))?;
        }
    }

    println!(
        "QR code saved to {} (version {:?}, {}x{} modules, mask {:?})",
        config.output_filename,
        matrix.version(),
        matrix.size(),
        matrix.size(),
        matrix.mask()
    );
    Ok(())
}
