use clap::{Parser, Subcommand};
use invite_qr::{QrEncoder, QrMatrix};
use std::process;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Fixed-profile QR symbol generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a payload and print the module grid
    Encode {
        text: String,
        /// Light border modules around the symbol
        #[arg(long, default_value_t = 1)]
        quiet_zone: usize,
        /// Print '#'/'.' instead of block characters
        #[arg(long)]
        plain: bool,
    },
    /// Print the codewords (data then error correction) as hex
    Codewords { text: String },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            text,
            quiet_zone,
            plain,
        } => encode_cmd(&text, quiet_zone, plain),
        Command::Codewords { text } => codewords_cmd(&text),
    }
}

fn encode_cmd(text: &str, quiet_zone: usize, plain: bool) {
    match invite_qr::encode(text) {
        Ok(qr) => print_symbol(&qr, quiet_zone, plain),
        Err(err) => {
            eprintln!("Failed to encode {:?}: {}", text, err);
            process::exit(1);
        }
    }
}

fn codewords_cmd(text: &str) {
    let encoder = QrEncoder::new();
    match encoder.codewords(text.as_bytes()) {
        Ok(words) => {
            println!("data: {}", hex_line(&words[..16]));
            println!("ecc:  {}", hex_line(&words[16..]));
        }
        Err(err) => {
            eprintln!("Failed to encode {:?}: {}", text, err);
            process::exit(1);
        }
    }
}

fn hex_line(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_symbol(qr: &QrMatrix, quiet_zone: usize, plain: bool) {
    let (dark, light) = if plain { ("##", "..") } else { ("██", "  ") };
    let total = qr.size() + 2 * quiet_zone;
    for row in 0..total {
        let mut line = String::with_capacity(total * 2);
        for col in 0..total {
            let inside = (quiet_zone..quiet_zone + qr.size()).contains(&row)
                && (quiet_zone..quiet_zone + qr.size()).contains(&col);
            let is_dark = inside && qr.get(row - quiet_zone, col - quiet_zone);
            line.push_str(if is_dark { dark } else { light });
        }
        println!("{}", line);
    }
}
