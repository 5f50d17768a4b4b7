//! Build script for joydraw-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and bakes it into a `BOARD` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use joydraw_core::config::{clip_chars, BoardConfig};

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse board.toml, validate it and write `board_config.rs` to OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");
    let config = if config_path.exists() {
        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => fail("Failed to read board.toml", &[e.to_string()]),
        };
        let value: toml::Value = match toml::from_str(&content) {
            Ok(value) => value,
            Err(e) => fail("Invalid TOML syntax in board.toml", &lines(&e.to_string())),
        };
        parse_board(&value)
    } else {
        println!("cargo:warning=board.toml not found, using reference board values");
        BoardConfig::DEFAULT
    };

    if let Err(e) = config.validate() {
        fail("Invalid board.toml", &[e.to_string()]);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let generated = format!(
        "/// Board configuration baked in from board.toml\n\
         pub const BOARD: BoardConfig = BoardConfig {{\n    \
             i2c_frequency_hz: {},\n    \
             display_address: {:#04x},\n    \
             pwm_wrap: {},\n    \
             pwm_divider: {},\n    \
             debounce_ms: {},\n    \
             shared_debounce: {},\n\
         }};\n",
        config.i2c_frequency_hz,
        config.display_address,
        config.pwm_wrap,
        config.pwm_divider,
        config.debounce_ms,
        config.shared_debounce,
    );
    fs::write(out_dir.join("board_config.rs"), generated).unwrap();
}

/// Read known keys; anything missing keeps the reference value
fn parse_board(value: &toml::Value) -> BoardConfig {
    let mut config = BoardConfig::DEFAULT;
    let mut errors = Vec::new();

    if let Some(n) = integer(value, "display", "i2c_frequency_hz", &mut errors) {
        match u32::try_from(n) {
            Ok(hz) => config.i2c_frequency_hz = hz,
            Err(_) => errors.push(format!("[display] i2c_frequency_hz out of range: {}", n)),
        }
    }
    if let Some(n) = integer(value, "display", "address", &mut errors) {
        match u8::try_from(n) {
            Ok(addr) => config.display_address = addr,
            Err(_) => errors.push(format!("[display] address out of range: {}", n)),
        }
    }
    if let Some(n) = integer(value, "pwm", "wrap", &mut errors) {
        match u16::try_from(n) {
            Ok(wrap) => config.pwm_wrap = wrap,
            Err(_) => errors.push(format!("[pwm] wrap must be 1-65535, got {}", n)),
        }
    }
    if let Some(n) = integer(value, "pwm", "divider", &mut errors) {
        match u8::try_from(n) {
            Ok(div) => config.pwm_divider = div,
            Err(_) => errors.push(format!("[pwm] divider must be 1-255, got {}", n)),
        }
    }
    if let Some(n) = integer(value, "debounce", "window_ms", &mut errors) {
        match u32::try_from(n) {
            Ok(ms) => config.debounce_ms = ms,
            Err(_) => errors.push(format!("[debounce] window_ms out of range: {}", n)),
        }
    }
    match value.get("debounce").and_then(|t| t.get("shared")) {
        None => {}
        Some(toml::Value::Boolean(shared)) => config.shared_debounce = *shared,
        Some(_) => errors.push("[debounce] shared must be true or false".to_string()),
    }

    if !errors.is_empty() {
        fail("Invalid values in board.toml", &errors);
    }
    config
}

fn integer(
    value: &toml::Value,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match value.get(section)?.get(key)? {
        toml::Value::Integer(n) => Some(*n),
        _ => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
    }
}

fn lines(msg: &str) -> Vec<String> {
    msg.lines().map(str::to_string).collect()
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[String]) -> ! {
    let body = details
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", clip_chars(line, 59))
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
