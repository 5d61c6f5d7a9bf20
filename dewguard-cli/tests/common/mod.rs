//! Common test utilities for running the `dewguard` binary
//!
//! This module provides:
//! - A one-shot weather provider on the loopback interface
//! - A fake sysfs GPIO tree with one exported pin
//! - Config file generation

#![allow(dead_code)]

use std::{
    fs,
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    path::{Path, PathBuf},
    process::{Command, Output},
    thread,
};

/// Serve one HTTP response, return the provider base URL
pub fn one_shot_provider(status: u16, reason: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                break;
            }
        }

        let mut stream = stream;
        let _ = write!(
            stream,
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
    });

    format!("http://{addr}")
}

/// Fake `/sys/class/gpio` with `gpio<pin>` already exported and low
pub fn exported_gpio(root: &Path, pin: u32) -> PathBuf {
    let pin_dir = root.join(format!("gpio{pin}"));
    fs::create_dir_all(&pin_dir).unwrap();
    fs::write(pin_dir.join("direction"), "in").unwrap();
    fs::write(pin_dir.join("value"), "0").unwrap();
    pin_dir
}

/// Fake SoC gpiochip directory with `base` and `label`
pub fn soc_gpiochip(root: &Path, base: u32, label: &str) {
    let chip = root.join(format!("gpiochip{base}"));
    fs::create_dir_all(&chip).unwrap();
    fs::write(chip.join("base"), format!("{base}\n")).unwrap();
    fs::write(chip.join("label"), format!("{label}\n")).unwrap();
}

/// Write a config file pointing at `base_url` and `sysfs_root`
pub fn write_config(dir: &Path, base_url: &str, sysfs_root: &Path, pin: u32) -> PathBuf {
    let path = dir.join("dewguard.toml");
    let contents = format!(
        r#"latitude = 47.37
longitude = 8.54
api_key = "test-key"
pin = {pin}
temperature_margin_c = 2.0

[weather]
base_url = "{base_url}"
timeout_secs = 5

[gpio]
sysfs_root = "{}"
"#,
        sysfs_root.display()
    );
    fs::write(&path, contents).unwrap();
    path
}

/// Run the binary with `args`
pub fn dewguard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dewguard"))
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap()
}
