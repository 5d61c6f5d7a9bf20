//! Common test utilities for connector integration tests
//!
//! This module provides:
//! - A one-shot HTTP server on the loopback interface
//! - A silent server that accepts and never answers
//! - A recording heater output

#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Write},
    net::{SocketAddr, TcpListener},
    thread::{self, JoinHandle},
    time::Duration,
};

use dewguard_core::HeaterOutput;

/// Server that answers exactly one request, then exits
pub struct OneShotServer {
    pub addr: SocketAddr,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Serve `body` with `status` to the first client
    pub fn respond(status: u16, reason: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            // Drain headers
            let mut line = String::new();
            loop {
                line.clear();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();

            request_line.trim_end().to_string()
        });

        Self { addr, handle }
    }

    /// Base URL for the client
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request line the server received, e.g. `GET /data/2.5/weather?... HTTP/1.1`
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Accept one connection and hold it open without answering
pub fn silent_server(hold: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((_stream, _)) = listener.accept() {
            thread::sleep(hold);
        }
    });

    addr
}

/// Output that records every write
#[derive(Default)]
pub struct RecordingPin {
    pub writes: Vec<bool>,
}

impl HeaterOutput for RecordingPin {
    type Error = std::convert::Infallible;

    fn set_output(&mut self, on: bool) -> Result<(), Self::Error> {
        self.writes.push(on);
        Ok(())
    }
}
