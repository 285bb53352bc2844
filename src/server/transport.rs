//! Line-oriented transports
//!
//! Each request is one line of JSON and receives exactly one line back.

use super::GameServer;
use crate::validity::{VerdictCache, WordOracle};
use log::{debug, info, warn};
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream, ToSocketAddrs};
use std::thread;

/// Answer requests read from `reader` until end of input
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if reading a line or writing a response fails.
pub fn serve_lines<O, C, R, W>(
    server: &GameServer<'_, O, C>,
    reader: R,
    mut writer: W,
) -> io::Result<()>
where
    O: WordOracle,
    C: VerdictCache,
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = server.handle_line(&line);
        writeln!(writer, "{response}")?;
        writer.flush()?;
    }
    Ok(())
}

/// Serve requests on standard input and output
///
/// # Errors
///
/// Returns an I/O error if stdin or stdout fails.
pub fn serve_stdio<O: WordOracle, C: VerdictCache>(
    server: &GameServer<'_, O, C>,
) -> io::Result<()> {
    info!("Serving requests on stdin/stdout");
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve_lines(server, stdin.lock(), stdout.lock())
}

/// Serve requests over TCP, one thread per connection
///
/// All connections share the server, and with it the validity cache. Runs until
/// the listener fails.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound.
pub fn serve_tcp<O, C, A>(server: &GameServer<'_, O, C>, addr: A) -> io::Result<()>
where
    O: WordOracle,
    C: VerdictCache,
    A: ToSocketAddrs,
{
    let listener = TcpListener::bind(addr)?;
    info!("Listening on {}", listener.local_addr()?);
    accept_connections(server, &listener);
    Ok(())
}

/// Accept connections from a bound listener until it stops yielding them
pub fn accept_connections<O: WordOracle, C: VerdictCache>(
    server: &GameServer<'_, O, C>,
    listener: &TcpListener,
) {
    thread::scope(|scope| {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    scope.spawn(move || {
                        if let Err(e) = handle_connection(server, stream) {
                            warn!("Connection closed with error: {e}");
                        }
                    });
                }
                Err(e) => warn!("Failed to accept connection: {e}"),
            }
        }
    });
}

fn handle_connection<O: WordOracle, C: VerdictCache>(
    server: &GameServer<'_, O, C>,
    stream: TcpStream,
) -> io::Result<()> {
    let peer = stream.peer_addr()?;
    debug!("Client connected: {peer}");

    let reader = BufReader::new(stream.try_clone()?);
    serve_lines(server, reader, stream)?;

    debug!("Client disconnected: {peer}");
    Ok(())
}
