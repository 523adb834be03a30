use std::io;

use matching_engine::engine::MatchingEngine;
use matching_engine::protocol::MessageProcessor;

fn main() -> io::Result<()> {
    // Initialize tracing; stdout carries protocol output, so logs go to stderr
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    tracing::info!("Starting matching engine");

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut processor = MessageProcessor::new(MatchingEngine::new());
    processor.run(stdin.lock(), &mut stdout.lock())
}
