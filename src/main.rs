//! Application entry point — terminal soundboard.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (written with defaults on first run).
//! 3. Create a single-threaded [`tokio`] runtime.
//! 4. Open the word table and build the speech backend.
//! 5. Seed and load the vocabulary (a failure leaves a degraded board).
//! 6. Read one command per line from stdin until `:quit` or EOF.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use soundboard::{
    board::{BoardCommand, BoardReply, Soundboard},
    config::AppConfig,
    speech::create_speech,
    vocabulary::VocabularyStore,
};

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("soundboard starting up");

    // 2. Configuration
    let config = AppConfig::load_or_init().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime (one session, one thread of control)
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    // 4. Store + speech
    let store = VocabularyStore::open(config.storage.words_path()).await;
    let speech = create_speech(&config.speech);
    let mut board = Soundboard::new(store, speech);

    // 5. Vocabulary
    match board.load_vocabulary(config.vocabulary.default_words.as_slice()).await {
        Ok(words) => println!("{}", BoardReply::Words(words.to_vec())),
        Err(e) => {
            log::error!("vocabulary unavailable: {e}");
            eprintln!("Vocabulary unavailable ({e}); the board has no words.");
        }
    }
    println!("Type a word or its number; :speak :delete :clear :words :add <word> :quit");

    // 6. Command loop
    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');
    while let Some(line) = lines.next_segment().await? {
        let Some(command) = BoardCommand::parse_bytes(&line) else {
            continue;
        };
        match board.execute(command).await {
            Ok(BoardReply::Quit) => break,
            Ok(reply) => println!("{reply}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    log::info!("soundboard closing");
    Ok(())
}
