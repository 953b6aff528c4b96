use std::process::ExitCode;

use chat_seeder::SeedError;

fn main() -> ExitCode {
    match chat_seeder::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if let Some(SeedError::InvalidInput(_)) = err.downcast_ref::<SeedError>() {
                eprintln!("Usage: chat-seeder --content '...' [--conversation-id <ID>]");
            }
            ExitCode::from(1)
        }
    }
}
