use std::process::ExitCode;

fn main() -> ExitCode {
    sensible_env_logger::init!();

    let command = anime_insights::interpret();
    match anime_insights::execute(&command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
