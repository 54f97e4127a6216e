use numguess_cli::ui;
use std::io;

fn main() {
    let mut stderr = io::stderr();
    if let Err(e) = numguess_cli::logging::init_logging() {
        let _ = ui::display_warning(&mut stderr, &format!("logging disabled: {}", e));
    }
    let mut stdout = io::stdout();
    let code = numguess_cli::run(std::env::args(), &mut stdout, &mut stderr);
    std::process::exit(code);
}
