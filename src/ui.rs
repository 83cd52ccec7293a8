use std::io::{self, BufRead, Write};

/// The interaction surface of the admin console. Injected so the flows can
/// run against a scripted implementation in tests.
pub trait Ui {
    /// Blocking yes/no gate. Returning `false` aborts the pending action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Blocking notice the operator has to acknowledge.
    fn alert(&mut self, message: &str);
}

pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }

    fn alert(&mut self, message: &str) {
        println!("{message}");
    }
}
