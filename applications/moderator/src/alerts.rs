/// Alerts printed to the terminal
use trailtips_views::AlertSink;

/// Prints each alert on its own line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAlerts;

impl AlertSink for ConsoleAlerts {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }
}
