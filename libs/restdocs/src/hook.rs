//! Trait definition for post-assertion hooks

use async_trait::async_trait;

use crate::exchange::body_text;
use crate::{Exchange, RestDocsError};

/// Hook invoked with an exchange once its expectations have passed
///
/// Implement this trait to plug additional side effects into a verification
/// chain (documentation, recording, reporting).
#[async_trait]
pub trait ExchangeHook: Send + Sync {
    /// Handle a verified exchange
    async fn on_exchange(&self, exchange: &Exchange) -> Result<(), RestDocsError>;

    /// Get the hook name (for logging)
    fn name(&self) -> &'static str;
}

/// Hook that dumps the exchange to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintHook;

/// Print every exchange it sees
pub fn print() -> PrintHook {
    PrintHook
}

impl PrintHook {
    pub fn render(&self, exchange: &Exchange) -> String {
        let request = &exchange.request;
        let response = &exchange.response;
        let mut out = String::new();

        out.push_str("\nRequest:\n");
        out.push_str(&format!("      HTTP Method = {}\n", request.method));
        out.push_str(&format!("      Request URI = {}\n", request.path_and_query()));
        out.push_str(&format!("          Headers = {:?}\n", request.headers));
        out.push_str(&format!("             Body = {}\n", body_text(&request.body)));

        out.push_str("\nResponse:\n");
        out.push_str(&format!("           Status = {}\n", response.status.as_u16()));
        out.push_str(&format!("          Headers = {:?}\n", response.headers));
        out.push_str(&format!("             Body = {}\n", body_text(&response.body)));
        out
    }
}

#[async_trait]
impl ExchangeHook for PrintHook {
    async fn on_exchange(&self, exchange: &Exchange) -> Result<(), RestDocsError> {
        println!("{}", self.render(exchange));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "print"
    }
}
