use crate::application::{AppError, WalletService};
use crate::domain::{Clock, TransactionKind};

use super::prompt::Prompt;
use super::render::render_wallet;

const MENU: &str = "Action [add, withdraw, history, json, quit]:";

/// One menu choice in the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Withdraw,
    History,
    Json,
    Quit,
}

impl Action {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim().to_lowercase().as_str() {
            "add" | "deposit" | "+" => Ok(Action::Add),
            "withdraw" | "-" => Ok(Action::Withdraw),
            "history" | "show" | "" => Ok(Action::History),
            "json" => Ok(Action::Json),
            "quit" | "exit" | "q" => Ok(Action::Quit),
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}

/// Drive a wallet from a prompt until the user quits or input ends.
pub async fn run_session<C, P>(
    service: &mut WalletService<C>,
    prompt: &mut P,
) -> Result<(), AppError>
where
    C: Clock,
    P: Prompt,
{
    prompt.show(&render_wallet(&service.view())).await?;

    while let Some(answer) = prompt.ask(MENU).await? {
        let action = match Action::parse(&answer) {
            Ok(action) => action,
            Err(e) => {
                prompt.show(&e.to_string()).await?;
                continue;
            }
        };

        match action {
            Action::Add => request_amount(service, prompt, TransactionKind::Deposit).await?,
            Action::Withdraw => request_amount(service, prompt, TransactionKind::Withdrawal).await?,
            Action::History => prompt.show(&render_wallet(&service.view())).await?,
            Action::Json => {
                let json = serde_json::to_string_pretty(&service.view())
                    .map_err(std::io::Error::other)?;
                prompt.show(&json).await?;
            }
            Action::Quit => break,
        }
    }

    tracing::debug!(
        transactions = service.ledger().transaction_count(),
        "wallet session ended"
    );
    Ok(())
}

/// Ask for an amount and apply it. Closed input cancels the request; any
/// answer, blank included, is validated by the wallet.
async fn request_amount<C, P>(
    service: &mut WalletService<C>,
    prompt: &mut P,
    kind: TransactionKind,
) -> Result<(), AppError>
where
    C: Clock,
    P: Prompt,
{
    let message = match kind {
        TransactionKind::Deposit => "Enter amount to add:",
        TransactionKind::Withdrawal => "Enter amount to withdraw:",
    };

    let answer = match prompt.ask(message).await? {
        Some(answer) => answer,
        None => {
            tracing::debug!(%kind, "amount request cancelled");
            return Ok(());
        }
    };

    match service.submit(kind, &answer) {
        Ok(_) => prompt.show(&render_wallet(&service.view())).await?,
        Err(e) if e.is_user_error() => prompt.show(&e.to_string()).await?,
        Err(e) => return Err(e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(Action::parse("add").unwrap(), Action::Add);
        assert_eq!(Action::parse(" Deposit ").unwrap(), Action::Add);
        assert_eq!(Action::parse("withdraw").unwrap(), Action::Withdraw);
        assert_eq!(Action::parse("").unwrap(), Action::History);
        assert_eq!(Action::parse("json").unwrap(), Action::Json);
        assert_eq!(Action::parse("q").unwrap(), Action::Quit);
        assert!(matches!(
            Action::parse("transfer"),
            Err(AppError::UnknownCommand(cmd)) if cmd == "transfer"
        ));
    }
}
