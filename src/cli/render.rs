use crate::application::WalletView;
use crate::domain::TransactionKind;

/// Render a wallet as plain text: balance header, then each day newest first.
pub fn render_wallet(view: &WalletView) -> String {
    let mut out = String::new();
    out.push_str("Wallet\n");
    out.push_str(&format!("Your Balance: {}\n", view.balance_display));
    out.push('\n');

    if view.is_empty() {
        out.push_str("No transactions yet\n");
        return out;
    }

    for (i, day) in view.days.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&day.label);
        out.push('\n');
        for item in &day.items {
            let arrow = match item.kind {
                TransactionKind::Deposit => "↑",
                TransactionKind::Withdrawal => "↓",
            };
            out.push_str(&format!(
                "  {} {:<12} {:>8} {:>14}\n",
                arrow, item.name, item.time, item.amount_display
            ));
        }
    }
    out
}
