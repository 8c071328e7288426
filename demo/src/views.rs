//! Page content builders.
//!
//! The demo's half of the contract with `pixbank-ui`: domain data in,
//! renderable children out. The layout wraps whatever these produce.

use pixbank_core::{Transaction, TransactionStatus};
use pixbank_dom::{Element, Node};

use crate::seed::Statement;

/// Ad-hoc page content: one paragraph per given text.
pub fn page(texts: &[String]) -> Vec<Node> {
    texts
        .iter()
        .map(|text| Element::new("p").child(Node::text(text)).into())
        .collect()
}

/// The statement page: a heading for the account and one table row per
/// transaction.
pub fn statement(statement: &Statement) -> Vec<Node> {
    let heading = Element::new("header")
        .child(Element::new("h1").child(Node::text("Extrato PIX")))
        .child(Element::new("p").child(Node::text(format!(
            "{}, conta {} ({})",
            statement.owner.name, statement.account_number, statement.bank_name
        ))));

    let mut table = Element::new("table").class("statement").child(header_row());
    for transaction in &statement.transactions {
        table = table.child(transaction_row(transaction));
    }

    vec![heading.into(), table.into()]
}

fn header_row() -> Node {
    Element::new("tr")
        .child(Element::new("th").child(Node::text("Descrição")))
        .child(Element::new("th").child(Node::text("Valor")))
        .child(Element::new("th").child(Node::text("Status")))
        .into()
}

fn transaction_row(transaction: &Transaction) -> Node {
    let status = match &transaction.cancel_reason {
        Some(reason) => format!("{} ({})", transaction.status, reason),
        None => transaction.status.to_string(),
    };

    Element::new("tr")
        .class(status_class(transaction.status))
        .child(cell(&transaction.description))
        .child(cell(&format!("R$ {:.2}", transaction.amount)))
        .child(cell(&status))
        .into()
}

fn cell(text: &str) -> Element {
    Element::new("td").child(Node::text(text))
}

fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "tx-pending",
        TransactionStatus::Confirmed => "tx-confirmed",
        TransactionStatus::Completed => "tx-completed",
        TransactionStatus::Failed => "tx-error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixbank_dom::text_content;

    #[test]
    fn statement_table_has_one_row_per_transaction() {
        let statement = crate::seed::run().unwrap();
        let children = statement_children_as_fragment(&statement);

        let rows = children.find_all("tr");
        assert_eq!(rows.len(), statement.transactions.len() + 1);
    }

    #[test]
    fn failed_rows_show_the_reason() {
        let statement = crate::seed::run().unwrap();
        let children = statement_children_as_fragment(&statement);

        let text = text_content(&children);
        let failed = statement
            .transactions
            .iter()
            .find(|tx| tx.status == TransactionStatus::Failed)
            .unwrap();
        assert!(text.contains(failed.cancel_reason.as_deref().unwrap()));
    }

    fn statement_children_as_fragment(data: &Statement) -> Node {
        Node::fragment(statement(data))
    }
}
