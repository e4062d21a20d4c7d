use contracts::dashboards::sales_overview::Transaction;
use leptos::prelude::*;

use crate::shared::number_format::format_money;

/// Stateless table over the currently visible page of transactions.
#[component]
pub fn TransactionsTable(
    #[prop(into)] transactions: Signal<Vec<Transaction>>,
) -> impl IntoView {
    view! {
        <table class="transactions-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th>"Price"</th>
                    <th>"Category"</th>
                    <th>"Sold"</th>
                    <th>"Image"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || transactions.get()
                    key=|tx| tx.id
                    children=move |tx: Transaction| {
                        let sold_label = if tx.sold { "Yes" } else { "No" };
                        view! {
                            <tr>
                                <td>{tx.id}</td>
                                <td>{tx.title.clone()}</td>
                                <td class="transactions-table__description">{tx.description.clone()}</td>
                                <td class="transactions-table__price">{format_money(tx.price)}</td>
                                <td>{tx.category.clone()}</td>
                                <td>{sold_label}</td>
                                <td>
                                    <img
                                        src=tx.image_url.clone()
                                        alt=tx.title.clone()
                                        class="transactions-table__image"
                                    />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
