use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::components::layout::PageShell;
use crate::components::notify::{alert, confirm};
use crate::format::{format_display_date, format_idr};
use crate::forms::TransactionForm;
use crate::models::{Transaction, TransactionKind};
use crate::router::Route;

fn load(transactions: UseStateHandle<Vec<Transaction>>) {
    spawn_local(async move {
        match api::transactions::list().await {
            Ok(list) => transactions.set(list),
            Err(e) => {
                log::error!("Error fetching transactions: {}", e);
                alert("Failed to load transactions. Please make sure you are logged in.");
            }
        }
    });
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let form = use_state(TransactionForm::default);
    let editing_id = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let transactions = transactions.clone();
        use_effect_with_deps(
            move |_| {
                load(transactions);
                || ()
            },
            (),
        );
    }

    let on_text = |apply: fn(&mut TransactionForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_kind = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.kind = TransactionKind::from_label(&select.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        let transactions = transactions.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match form.to_payload() {
                Ok(payload) => payload,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };

            let form = form.clone();
            let editing_id = editing_id.clone();
            let transactions = transactions.clone();
            let saving = saving.clone();
            saving.set(true);

            spawn_local(async move {
                let result = match (*editing_id).as_deref() {
                    Some(id) => api::transactions::update(id, &payload).await,
                    None => api::transactions::create(&payload).await,
                };

                match result {
                    Ok(()) => {
                        form.set(TransactionForm::default());
                        editing_id.set(None);
                        load(transactions);
                    }
                    Err(e) => {
                        log::error!("Error saving transaction: {}", e);
                        alert("Error saving transaction. Please check your input or token.");
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_cancel = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |_| {
            editing_id.set(None);
            form.set(TransactionForm::default());
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |tx: Transaction| {
            editing_id.set(Some(tx.id.clone()));
            form.set(TransactionForm::from_transaction(&tx));
        })
    };

    let on_delete = {
        let transactions = transactions.clone();
        Callback::from(move |id: String| {
            if !confirm("Delete this transaction?") {
                return;
            }
            let transactions = transactions.clone();
            spawn_local(async move {
                match api::transactions::delete(&id).await {
                    Ok(()) => load(transactions),
                    Err(e) => {
                        log::error!("Error deleting transaction: {}", e);
                        alert("Failed to delete transaction.");
                    }
                }
            });
        })
    };

    let is_editing = editing_id.is_some();

    html! {
        <PageShell title="Transactions" active={Route::Transactions}>
            <section class="card">
                <h3>{ if is_editing { "Edit Transaction" } else { "Add Transaction" } }</h3>
                <form onsubmit={on_submit} class="form-inline">
                    <select onchange={on_kind}>
                        <option value="Expense" selected={form.kind == TransactionKind::Expense}>{"Expense"}</option>
                        <option value="Income" selected={form.kind == TransactionKind::Income}>{"Income"}</option>
                    </select>
                    <input
                        value={form.category.clone()}
                        oninput={on_text(|f, v| f.category = v)}
                        placeholder="Category"
                        required={true}
                    />
                    <input
                        type="number"
                        value={form.amount.clone()}
                        oninput={on_text(|f, v| f.amount = v)}
                        placeholder="Amount"
                        required={true}
                    />
                    <input
                        type="date"
                        value={form.date.clone()}
                        oninput={on_text(|f, v| f.date = v)}
                        required={true}
                    />
                    <input
                        value={form.notes.clone()}
                        oninput={on_text(|f, v| f.notes = v)}
                        placeholder="Notes"
                    />
                    <button type="submit" disabled={*saving}>{ if is_editing { "Update" } else { "Add" } }</button>
                    if is_editing {
                        <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                    }
                </form>
            </section>

            <section class="card">
                <h3>{"All Transactions"}</h3>
                <table class="tx-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Type"}</th>
                            <th>{"Category"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Notes"}</th>
                            <th>{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for transactions.iter().map(|tx| {
                            let edit = {
                                let on_edit = on_edit.clone();
                                let tx = tx.clone();
                                Callback::from(move |_| on_edit.emit(tx.clone()))
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let id = tx.id.clone();
                                Callback::from(move |_| on_delete.emit(id.clone()))
                            };
                            html! {
                                <tr key={tx.id.clone()}>
                                    <td>{ format_display_date(&tx.date) }</td>
                                    <td>{ tx.kind.as_str() }</td>
                                    <td>{ tx.category.clone() }</td>
                                    <td>{ format_idr(tx.amount) }</td>
                                    <td>{ tx.notes.clone().unwrap_or_default() }</td>
                                    <td>
                                        <div class="row-actions">
                                            <button onclick={edit}>{"Edit"}</button>
                                            <button onclick={delete}>{"Delete"}</button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </section>
        </PageShell>
    }
}
