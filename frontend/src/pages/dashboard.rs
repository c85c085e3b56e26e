use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::charts::{slice_color, CategoryPieChart, IncomeExpenseChart, EXPENSE_COLOR, INCOME_COLOR};
use crate::components::layout::PageShell;
use crate::components::stat_card::{balance_color, StatCard};
use crate::format::{format_idr, format_percent};
use crate::models::Transaction;
use crate::router::Route;
use crate::stats;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);

    {
        let transactions = transactions.clone();
        let loading = loading.clone();

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::transactions::list().await {
                        Ok(list) => transactions.set(list),
                        Err(e) => log::error!("Dashboard could not load transactions: {}", e),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let totals = stats::totals(&transactions);
    let daily = stats::daily_series(&transactions);
    let categories = stats::expenses_by_category(&transactions);

    html! {
        <PageShell title="Dashboard" active={Route::Dashboard}>
            <section class="summary">
                <StatCard title="Total Income" amount={totals.income} color={INCOME_COLOR} />
                <StatCard title="Total Expense" amount={totals.expense} color={EXPENSE_COLOR} />
                <StatCard title="Net Balance" amount={totals.net} color={balance_color(totals.net)} />
            </section>

            <section class="charts">
                <div class="card wide">
                    <h3>{"Income vs Expense Over Time"}</h3>
                    if *loading {
                        <p class="muted">{"Loading..."}</p>
                    } else if daily.is_empty() {
                        <p class="muted">{"No transactions yet."}</p>
                    } else {
                        <IncomeExpenseChart points={daily} />
                    }
                </div>

                <div class="card">
                    <h3>{"Spending by Category"}</h3>
                    if categories.is_empty() {
                        <p class="muted">{"No expenses recorded."}</p>
                    } else {
                        <CategoryPieChart slices={categories.clone()} />
                    }
                </div>
            </section>

            if !categories.is_empty() {
                <section class="card">
                    <h3>{"Top Expense Categories"}</h3>
                    <table class="tx-table">
                        <thead>
                            <tr>
                                <th>{"Category"}</th>
                                <th>{"Total Spent"}</th>
                                <th>{"Percentage"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for categories.iter().enumerate().map(|(i, c)| html! {
                                <tr key={c.name.clone()}>
                                    <td>
                                        <span class="swatch" style={format!("background: {}", slice_color(i))}></span>
                                        { c.name.clone() }
                                    </td>
                                    <td>{ format_idr(c.value) }</td>
                                    <td>{ format!("{}%", format_percent(stats::category_share(c.value, totals.expense))) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </section>
            }
        </PageShell>
    }
}
