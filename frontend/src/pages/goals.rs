use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::layout::PageShell;
use crate::components::notify::{alert, confirm};
use crate::format::{format_display_date, format_idr};
use crate::forms::GoalForm;
use crate::models::Goal;
use crate::router::Route;
use crate::stats;

fn load(goals: UseStateHandle<Vec<Goal>>) {
    spawn_local(async move {
        match api::goals::list().await {
            Ok(list) => goals.set(list),
            Err(e) => {
                log::error!("Error fetching goals: {}", e);
                alert("Failed to load goals. Please make sure you are logged in.");
            }
        }
    });
}

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let goals = use_state(Vec::<Goal>::new);
    let form = use_state(GoalForm::default);
    let editing = use_state(|| None::<Goal>);

    {
        let goals = goals.clone();
        use_effect_with_deps(
            move |_| {
                load(goals);
                || ()
            },
            (),
        );
    }

    let on_text = |apply: fn(&mut GoalForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let editing = editing.clone();
        let goals = goals.clone();
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
            let editing = editing.clone();
            let goals = goals.clone();
            spawn_local(async move {
                let result = match (*editing).as_ref() {
                    Some(goal) => api::goals::update(&goal.id, &payload).await,
                    None => api::goals::create(&payload).await,
                };

                match result {
                    Ok(()) => {
                        editing.set(None);
                        form.set(GoalForm::default());
                        load(goals);
                    }
                    Err(e) => {
                        log::error!("Error saving goal: {}", e);
                        alert("Error saving goal. Please check your input or token.");
                    }
                }
            });
        })
    };

    let on_cancel = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            editing.set(None);
            form.set(GoalForm::default());
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |goal: Goal| {
            form.set(GoalForm::from_goal(&goal));
            editing.set(Some(goal));
        })
    };

    let on_delete = {
        let goals = goals.clone();
        Callback::from(move |id: String| {
            if !confirm("Delete this goal?") {
                return;
            }
            let goals = goals.clone();
            spawn_local(async move {
                match api::goals::delete(&id).await {
                    Ok(()) => load(goals),
                    Err(e) => {
                        log::error!("Error deleting goal: {}", e);
                        alert("Failed to delete goal.");
                    }
                }
            });
        })
    };

    let is_editing = editing.is_some();

    html! {
        <PageShell title="Goals" active={Route::Goals}>
            <section class="card">
                <h3>{ if is_editing { "Edit Goal" } else { "Create Goal" } }</h3>
                <form onsubmit={on_submit} class="form-inline">
                    <input
                        value={form.name.clone()}
                        oninput={on_text(|f, v| f.name = v)}
                        placeholder="Goal name"
                    />
                    <input
                        value={form.target_amount.clone()}
                        oninput={on_text(|f, v| f.target_amount = v)}
                        placeholder="Target amount"
                    />
                    <input
                        type="date"
                        value={form.deadline.clone()}
                        oninput={on_text(|f, v| f.deadline = v)}
                    />
                    <button type="submit">{ if is_editing { "Update" } else { "Create" } }</button>
                    if is_editing {
                        <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                    }
                </form>
            </section>

            <section class="card">
                <h3>{"Your Goals"}</h3>
                if goals.is_empty() {
                    <p class="muted">{"No goals yet."}</p>
                }
                <ul class="goal-list">
                    { for goals.iter().map(|goal| {
                        let percent = (stats::goal_progress(goal) * 100.0).round() as i64;
                        let edit = {
                            let on_edit = on_edit.clone();
                            let goal = goal.clone();
                            Callback::from(move |_| on_edit.emit(goal.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = goal.id.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };
                        html! {
                            <li key={goal.id.clone()}>
                                <strong>{ goal.name.clone() }</strong>
                                { format!(" — {} / {} — {}", format_idr(goal.current_amount), format_idr(goal.target_amount), goal.status) }
                                if let Some(deadline) = goal.deadline.as_deref().filter(|d| !d.is_empty()) {
                                    <span class="muted">{ format!(" (due {})", format_display_date(deadline)) }</span>
                                }
                                <div class="progress">
                                    <div class="progress-bar" style={format!("width: {}%", percent)}></div>
                                </div>
                                <span class="muted">{ format!("{}% saved", percent) }</span>
                                <div class="row-actions">
                                    <button onclick={edit}>{"Edit"}</button>
                                    <button onclick={delete}>{"Delete"}</button>
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            </section>
        </PageShell>
    }
}
