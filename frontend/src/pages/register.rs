use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::notify::alert;
use crate::models::RegisterRequest;
use crate::router::Route;
use crate::session;

fn bind(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RegisterRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let loading = loading.clone();
            let navigator = navigator.clone();
            loading.set(true);

            spawn_local(async move {
                match api::auth::register(&request).await {
                    Ok(auth) => {
                        session::save(&auth);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(err) => alert(&err.user_message("Registration failed")),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <h1>{"FinSight — Register"}</h1>
            <form onsubmit={on_submit} class="form">
                <input value={(*name).clone()} oninput={bind(&name)} placeholder="Name" />
                <input value={(*email).clone()} oninput={bind(&email)} placeholder="Email" />
                <input type="password" value={(*password).clone()} oninput={bind(&password)} placeholder="Password" />
                <button type="submit" disabled={*loading}>{ if *loading { "Please wait..." } else { "Register" } }</button>
            </form>
            <p>
                {"Already have an account? "}
                <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
            </p>
        </div>
    }
}
