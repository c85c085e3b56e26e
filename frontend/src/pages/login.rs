use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::notify::alert;
use crate::models::LoginRequest;
use crate::router::Route;
use crate::session;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let loading = loading.clone();
            let navigator = navigator.clone();
            loading.set(true);

            spawn_local(async move {
                match api::auth::login(&request).await {
                    Ok(auth) => {
                        session::save(&auth);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(err) => alert(&err.user_message("Login failed")),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <h1>{"FinSight — Login"}</h1>
            <form onsubmit={on_submit} class="form">
                <input
                    value={(*email).clone()}
                    oninput={{
                        let email = email.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        })
                    }}
                    placeholder="Email"
                />
                <input
                    type="password"
                    value={(*password).clone()}
                    oninput={{
                        let password = password.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        })
                    }}
                    placeholder="Password"
                />
                <button type="submit" disabled={*loading}>{ if *loading { "Please wait..." } else { "Login" } }</button>
            </form>
            <p>
                {"Don't have an account? "}
                <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
            </p>
        </div>
    }
}
