use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session;

struct NavItem {
    label: &'static str,
    route: Route,
}

static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
    },
    NavItem {
        label: "Transactions",
        route: Route::Transactions,
    },
    NavItem {
        label: "Goals",
        route: Route::Goals,
    },
];

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub title: &'static str,
    pub active: Route,
    pub children: Children,
}

/// Header with the page title, links to the other pages and a log out button.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    let navigator = use_navigator();
    let user_name = session::user()
        .map(|u| u.name)
        .filter(|n| !n.trim().is_empty());

    let on_logout = Callback::from(move |_| {
        session::clear();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="container">
            <header class="top">
                <h1>{ props.title }</h1>
                <nav>
                    { for NAV_ITEMS.iter().filter(|item| item.route != props.active).map(|item| html! {
                        <Link<Route> to={item.route}>{ item.label }</Link<Route>>
                    }) }
                    if let Some(name) = user_name {
                        <span class="user">{ name }</span>
                    }
                    <button type="button" class="link" onclick={on_logout}>{"Log Out"}</button>
                </nav>
            </header>
            { for props.children.iter() }
        </div>
    }
}
