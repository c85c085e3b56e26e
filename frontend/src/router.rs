use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::goals::GoalsPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::transactions::TransactionsPage;
use crate::session;

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/transactions")]
    Transactions,
    #[at("/goals")]
    Goals,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Transactions | Route::Goals)
    }
}

/// Where a route actually lands given whether a token is stored.
pub fn resolve(route: Route, authenticated: bool) -> Route {
    match route {
        Route::Home if authenticated => Route::Dashboard,
        Route::Home => Route::Login,
        r if r.requires_session() && !authenticated => Route::Login,
        r => r,
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    let target = resolve(route, session::is_authenticated());
    if target != route {
        log::debug!("Redirecting {:?} to {:?}", route, target);
        return html! { <Redirect<Route> to={target} /> };
    }

    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Transactions => html! { <TransactionsPage /> },
        Route::Goals => html! { <GoalsPage /> },
        Route::Home => html! {},
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="container">
                    <h1>{"404 Not Found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to FinSight"}</Link<Route>>
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_depends_on_session() {
        assert_eq!(resolve(Route::Home, true), Route::Dashboard);
        assert_eq!(resolve(Route::Home, false), Route::Login);
    }

    #[test]
    fn protected_pages_need_a_token() {
        for route in [Route::Dashboard, Route::Transactions, Route::Goals] {
            assert_eq!(resolve(route, false), Route::Login);
            assert_eq!(resolve(route, true), route);
        }
    }

    #[test]
    fn auth_pages_stay_reachable() {
        assert_eq!(resolve(Route::Login, true), Route::Login);
        assert_eq!(resolve(Route::Register, false), Route::Register);
        assert_eq!(resolve(Route::NotFound, false), Route::NotFound);
    }
}
