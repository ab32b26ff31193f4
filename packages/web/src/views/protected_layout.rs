use dioxus::prelude::*;
use ui::components::Spinner;
use ui::{use_auth, MenuItem, SideMenu};

use crate::Route;

fn menu_item(route: &Route) -> MenuItem {
    match route {
        Route::Students {} => MenuItem::Students,
        Route::Profile {} => MenuItem::Profile,
        Route::Finance {} => MenuItem::Finance,
        _ => MenuItem::Dashboard,
    }
}

fn route_for(item: MenuItem) -> Route {
    match item {
        MenuItem::Dashboard => Route::Dashboard {},
        MenuItem::Students => Route::Students {},
        MenuItem::Finance => Route::Finance {},
        MenuItem::Profile => Route::Profile {},
    }
}

/// Shell for signed-in pages: side menu plus the routed page. Anonymous visitors are
/// sent to the login page.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_authenticated() {
            tracing::debug!("No session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let state = auth();
    if state.loading || !state.is_authenticated() {
        return rsx! {
            div { class: "sm-center-screen", Spinner {} }
        };
    }

    rsx! {
        div { class: "sm-shell",
            SideMenu {
                active: menu_item(&route),
                on_select: move |item: MenuItem| {
                    nav.push(route_for(item));
                },
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            main { class: "sm-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_routes_agree() {
        for item in MenuItem::ALL {
            assert_eq!(menu_item(&route_for(item)), item);
        }
        assert_eq!(menu_item(&Route::Root {}), MenuItem::Dashboard);
    }
}
