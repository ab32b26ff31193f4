use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::components::Avatar;
use crate::icons::{FaChildren, FaHouse, FaUser, FaWallet};
use crate::Icon;

/// Sections reachable from the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Dashboard,
    Students,
    Finance,
    Profile,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Dashboard,
        MenuItem::Students,
        MenuItem::Finance,
        MenuItem::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Dashboard => "Dashboard",
            MenuItem::Students => "My Students",
            MenuItem::Finance => "Finance Account",
            MenuItem::Profile => "Profile",
        }
    }
}

#[component]
fn MenuIcon(item: MenuItem) -> Element {
    match item {
        MenuItem::Dashboard => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        MenuItem::Students => rsx! { Icon { icon: FaChildren, width: 16, height: 16 } },
        MenuItem::Finance => rsx! { Icon { icon: FaWallet, width: 16, height: 16 } },
        MenuItem::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
    }
}

#[component]
pub fn SideMenu(
    active: MenuItem,
    on_select: EventHandler<MenuItem>,
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let user = auth.read().user.clone();
    let (name, avatar, email) = match user {
        Some(user) => (user.display_name(), user.avatar.clone(), user.email.clone()),
        None => ("SchoolMoney".to_string(), String::new(), String::new()),
    };

    rsx! {
        nav { class: "sm-side-menu",
            div { class: "sm-side-brand", "SchoolMoney" }
            div { class: "sm-side-user",
                Avatar { src: avatar, name: name.clone(), size: 40 }
                div { class: "sm-list-card-text",
                    span { class: "sm-strong sm-ellipsis", "{name}" }
                    span { class: "sm-muted sm-ellipsis", "{email}" }
                }
            }
            ul { class: "sm-side-items",
                for item in MenuItem::ALL {
                    li {
                        key: "{item.label()}",
                        class: if item == active { "sm-side-item active" } else { "sm-side-item" },
                        onclick: move |_| on_select.call(item),
                        MenuIcon { item: item }
                        span { {item.label()} }
                    }
                }
            }
            div { class: "sm-side-footer",
                LogoutButton {
                    class: "sm-btn sm-btn-ghost sm-btn-block",
                    on_logout: move |_| on_logout.call(()),
                }
            }
        }
    }
}
