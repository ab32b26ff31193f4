use api::models::{Collection, Contribution, FinanceAccount};
use api::resources::{DEFAULT_LIMIT, DEFAULT_PAGE};
use api::LoadState;
use dioxus::prelude::*;

use crate::auth::use_services;
use crate::components::{Alert, AlertKind, Spinner};

fn money(amount: f64) -> String {
    format!("{amount:.2} PLN")
}

/// Read-only finance overview. Payments are not wired up yet, so the page only lists
/// what the backend reports.
#[component]
pub fn FinanceView() -> Element {
    let services = use_services();
    let mut account = use_signal(|| LoadState::<FinanceAccount>::Loading);
    let mut collections = use_signal(|| LoadState::<Vec<Collection>>::Loading);
    let mut contributions = use_signal(|| LoadState::<Vec<Contribution>>::Loading);

    use_hook(move || {
        spawn(async move {
            account.set(LoadState::from_result(services.api.get_finance_account().await));
            let page = services
                .api
                .list_collections(DEFAULT_PAGE, DEFAULT_LIMIT)
                .await
                .map(|page| page.data);
            collections.set(LoadState::from_result(page));
            contributions.set(LoadState::from_result(services.api.my_contributions().await));
        });
    });

    rsx! {
        div { class: "sm-page",
            header { class: "sm-page-header",
                h1 { class: "sm-title", "Finance Account" }
            }
            p { class: "sm-notice", "This section is in development. Payments will be available soon." }

            section { class: "sm-card",
                h2 { class: "sm-subtitle", "Account" }
                {match &*account.read() {
                    LoadState::Loaded(acc) => rsx! {
                        dl { class: "sm-details",
                            dt { "IBAN" }
                            dd { class: "sm-code", "{acc.iban}" }
                            dt { "Balance" }
                            dd { {money(acc.balance)} }
                            if acc.is_treasurer_account {
                                dt { "Type" }
                                dd { span { class: "sm-chip", "Treasurer" } }
                            }
                        }
                    },
                    LoadState::Failed(err) => rsx! { Alert { kind: AlertKind::Error, message: err.to_string() } },
                    _ => rsx! { Spinner {} },
                }}
            }

            section { class: "sm-card",
                h2 { class: "sm-subtitle", "Collections" }
                {match &*collections.read() {
                    LoadState::Loaded(list) if list.is_empty() => rsx! {
                        p { class: "sm-empty", "No collections yet." }
                    },
                    LoadState::Loaded(list) => rsx! {
                        for collection in list.iter() {
                            CollectionRow { key: "{collection.id.clone().unwrap_or_default()}", collection: collection.clone() }
                        }
                    },
                    LoadState::Failed(err) => rsx! { Alert { kind: AlertKind::Error, message: err.to_string() } },
                    _ => rsx! { Spinner {} },
                }}
            }

            section { class: "sm-card",
                h2 { class: "sm-subtitle", "My Contributions" }
                {match &*contributions.read() {
                    LoadState::Loaded(list) if list.is_empty() => rsx! {
                        p { class: "sm-empty", "You have not made any contributions yet." }
                    },
                    LoadState::Loaded(list) => rsx! {
                        table { class: "sm-table",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Amount" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for contribution in list.iter() {
                                    tr { key: "{contribution.id.clone().unwrap_or_default()}",
                                        td { "{contribution.created_at}" }
                                        td { {money(contribution.amount)} }
                                        td { "{contribution.status}" }
                                    }
                                }
                            }
                        }
                    },
                    LoadState::Failed(err) => rsx! { Alert { kind: AlertKind::Error, message: err.to_string() } },
                    _ => rsx! { Spinner {} },
                }}
            }
        }
    }
}

#[component]
fn CollectionRow(collection: Collection) -> Element {
    let percent = (collection.progress() * 100.0).round();
    rsx! {
        div { class: "sm-collection",
            div { class: "sm-row sm-spread",
                span { class: "sm-strong", "{collection.title}" }
                span { class: "sm-muted",
                    {format!("{} / {}", money(collection.total_collected), money(collection.goal))}
                }
            }
            if !collection.description.is_empty() {
                p { class: "sm-muted", "{collection.description}" }
            }
            div { class: "sm-progress",
                div { class: "sm-progress-bar", style: "width: {percent}%;" }
            }
            span { class: "sm-muted sm-small",
                "{collection.students_paid_in_full} of {collection.students_count} students paid in full"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::money;

    #[test]
    fn test_money_format() {
        assert_eq!(money(12.5), "12.50 PLN");
        assert_eq!(money(0.0), "0.00 PLN");
    }
}
