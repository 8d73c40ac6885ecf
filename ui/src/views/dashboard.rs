use dioxus::prelude::*;

use crate::charts::{BarChart, DoughnutChart, LineChart};
use crate::components::widgets::{Card, CardHeader};
use crate::core::data::{self, Transaction, TransactionStatus};
use crate::t;

#[component]
pub fn Dashboard(dark_mode: bool) -> Element {
    // The flag is used as given; the page follows the shell's theme.
    let theme_class = if dark_mode { "dark" } else { "" };

    rsx! {
        section { class: "page page-dashboard {theme_class}",
            div { class: "dashboard__stats",
                StatCard {
                    title: t!("dashboard-revenue-title"),
                    value: "$54,321",
                    description: t!("dashboard-revenue-description"),
                    BarChart { series: data::SALES }
                }
                StatCard {
                    title: t!("dashboard-users-title"),
                    value: "1,234",
                    description: t!("dashboard-users-description"),
                    LineChart { series: data::USERS }
                }
                StatCard {
                    title: t!("dashboard-devices-title"),
                    value: t!("dashboard-devices-value"),
                    description: t!("dashboard-devices-description"),
                    DoughnutChart { series: data::DEVICES }
                }
            }

            div { class: "dashboard__panels",
                Card {
                    CardHeader {
                        title: t!("dashboard-trend-title"),
                        description: t!("dashboard-trend-description"),
                    }
                    div { class: "card__content",
                        LineChart { series: data::REVENUE, fill: true, begin_at_zero: true }
                    }
                }
                Card {
                    CardHeader { title: t!("dashboard-transactions-title") }
                    div { class: "card__content table-scroll",
                        TransactionTable { rows: data::TRANSACTIONS.to_vec() }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: String, description: String, children: Element) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardHeader { title: title, description: description }
            div { class: "card__content",
                div { class: "stat-card__value", "{value}" }
                {children}
            }
        }
    }
}

#[component]
fn TransactionTable(rows: Vec<Transaction>) -> Element {
    rsx! {
        table { class: "transactions",
            thead {
                tr {
                    th { {t!("transactions-id")} }
                    th { {t!("transactions-customer")} }
                    th { {t!("transactions-amount")} }
                    th { {t!("transactions-status")} }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.id}",
                        td { "{row.id}" }
                        td { "{row.customer}" }
                        td { "{row.amount}" }
                        td {
                            span { class: row.status.badge_class(), {status_label(row.status)} }
                        }
                    }
                }
            }
        }
    }
}

fn status_label(status: TransactionStatus) -> String {
    match status {
        TransactionStatus::Completed => t!("transaction-completed"),
        TransactionStatus::Pending => t!("transaction-pending"),
        TransactionStatus::Failed => t!("transaction-failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render::to_html;

    fn light() -> Element {
        rsx! { Dashboard { dark_mode: false } }
    }

    fn dark() -> Element {
        rsx! { Dashboard { dark_mode: true } }
    }

    #[test]
    fn renders_cards_charts_and_transactions() {
        let html = to_html(light);
        assert!(html.contains("$54,321"));
        assert!(html.contains("1,234"));
        assert_eq!(html.matches("chart--bar").count(), 1);
        assert_eq!(html.matches("chart--line").count(), 1);
        assert_eq!(html.matches("chart--area").count(), 1);
        assert_eq!(html.matches("chart--doughnut").count(), 1);
        for row in data::TRANSACTIONS {
            assert!(html.contains(row.customer));
        }
        assert!(html.contains("badge--danger"));
    }

    #[test]
    fn theme_flag_is_not_inverted() {
        assert!(!to_html(light).contains("page-dashboard dark"));
        assert!(to_html(dark).contains("page-dashboard dark"));
    }
}
