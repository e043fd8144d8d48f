//! Admin dashboard: every order in the system with status management.

use leptos::prelude::*;

use crate::components::order_summary::{OrderItemsList, StatusBadge};
use crate::net::api::ApiClient;
use crate::net::types::{Order, OrderStatus};
use crate::util::auth::use_auth;
use crate::util::format::{format_date, format_price};

#[cfg(feature = "hydrate")]
const SUCCESS_CLEAR_DELAY: std::time::Duration = std::time::Duration::from_secs(3);

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let orders = LocalResource::new(move || {
        let client = auth.with(ApiClient::for_session);
        async move { client.all_orders().await }
    });

    let selected = RwSignal::new(None::<Order>);
    let success = RwSignal::new(String::new());
    let updating = RwSignal::new(false);

    let on_change = Callback::new(move |(id, status): (String, OrderStatus)| {
        if updating.get_untracked() {
            return;
        }
        updating.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = auth.with_untracked(ApiClient::for_session);
            leptos::task::spawn_local(async move {
                match client.update_order_status(&id, status).await {
                    Ok(change) => {
                        success.set(format!("Order #{} updated to {}", change.id, change.status));
                        selected.set(None);
                        orders.refetch();
                        updating.set(false);
                        gloo_timers::future::sleep(SUCCESS_CLEAR_DELAY).await;
                        success.set(String::new());
                    }
                    Err(e) => {
                        updating.set(false);
                        leptos::logging::warn!("status update for order {id} failed: {e}");
                        if let Some(w) = web_sys::window() {
                            let _ = w.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status, success);
            updating.set(false);
        }
    });

    view! {
        <div class="admin-dashboard">
            <div class="page-header">
                <h1>"Admin Dashboard"</h1>
            </div>

            <Show when=move || !success.get().is_empty()>
                <div class="success-message">{move || success.get()}</div>
            </Show>

            <Suspense fallback=move || view! { <div class="loading">"Loading orders..."</div> }>
                {move || {
                    orders
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <div class="error">"Error: " {e.to_string()}</div> }.into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <div class="empty-state">
                                    <p>"There are no orders in the system"</p>
                                </div>
                            }
                            .into_any(),
                            Ok(list) => view! { <OrdersTable orders=list selected/> }.into_any(),
                        })
                }}
            </Suspense>

            {move || {
                selected
                    .get()
                    .map(|order| view! { <StatusDialog order selected updating on_change/> })
            }}
        </div>
    }
}

#[component]
fn OrdersTable(orders: Vec<Order>, selected: RwSignal<Option<Order>>) -> impl IntoView {
    view! {
        <div class="orders-table-container">
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"User"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {orders
                        .into_iter()
                        .map(|order| {
                            let username = order.user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
                            let row = StoredValue::new(order.clone());
                            view! {
                                <tr>
                                    <td>"#" {order.id}</td>
                                    <td>{username}</td>
                                    <td>{format_price(order.total)}</td>
                                    <td>
                                        <StatusBadge status=order.status/>
                                    </td>
                                    <td>{format_date(&order.created_at)}</td>
                                    <td>
                                        <button
                                            class="btn-action"
                                            on:click=move |_| selected.set(Some(row.get_value()))
                                        >
                                            "Change Status"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

/// Modal listing every status; the current one is disabled.
#[component]
fn StatusDialog(
    order: Order,
    selected: RwSignal<Option<Order>>,
    updating: RwSignal<bool>,
    on_change: Callback<(String, OrderStatus)>,
) -> impl IntoView {
    let current = order.status;
    let id = StoredValue::new(order.id.clone());
    let username = order.user.as_ref().map(|u| u.username.clone()).unwrap_or_default();

    view! {
        <div class="modal-overlay" on:click=move |_| selected.set(None)>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <h3>"Change status of order #" {order.id.clone()}</h3>
                <p>"User: " {username}</p>
                <p>"Current status: " <StatusBadge status=current/></p>

                <div class="status-buttons">
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let class = if status == current {
                                format!("status-btn {} active", status.css_class())
                            } else {
                                format!("status-btn {}", status.css_class())
                            };
                            view! {
                                <button
                                    class=class
                                    disabled=move || updating.get() || status == current
                                    on:click=move |_| on_change.run((id.get_value(), status))
                                >
                                    {status.as_str()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="order-items-preview">
                    <OrderItemsList items=order.items/>
                    <p class="order-total">
                        <strong>"Total: " {format_price(order.total)}</strong>
                    </p>
                </div>

                <button class="btn-close" on:click=move |_| selected.set(None)>
                    "Close"
                </button>
            </div>
        </div>
    }
}
