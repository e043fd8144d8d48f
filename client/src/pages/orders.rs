//! The signed-in user's orders and the new-order form.

use leptos::prelude::*;

use crate::components::order_summary::{OrderItemsList, StatusBadge};
use crate::net::api::ApiClient;
use crate::net::types::{Order, Product};
use crate::state::order_draft::OrderDraft;
use crate::util::auth::use_auth;
use crate::util::format::{format_date, format_price};

#[cfg(feature = "hydrate")]
const SUCCESS_CLEAR_DELAY: std::time::Duration = std::time::Duration::from_secs(3);

#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = use_auth();
    let orders = LocalResource::new(move || {
        let client = auth.with(ApiClient::for_session);
        async move { client.my_orders().await }
    });
    let products = LocalResource::new(move || {
        let client = auth.with(ApiClient::for_session);
        async move { client.products().await }
    });

    let show_form = RwSignal::new(false);
    let success = RwSignal::new(String::new());

    let on_created = Callback::new(move |order: Order| {
        show_form.set(false);
        success.set(format!("Order #{} created", order.id));
        orders.refetch();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(SUCCESS_CLEAR_DELAY).await;
            success.set(String::new());
        });
    });

    view! {
        <div class="orders-page">
            <div class="page-header">
                <h1>"My Orders"</h1>
                <button class="btn-primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Cancel" } else { "New Order" }}
                </button>
            </div>

            <Show when=move || !success.get().is_empty()>
                <div class="success-message">{move || success.get()}</div>
            </Show>

            <Show when=move || show_form.get()>
                <Suspense fallback=move || view! { <div class="loading">"Loading products..."</div> }>
                    {move || {
                        products
                            .get()
                            .map(|result| match result {
                                Ok(list) => view! { <OrderForm products=list on_created/> }.into_any(),
                                Err(e) => view! { <div class="error">"Error: " {e.to_string()}</div> }.into_any(),
                            })
                    }}
                </Suspense>
            </Show>

            <Suspense fallback=move || view! { <div class="loading">"Loading orders..."</div> }>
                {move || {
                    orders
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <div class="error">"Error: " {e.to_string()}</div> }.into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <div class="empty-state">
                                    <p>"You have no orders yet"</p>
                                </div>
                            }
                            .into_any(),
                            Ok(list) => view! {
                                <div class="orders-list">
                                    {list.into_iter().map(|order| view! { <OrderCard order/> }).collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    view! {
        <div class="order-card">
            <div class="order-header">
                <div>
                    <h3>"Order #" {order.id.clone()}</h3>
                    <p class="order-date">{format_date(&order.created_at)}</p>
                </div>
                <StatusBadge status=order.status/>
            </div>
            <OrderItemsList items=order.items/>
            <div class="order-total">
                <strong>"Total: " {format_price(order.total)}</strong>
            </div>
        </div>
    }
}

/// Product picker that builds an [`OrderDraft`] and submits it.
#[component]
fn OrderForm(products: Vec<Product>, on_created: Callback<Order>) -> impl IntoView {
    let auth = use_auth();
    let draft = RwSignal::new(OrderDraft::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let catalog = StoredValue::new(products);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match draft.with(OrderDraft::to_input) {
            Ok(input) => input,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = auth.with_untracked(ApiClient::for_session);
            leptos::task::spawn_local(async move {
                match client.create_order(&input).await {
                    Ok(order) => {
                        draft.update(OrderDraft::clear);
                        on_created.run(order);
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, auth, on_created);
        }
    };

    let estimate = move || catalog.with_value(|list| draft.with(|d| d.estimated_total(list)));

    view! {
        <div class="order-form-card">
            <h3>"New Order"</h3>
            <Show when=move || !error.get().is_empty()>
                <div class="error-message">{move || error.get()}</div>
            </Show>
            <form on:submit=on_submit>
                <div class="product-picker">
                    {catalog
                        .get_value()
                        .into_iter()
                        .map(|product| {
                            let id = StoredValue::new(product.id.clone());
                            let quantity = move || id.with_value(|id| draft.with(|d| d.quantity_of(id)));
                            view! {
                                <div class="picker-row">
                                    <span class="picker-name">{product.name}</span>
                                    <span class="picker-price">{format_price(product.price)}</span>
                                    <Show
                                        when=move || { quantity() > 0 }
                                        fallback=move || {
                                            view! {
                                                <button
                                                    type="button"
                                                    class="btn-secondary"
                                                    on:click=move |_| id.with_value(|id| draft.update(|d| d.add(id)))
                                                >
                                                    "Add"
                                                </button>
                                            }
                                        }
                                    >
                                        <input
                                            type="number"
                                            min="0"
                                            class="quantity-input"
                                            prop:value=move || quantity().to_string()
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                                                id.with_value(|id| draft.update(|d| d.set_quantity(id, value)));
                                            }
                                        />
                                        <button
                                            type="button"
                                            class="btn-delete"
                                            on:click=move |_| id.with_value(|id| draft.update(|d| d.remove(id)))
                                        >
                                            "Remove"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="order-estimate">"Estimated total: " {move || format_price(estimate())}</div>
                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Placing order..." } else { "Place Order" }}
                </button>
            </form>
        </div>
    }
}
