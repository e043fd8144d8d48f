//! Shared order fragments: status badge and line-item list.

use leptos::prelude::*;

use crate::net::types::{OrderItem, OrderStatus};
use crate::util::format::format_price;

/// Colored badge for an order status.
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! { <span class=format!("order-status {}", status.css_class())>{status.as_str()}</span> }
}

/// Product lines of an order with quantity and unit price.
#[component]
pub fn OrderItemsList(items: Vec<OrderItem>) -> impl IntoView {
    view! {
        <div class="order-items">
            <h4>"Products:"</h4>
            {items
                .into_iter()
                .map(|item| {
                    let name = item.product.map(|p| p.name).unwrap_or_default();
                    view! {
                        <div class="order-item">
                            <span>{name} " x" {item.quantity}</span>
                            <span>{format_price(item.price)}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
